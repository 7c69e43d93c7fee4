//! Upload rules shared by the server and the admin console.

use coursehub_core::error::AppError;
use coursehub_core::result::AppResult;

/// File extensions accepted for video uploads.
pub const ALLOWED_VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "mkv", "webm"];

/// Default upload ceiling: 500 MB.
pub const MAX_VIDEO_SIZE_BYTES: u64 = 500 * 1024 * 1024;

/// Lowercase extension of `file_name`, if it has one.
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Check that an uploaded file looks like a supported video.
///
/// Returns the normalized extension on success. The extension must be in
/// [`ALLOWED_VIDEO_EXTENSIONS`]; a declared MIME type, when present, must be
/// `video/*` or `application/octet-stream`.
pub fn check_video_type(file_name: &str, mime_type: Option<&str>) -> AppResult<String> {
    let ext = file_extension(file_name)
        .filter(|ext| ALLOWED_VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| {
            AppError::validation("Please select a video file (MP4, MOV, AVI, MKV, WEBM)")
        })?;

    if let Some(mime) = mime_type.map(str::trim).filter(|m| !m.is_empty()) {
        let mime = mime.to_lowercase();
        if !mime.starts_with("video/") && mime != "application/octet-stream" {
            return Err(AppError::validation(format!(
                "Unsupported content type '{mime}' for a video upload"
            )));
        }
    }

    Ok(ext)
}

/// User-facing message for an upload over `max_bytes`.
pub fn size_limit_message(max_bytes: u64) -> String {
    format!("File size must be less than {}MB", max_bytes / (1024 * 1024))
}

/// Check an upload size against `max_bytes`.
pub fn check_video_size(size_bytes: u64, max_bytes: u64) -> AppResult<()> {
    if size_bytes == 0 {
        return Err(AppError::validation("Video file is empty"));
    }
    if size_bytes > max_bytes {
        return Err(AppError::payload_too_large(size_limit_message(max_bytes)));
    }
    Ok(())
}
