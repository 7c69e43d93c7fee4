//! Upload and edit forms with client-side validation.

use std::path::Path;

use bytes::Bytes;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;
use coursehub_entity::video::rules::{
    MAX_VIDEO_SIZE_BYTES, check_video_type, file_extension, size_limit_message,
};
use coursehub_entity::video::{Video, VideoChanges, VideoFields, VideoType};

/// Shown when a required upload field or the file is missing.
pub const MISSING_UPLOAD_FIELDS: &str = "Please fill all fields and select a video file";
/// Shown when a masterclass upload has no access code.
pub const MISSING_ACCESS_CODE: &str = "Please provide an access code for masterclass videos";
/// Shown when the chosen file is not a supported video.
pub const NOT_A_VIDEO: &str = "Please select a video file (MP4, MOV, AVI, MKV, WEBM)";
/// Shown when an edit leaves the title or description blank.
pub const MISSING_EDIT_FIELDS: &str = "Please fill all required fields";

/// A video file chosen for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name sent to the server.
    pub name: String,
    /// Declared content type.
    pub mime_type: Option<String>,
    /// File content.
    pub data: Bytes,
}

impl SelectedFile {
    /// Wrap in-memory content. The MIME type is guessed from the extension
    /// when not given.
    pub fn new(name: impl Into<String>, mime_type: Option<String>, data: Bytes) -> Self {
        let name = name.into();
        let mime_type = mime_type.or_else(|| guess_video_mime(&name).map(String::from));
        Self {
            name,
            mime_type,
            data,
        }
    }

    /// Read a file from disk.
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::validation(format!("Invalid file path: {}", path.display())))?
            .to_string();
        let data = tokio::fs::read(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read {}", path.display()),
                e,
            )
        })?;
        Ok(Self::new(name, None, Bytes::from(data)))
    }

    /// Size in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}

fn guess_video_mime(name: &str) -> Option<&'static str> {
    let mime = match file_extension(name)?.as_str() {
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        _ => return None,
    };
    Some(mime)
}

/// The "upload video" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// General or masterclass.
    pub video_type: VideoType,
    /// Optional category.
    pub category: String,
    /// Required for masterclass videos.
    pub access_code: String,
    file: Option<SelectedFile>,
}

impl UploadForm {
    /// An empty form for `video_type`.
    pub fn for_type(video_type: VideoType) -> Self {
        Self {
            video_type,
            ..Self::default()
        }
    }

    /// Choose the file to upload. An unsupported or oversize file is
    /// refused and any previous choice is cleared.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), String> {
        self.file = None;
        if check_video_type(&file.name, file.mime_type.as_deref()).is_err() {
            return Err(NOT_A_VIDEO.to_string());
        }
        if file.size_bytes() > MAX_VIDEO_SIZE_BYTES {
            return Err(size_limit_message(MAX_VIDEO_SIZE_BYTES));
        }
        self.file = Some(file);
        Ok(())
    }

    /// The chosen file.
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Check the form before submitting.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() || self.file.is_none()
        {
            return Err(MISSING_UPLOAD_FIELDS.to_string());
        }
        if self.video_type.requires_access_code() && self.access_code.trim().is_empty() {
            return Err(MISSING_ACCESS_CODE.to_string());
        }
        Ok(())
    }

    /// The metadata part of the upload.
    pub fn fields(&self) -> VideoFields {
        VideoFields {
            title: self.title.clone(),
            description: self.description.clone(),
            video_type: self.video_type,
            category: Some(self.category.clone()),
            access_code: Some(self.access_code.clone()),
        }
    }

    /// Clear every field and the file, back to a general video.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The "edit video" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Category; empty clears it.
    pub category: String,
    /// Published.
    pub is_active: bool,
}

impl EditForm {
    /// Pre-fill from an existing video.
    pub fn from_video(video: &Video) -> Self {
        Self {
            title: video.title.clone(),
            description: video.description.clone(),
            category: video.category.clone().unwrap_or_default(),
            is_active: video.is_active,
        }
    }

    /// Check the form before submitting.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(MISSING_EDIT_FIELDS.to_string());
        }
        Ok(())
    }

    /// The edit to send.
    pub fn changes(&self) -> VideoChanges {
        VideoChanges {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            is_active: Some(self.is_active),
        }
    }
}
