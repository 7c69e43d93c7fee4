//! Admin video management: upload, edit, delete.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use bytes::Bytes;
use validator::Validate;

use coursehub_core::error::AppError;
use coursehub_entity::video::rules::size_limit_message;
use coursehub_entity::video::{VideoChanges, VideoFields, VideoType};
use coursehub_service::UploadVideoParams;

use crate::dto::request::UpdateVideoRequest;
use crate::dto::response::{SuccessResponse, VideoResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiJson, parse_video_id};
use crate::state::AppState;

fn multipart_error(e: MultipartError, max_bytes: u64) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(size_limit_message(max_bytes))
    } else {
        AppError::validation(format!("Malformed upload: {}", e.body_text()))
    }
}

/// POST /api/admin/upload-video
///
/// Multipart fields: `title`, `description`, `videoType`, `category`,
/// `accessCode` and the `videoFile` part.
pub async fn upload_video(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<(StatusCode, Json<VideoResponse>)> {
    let mut multipart =
        multipart.map_err(|e| AppError::validation(format!("Expected a multipart upload: {e}")))?;
    let max_bytes = state.video_upload.max_upload_size_bytes();

    let mut fields = VideoFields::default();
    let mut file: Option<(String, Option<String>, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "videoFile" {
            let file_name = field.file_name().unwrap_or("").to_string();
            let mime_type = field.content_type().map(String::from);
            let data = field
                .bytes()
                .await
                .map_err(|e| multipart_error(e, max_bytes))?;
            file = Some((file_name, mime_type, data));
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?;
        match name.as_str() {
            "title" => fields.title = text,
            "description" => fields.description = text,
            "videoType" if !text.trim().is_empty() => fields.video_type = text.parse::<VideoType>()?,
            "category" => fields.category = Some(text),
            "accessCode" => fields.access_code = Some(text),
            _ => {}
        }
    }

    let (file_name, mime_type, data) =
        file.ok_or_else(|| AppError::validation("Video file is required"))?;

    let video = state
        .video_upload
        .upload(UploadVideoParams {
            fields,
            file_name,
            mime_type,
            data,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(VideoResponse::ok(video))))
}

/// PUT /api/admin/videos/{id}
pub async fn update_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateVideoRequest>,
) -> ApiResult<Json<VideoResponse>> {
    let id = parse_video_id(&id)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let video = state
        .video_directory
        .update(id, VideoChanges::from(req))
        .await?;
    Ok(Json(VideoResponse::ok(video)))
}

/// DELETE /api/admin/videos/{id}
pub async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    let id = parse_video_id(&id)?;
    state.video_directory.delete(id).await?;
    Ok(Json(SuccessResponse { success: true }))
}
