//! Public video catalog handlers.

use axum::Json;
use axum::extract::{Path, State};

use coursehub_entity::video::Video;

use crate::dto::request::VideoLookupQuery;
use crate::dto::response::{VideoListResponse, VideoResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiQuery, VideoListParams, parse_video_id};
use crate::state::AppState;

/// Hide the access code from non-admin callers.
pub(crate) fn redact(mut video: Video, admin: bool) -> Video {
    if !admin {
        video.access_code = None;
    }
    video
}

/// GET /api/videos?page&limit&type&search&admin
pub async fn list_videos(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<VideoListParams>,
) -> ApiResult<Json<VideoListResponse>> {
    let admin = params.admin;
    let (filter, page) = params.into_query()?;
    let result = state.video_directory.list(&filter, page).await?;
    Ok(Json(VideoListResponse::from(
        result.map(|video| redact(video, admin)),
    )))
}

/// GET /api/videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<VideoLookupQuery>,
) -> ApiResult<Json<VideoResponse>> {
    let id = parse_video_id(&id)?;
    let video = state.video_directory.get(id).await?;
    Ok(Json(VideoResponse::ok(redact(video, query.admin))))
}
