//! Response DTOs.

use serde::{Deserialize, Serialize};

use coursehub_core::types::pagination::PageResponse;
use coursehub_entity::notification::NotificationCounts;
use coursehub_entity::video::Video;

/// `GET /api/test`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Greeting.
    pub message: String,
}

/// `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `true`.
    pub success: bool,
    /// `"ok"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `"healthy"` or `"unhealthy"`.
    pub storage: String,
}

/// `GET /api/notifications/counts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountsResponse {
    /// Always `true`, even for fallback counts.
    pub success: bool,
    /// The eight counters.
    pub counts: NotificationCounts,
    /// Resolved user key.
    pub user: String,
}

/// `GET /api/videos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    /// Always `true`.
    pub success: bool,
    /// The requested page.
    pub videos: Vec<Video>,
    /// Matching videos across all pages.
    pub total_count: u64,
    /// Page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
    /// `ceil(totalCount / limit)`.
    pub total_pages: u64,
}

impl From<PageResponse<Video>> for VideoListResponse {
    fn from(page: PageResponse<Video>) -> Self {
        Self {
            success: true,
            videos: page.items,
            total_count: page.total_items,
            page: page.page,
            limit: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

/// A single video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResponse {
    /// Always `true`.
    pub success: bool,
    /// The video.
    pub video: Video,
}

impl VideoResponse {
    /// Wrap a video.
    pub fn ok(video: Video) -> Self {
        Self {
            success: true,
            video,
        }
    }
}

/// Bare acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
}
