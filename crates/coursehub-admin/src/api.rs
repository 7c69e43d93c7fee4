//! The operations the console needs from the CourseHub server.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use coursehub_core::result::AppResult;
use coursehub_entity::notification::NotificationCounts;
use coursehub_entity::video::{Video, VideoChanges, VideoFields};

use crate::form::SelectedFile;
use crate::query::VideoQuery;

/// One page of the listing as returned by `GET /api/videos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPage {
    /// Videos on this page.
    #[serde(default)]
    pub videos: Vec<Video>,
    /// Matching videos across all pages.
    #[serde(default)]
    pub total_count: u64,
    /// Page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
    /// Number of pages.
    #[serde(default)]
    pub total_pages: u64,
}

/// Badge counters as returned by `GET /api/notifications/counts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountsPayload {
    /// The counters.
    pub counts: NotificationCounts,
    /// User the counters were computed for.
    #[serde(default)]
    pub user: String,
}

/// A new video to upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Metadata.
    pub fields: VideoFields,
    /// The file.
    pub file: SelectedFile,
}

/// Remote video catalog.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Fetch the page described by `query`.
    async fn list(&self, query: &VideoQuery) -> AppResult<VideoPage>;

    /// Upload a new video.
    async fn upload(&self, request: UploadRequest) -> AppResult<Video>;

    /// Edit a video.
    async fn update(&self, id: Uuid, changes: &VideoChanges) -> AppResult<Video>;

    /// Delete a video.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Notification counters for `user`.
    async fn counts(&self, user: Option<&str>) -> AppResult<CountsPayload>;
}
