//! Query parameters of the video listing endpoint.

use serde::{Deserialize, Serialize};

use coursehub_core::error::AppError;
use coursehub_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use coursehub_entity::video::VideoFilter;

/// `GET /api/videos?page&limit&type&search&admin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 20).
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// `general` or `masterclass`; blank means all.
    #[serde(rename = "type")]
    pub video_type: Option<String>,
    /// Case-insensitive substring over title, description and category.
    pub search: Option<String>,
    /// Include inactive videos and access codes.
    #[serde(default)]
    pub admin: bool,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for VideoListParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            video_type: None,
            search: None,
            admin: false,
        }
    }
}

impl VideoListParams {
    /// Split into the filter and the page. Zero page or limit and unknown
    /// types are rejected.
    pub fn into_query(self) -> Result<(VideoFilter, PageRequest), AppError> {
        let page = PageRequest::new(self.page, self.limit)?;
        let filter = VideoFilter::from_params(
            self.video_type.as_deref(),
            self.search.as_deref(),
            self.admin,
        )?;
        Ok((filter, page))
    }
}
