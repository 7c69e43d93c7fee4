//! Immutable listing query.

use coursehub_core::types::pagination::DEFAULT_PAGE_SIZE;
use coursehub_entity::video::VideoType;

/// Page sizes offered by the console.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [10, 20, 50, 100];

/// What the console is currently looking at.
///
/// Every change produces a new query. Changing the page size, the type
/// filter or the search term starts again from page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
    page: u64,
    page_size: u64,
    video_type: Option<VideoType>,
    search: String,
    admin: bool,
}

impl Default for VideoQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            video_type: None,
            search: String::new(),
            admin: true,
        }
    }
}

impl VideoQuery {
    /// Page 1 of every video, active or not.
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based page.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Videos per page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Type filter.
    pub fn video_type(&self) -> Option<VideoType> {
        self.video_type
    }

    /// Search term as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Whether inactive videos are included.
    pub fn admin(&self) -> bool {
        self.admin
    }

    /// Same query on another page. Pages below 1 become 1.
    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// New page size, back on page 1.
    pub fn with_page_size(&self, page_size: u64) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            ..self.clone()
        }
    }

    /// New type filter, back on page 1.
    pub fn with_type(&self, video_type: Option<VideoType>) -> Self {
        Self {
            page: 1,
            video_type,
            ..self.clone()
        }
    }

    /// New search term, back on page 1.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            page: 1,
            search: search.into(),
            ..self.clone()
        }
    }

    /// Include or exclude inactive videos.
    pub fn with_admin(&self, admin: bool) -> Self {
        Self {
            admin,
            ..self.clone()
        }
    }

    /// Query string pairs for `GET /api/videos`.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.page_size.to_string()),
        ];
        if let Some(video_type) = self.video_type {
            params.push(("type", video_type.as_str().to_string()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        if self.admin {
            params.push(("admin", "true".to_string()));
        }
        params
    }
}
