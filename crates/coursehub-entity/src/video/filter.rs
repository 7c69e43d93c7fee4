//! Listing filter for the video directory.

use serde::{Deserialize, Serialize};

use coursehub_core::result::AppResult;

use super::kind::VideoType;
use super::model::Video;

/// Server-side filter applied before pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFilter {
    /// Restrict to one video type.
    pub video_type: Option<VideoType>,
    /// Case-insensitive substring searched in title, description and
    /// category. Stored trimmed; never empty.
    pub search: Option<String>,
    /// Include inactive videos. Only admin listings set this: a deactivated
    /// video is hidden from the public catalog but stays manageable from the
    /// admin table.
    pub include_inactive: bool,
}

impl VideoFilter {
    /// Build a filter from raw query parameters. Blank values mean "no
    /// filter"; an unknown type is rejected.
    pub fn from_params(
        video_type: Option<&str>,
        search: Option<&str>,
        include_inactive: bool,
    ) -> AppResult<Self> {
        let video_type = match video_type.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => Some(t.parse::<VideoType>()?),
            None => None,
        };
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Ok(Self {
            video_type,
            search,
            include_inactive,
        })
    }

    /// Lowercased search term, if any.
    pub fn search_lowercase(&self) -> Option<String> {
        self.search.as_deref().map(str::to_lowercase)
    }

    /// Whether `video` passes this filter.
    pub fn matches(&self, video: &Video) -> bool {
        if !self.include_inactive && !video.is_active {
            return false;
        }
        if self.video_type.is_some_and(|t| t != video.video_type) {
            return false;
        }
        match self.search_lowercase() {
            Some(term) => video.matches_search(&term),
            None => true,
        }
    }
}
