//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use coursehub_entity::video::VideoChanges;

/// `PUT /api/admin/videos/{id}` body. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest {
    /// New title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    /// New description.
    #[validate(length(
        min = 1,
        max = 5000,
        message = "Description must be 1-5000 characters"
    ))]
    pub description: Option<String>,
    /// New category; an empty string clears it.
    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,
    /// Publish or hide the video.
    pub is_active: Option<bool>,
}

impl From<UpdateVideoRequest> for VideoChanges {
    fn from(req: UpdateVideoRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            category: req.category,
            is_active: req.is_active,
        }
    }
}

/// `GET /api/notifications/counts` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountsQuery {
    /// The requesting user; defaults to `"default"`.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// `GET /api/videos/{id}` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoLookupQuery {
    /// Reveal the access code.
    #[serde(default)]
    pub admin: bool,
}
