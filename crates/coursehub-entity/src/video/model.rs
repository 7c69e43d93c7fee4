//! Video entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use coursehub_core::error::AppError;
use coursehub_core::result::AppResult;

use super::kind::VideoType;

/// A course video managed from the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Unique video identifier.
    #[serde(alias = "_id")]
    pub id: Uuid,
    /// Video title.
    pub title: String,
    /// Video description.
    pub description: String,
    /// General or masterclass.
    pub video_type: VideoType,
    /// Optional free-form category.
    pub category: Option<String>,
    /// Access code; present only for masterclass videos.
    pub access_code: Option<String>,
    /// Whether the video is visible to learners.
    pub is_active: bool,
    /// Original name of the uploaded file.
    pub file_name: String,
    /// Path within the storage provider.
    pub storage_path: String,
    /// MIME type declared at upload.
    pub mime_type: Option<String>,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Duration string filled in by transcoding, if any.
    pub duration: Option<String>,
    /// When the video was uploaded. Never changes.
    #[serde(alias = "uploadedAt")]
    pub created_at: DateTime<Utc>,
    /// When the video was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Whether the title, description or category contains `term`,
    /// ignoring case. `term` is expected to be lowercase already.
    pub fn matches_search(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
            || self
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(term))
    }
}

/// Metadata supplied by the admin when uploading a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFields {
    /// Video title.
    pub title: String,
    /// Video description.
    pub description: String,
    /// General or masterclass.
    #[serde(default)]
    pub video_type: VideoType,
    /// Optional category; blank means none.
    #[serde(default)]
    pub category: Option<String>,
    /// Access code; required for masterclass, ignored otherwise.
    #[serde(default)]
    pub access_code: Option<String>,
}

impl VideoFields {
    /// Validate and normalize the fields.
    ///
    /// Title and description are trimmed and must be non-empty. A blank
    /// category becomes `None`. Masterclass videos must carry a non-blank
    /// access code; general videos never keep one.
    pub fn normalize(self) -> AppResult<Self> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(AppError::validation("Description is required"));
        }

        let access_code = if self.video_type.requires_access_code() {
            let code = non_blank(self.access_code).ok_or_else(|| {
                AppError::validation("Access code is required for masterclass videos")
            })?;
            Some(code)
        } else {
            None
        };

        Ok(Self {
            title,
            description,
            video_type: self.video_type,
            category: non_blank(self.category),
            access_code,
        })
    }
}

/// Data required to insert a new video record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideo {
    /// Identifier chosen before the file is stored.
    pub id: Uuid,
    /// Normalized metadata.
    pub fields: VideoFields,
    /// Original file name.
    pub file_name: String,
    /// Path within the storage provider.
    pub storage_path: String,
    /// Declared MIME type.
    pub mime_type: Option<String>,
    /// File size in bytes.
    pub size_bytes: i64,
}

impl CreateVideo {
    /// Build the record as it will be persisted at `now`.
    pub fn into_video(self, now: DateTime<Utc>) -> Video {
        Video {
            id: self.id,
            title: self.fields.title,
            description: self.fields.description,
            video_type: self.fields.video_type,
            category: self.fields.category,
            access_code: self.fields.access_code,
            is_active: true,
            file_name: self.file_name,
            storage_path: self.storage_path,
            mime_type: self.mime_type,
            size_bytes: self.size_bytes,
            duration: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Edits an admin may apply to an existing video.
///
/// Absent fields stay unchanged. Video type and access code cannot be
/// edited after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoChanges {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category; an empty string clears it.
    pub category: Option<String>,
    /// New visibility.
    pub is_active: Option<bool>,
}

impl VideoChanges {
    /// Validate the changes. Provided titles and descriptions must not be
    /// blank.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if self
            .description
            .as_deref()
            .is_some_and(|d| d.trim().is_empty())
        {
            return Err(AppError::validation("Description cannot be empty"));
        }
        Ok(())
    }

    /// Apply the changes to `video`, stamping `updated_at` with `now`.
    pub fn apply_to(&self, video: &mut Video, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            video.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            video.description = description.trim().to_string();
        }
        if let Some(category) = &self.category {
            video.category = non_blank(Some(category.clone()));
        }
        if let Some(active) = self.is_active {
            video.is_active = active;
        }
        video.updated_at = now;
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
