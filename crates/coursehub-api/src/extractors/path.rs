//! Typed path parameter helpers.

use uuid::Uuid;

use coursehub_core::error::AppError;

/// Parses a video id from a path segment.
pub fn parse_video_id(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s.trim()).map_err(|_| AppError::validation(format!("Invalid video id: {s}")))
}
