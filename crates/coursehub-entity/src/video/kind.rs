//! Video type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two kinds of course video.
///
/// Masterclass videos are premium content gated by an access code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "video_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    /// Openly accessible course video.
    #[default]
    General,
    /// Premium video that requires an access code.
    Masterclass,
}

impl VideoType {
    /// Whether videos of this type must carry an access code.
    pub fn requires_access_code(&self) -> bool {
        matches!(self, Self::Masterclass)
    }

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Masterclass => "masterclass",
        }
    }
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VideoType {
    type Err = coursehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Self::General),
            "masterclass" => Ok(Self::Masterclass),
            _ => Err(coursehub_core::AppError::validation(format!(
                "Invalid video type: '{s}'. Expected one of: general, masterclass"
            ))),
        }
    }
}
