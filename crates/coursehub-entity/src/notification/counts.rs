//! Derived notification counters.

use serde::{Deserialize, Serialize};

/// User key used when the caller does not identify itself.
pub const DEFAULT_USER_KEY: &str = "default";

/// Resolve the user key for a counts request. Absent or empty keys fall
/// back to [`DEFAULT_USER_KEY`]; any other value is used as given.
pub fn resolve_user_key(user: Option<&str>) -> String {
    user.filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_USER_KEY)
        .to_string()
}

/// Badge counters shown in the admin and learner navigation.
///
/// Only `quiz_scores` and `quiz_completed` are computed; the remaining
/// categories are reserved and always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCounts {
    /// Unread user and admin notifications.
    pub quiz_scores: u64,
    /// Reserved.
    pub course_remarks: u64,
    /// Reserved.
    pub general_courses: u64,
    /// Reserved.
    pub masterclass_courses: u64,
    /// Reserved.
    pub important_info: u64,
    /// Reserved.
    pub admin_messages: u64,
    /// Completed quizzes not yet reviewed by an admin.
    pub quiz_completed: u64,
    /// Reserved.
    pub course_completed: u64,
}

impl NotificationCounts {
    /// Counters with every field zero.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Counters built from the two computed values.
    pub fn computed(quiz_scores: u64, quiz_completed: u64) -> Self {
        Self {
            quiz_scores,
            quiz_completed,
            ..Self::default()
        }
    }
}

/// Where a set of counters came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountsSource {
    /// Computed from the store.
    Live,
    /// The store failed; counters are the all-zero fallback.
    Fallback,
}

/// Counters for one user together with their provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountsReport {
    /// The resolved user key.
    pub user: String,
    /// The counters.
    pub counts: NotificationCounts,
    /// Live or fallback.
    pub source: CountsSource,
}

impl CountsReport {
    /// A report computed from the store.
    pub fn live(user: String, counts: NotificationCounts) -> Self {
        Self {
            user,
            counts,
            source: CountsSource::Live,
        }
    }

    /// The degraded all-zero report.
    pub fn fallback(user: String) -> Self {
        Self {
            user,
            counts: NotificationCounts::zeroed(),
            source: CountsSource::Fallback,
        }
    }
}
