//! Notification and quiz result rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Quiz result status that admins are notified about.
pub const QUIZ_STATUS_COMPLETED: &str = "completed";

/// A notification addressed to a user, to admins, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// Recipient user key.
    pub user_id: String,
    /// Shown to the user identified by `user_id`.
    pub for_user: bool,
    /// Shown to every admin.
    pub for_admin: bool,
    /// Whether it has been read.
    pub read: bool,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Whether this notification counts toward `user`'s unread badge.
    ///
    /// Unread user notifications addressed to `user` count, and so does
    /// every unread admin notification.
    pub fn is_unread_for(&self, user: &str) -> bool {
        !self.read && ((self.for_user && self.user_id == user) || self.for_admin)
    }
}

/// A learner's quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    /// Unique result identifier.
    pub id: Uuid,
    /// The learner.
    pub user_id: String,
    /// Attempt status, e.g. `"completed"`.
    pub status: String,
    /// Whether an admin has reviewed it.
    pub read_by_admin: bool,
    /// When the attempt was recorded.
    pub created_at: DateTime<Utc>,
}

impl QuizResult {
    /// Whether the result is a completed attempt no admin has seen yet.
    pub fn awaits_admin_review(&self) -> bool {
        self.status == QUIZ_STATUS_COMPLETED && !self.read_by_admin
    }
}
