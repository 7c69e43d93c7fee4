//! Notification and quiz result counters.

use async_trait::async_trait;
use sqlx::PgPool;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;
use coursehub_entity::notification::model::QUIZ_STATUS_COMPLETED;

/// Read-only counters behind the notification badges.
#[async_trait]
pub trait NotificationCounter: Send + Sync + 'static {
    /// Unread notifications addressed to `user`, plus every unread admin
    /// notification.
    async fn count_unread_for(&self, user: &str) -> AppResult<u64>;

    /// Completed quiz results no admin has reviewed yet.
    async fn count_unreviewed_quiz_completions(&self) -> AppResult<u64>;
}

/// PostgreSQL-backed [`NotificationCounter`].
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationCounter for NotificationRepository {
    async fn count_unread_for(&self, user: &str) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications \
             WHERE read = FALSE AND ((for_user = TRUE AND user_id = $1) OR for_admin = TRUE)",
        )
        .bind(user)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count unread notifications", e)
        })?;
        Ok(count.max(0) as u64)
    }

    async fn count_unreviewed_quiz_completions(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM quiz_results WHERE status = $1 AND read_by_admin = FALSE",
        )
        .bind(QUIZ_STATUS_COMPLETED)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count completed quizzes", e)
        })?;
        Ok(count.max(0) as u64)
    }
}
