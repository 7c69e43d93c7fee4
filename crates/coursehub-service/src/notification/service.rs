//! Notification badge counts with a zeroed fallback.

use std::sync::Arc;

use tracing::{debug, error};

use coursehub_core::error::AppError;
use coursehub_database::repositories::NotificationCounter;
use coursehub_entity::notification::{CountsReport, NotificationCounts, resolve_user_key};

/// Computes the navigation badge counters.
#[derive(Clone)]
pub struct NotificationCountService {
    /// Notification and quiz result counters.
    counter: Arc<dyn NotificationCounter>,
}

impl std::fmt::Debug for NotificationCountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCountService").finish()
    }
}

impl NotificationCountService {
    /// Creates a new count service.
    pub fn new(counter: Arc<dyn NotificationCounter>) -> Self {
        Self { counter }
    }

    /// Compute the counters for `user`. The two store queries run
    /// concurrently and are not read atomically with respect to each other.
    pub async fn counts(&self, user: &str) -> Result<NotificationCounts, AppError> {
        let (quiz_scores, quiz_completed) = tokio::try_join!(
            self.counter.count_unread_for(user),
            self.counter.count_unreviewed_quiz_completions(),
        )?;
        Ok(NotificationCounts::computed(quiz_scores, quiz_completed))
    }

    /// Counters for the requesting user, never failing.
    ///
    /// A store failure yields [`CountsReport::fallback`] with every counter
    /// zero.
    pub async fn report(&self, user: Option<&str>) -> CountsReport {
        let user = resolve_user_key(user);
        match self.counts(&user).await {
            Ok(counts) => {
                debug!(user = %user, quiz_scores = counts.quiz_scores, "Computed notification counts");
                CountsReport::live(user, counts)
            }
            Err(e) => {
                error!(user = %user, error = %e, "Notification counts unavailable, returning zeros");
                CountsReport::fallback(user)
            }
        }
    }
}
