//! Notification domain entities.

pub mod counts;
pub mod model;

pub use counts::{CountsReport, CountsSource, NotificationCounts, resolve_user_key};
pub use model::{Notification, QuizResult};
