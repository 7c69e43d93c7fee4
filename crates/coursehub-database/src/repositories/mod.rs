//! Repository traits and their PostgreSQL implementations.

#[cfg(feature = "mock")]
pub mod mock;
pub mod notification;
pub mod video;

pub use notification::{NotificationCounter, NotificationRepository};
pub use video::{VideoRepository, VideoStore};
