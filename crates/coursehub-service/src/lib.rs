//! # coursehub-service
//!
//! Business logic for CourseHub. Each service orchestrates a repository
//! trait object and, where blobs are involved, the storage manager.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod notification;
pub mod video;

pub use notification::NotificationCountService;
pub use video::{UploadVideoParams, VideoDirectoryService, VideoUploadService};
