//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use coursehub_core::config::AppConfig;
use coursehub_database::repositories::{NotificationCounter, VideoStore};
use coursehub_service::{NotificationCountService, VideoDirectoryService, VideoUploadService};
use coursehub_storage::StorageManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Video blob storage
    pub storage: Arc<StorageManager>,
    /// Listing, lookup, edit and delete of videos
    pub video_directory: Arc<VideoDirectoryService>,
    /// Video uploads
    pub video_upload: Arc<VideoUploadService>,
    /// Notification badge counters
    pub notification_counts: Arc<NotificationCountService>,
}

impl AppState {
    /// Wire the services over the given stores.
    pub fn new(
        config: AppConfig,
        videos: Arc<dyn VideoStore>,
        counter: Arc<dyn NotificationCounter>,
        storage: Arc<StorageManager>,
    ) -> Self {
        let video_directory = Arc::new(VideoDirectoryService::new(
            Arc::clone(&videos),
            Arc::clone(&storage),
        ));
        let video_upload = Arc::new(VideoUploadService::new(
            videos,
            Arc::clone(&storage),
            &config.storage,
        ));
        let notification_counts = Arc::new(NotificationCountService::new(counter));

        Self {
            config: Arc::new(config),
            storage,
            video_directory,
            video_upload,
            notification_counts,
        }
    }
}
