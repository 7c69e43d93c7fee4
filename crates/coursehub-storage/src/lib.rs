//! # coursehub-storage
//!
//! Blob storage for uploaded course videos. The local filesystem is the
//! only backend; [`StorageManager`] hands the configured provider to the
//! services.

pub mod manager;
pub mod providers;

pub use manager::{StorageManager, video_blob_path};
pub use providers::LocalStorageProvider;
