//! Video catalog services: browsing, editing, deleting and uploading.

pub mod directory;
pub mod upload;

pub use directory::VideoDirectoryService;
pub use upload::{UploadVideoParams, VideoUploadService};
