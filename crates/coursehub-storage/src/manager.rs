//! Storage manager: the single place services obtain the blob backend from.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use coursehub_core::config::StorageConfig;
use coursehub_core::result::AppResult;
use coursehub_core::traits::storage::StorageProvider;

use crate::providers::LocalStorageProvider;

/// Directory under the storage root holding video blobs.
pub const VIDEO_PREFIX: &str = "videos";

/// Relative blob path for a video: `videos/<id>.<ext>`.
pub fn video_blob_path(id: Uuid, extension: &str) -> String {
    format!("{VIDEO_PREFIX}/{id}.{}", extension.to_ascii_lowercase())
}

/// Owns the configured storage provider.
#[derive(Debug, Clone)]
pub struct StorageManager {
    provider: Arc<dyn StorageProvider>,
}

impl StorageManager {
    /// Wrap an existing provider.
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    /// Build the provider described by `config`.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let provider = LocalStorageProvider::new(&config.local.root_path).await?;
        info!(root = %config.local.root_path, "Local video storage ready");
        Ok(Self::new(Arc::new(provider)))
    }

    /// The active provider.
    pub fn provider(&self) -> Arc<dyn StorageProvider> {
        Arc::clone(&self.provider)
    }

    /// `"healthy"` or `"unhealthy"`, for the health endpoint.
    pub async fn health_status(&self) -> &'static str {
        match self.provider.health_check().await {
            Ok(true) => "healthy",
            _ => "unhealthy",
        }
    }
}
