//! Storage provider trait for pluggable video file backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for video file storage backends.
///
/// The trait is defined here in `coursehub-core` and implemented in
/// `coursehub-storage`. Paths are relative to the provider root.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes to a file at the given path, replacing any existing file.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Read a file into memory.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Delete a file at the given path.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether a file exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
