//! Single-request video upload.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info};
use uuid::Uuid;

use coursehub_core::config::StorageConfig;
use coursehub_core::error::AppError;
use coursehub_database::repositories::VideoStore;
use coursehub_entity::video::rules::{check_video_size, check_video_type};
use coursehub_entity::video::{CreateVideo, Video, VideoFields};
use coursehub_storage::{StorageManager, video_blob_path};

/// An uploaded file together with the admin-entered metadata.
#[derive(Debug, Clone)]
pub struct UploadVideoParams {
    /// Title, description, type, category and access code.
    pub fields: VideoFields,
    /// Client-side file name.
    pub file_name: String,
    /// Declared MIME type.
    pub mime_type: Option<String>,
    /// File content.
    pub data: Bytes,
}

/// Validates uploads, stores the blob and records the video.
#[derive(Clone)]
pub struct VideoUploadService {
    /// Video records.
    videos: Arc<dyn VideoStore>,
    /// Blob storage.
    storage: Arc<StorageManager>,
    /// Upload ceiling in bytes.
    max_upload_size_bytes: u64,
}

impl std::fmt::Debug for VideoUploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoUploadService")
            .field("max_upload_size_bytes", &self.max_upload_size_bytes)
            .finish()
    }
}

impl VideoUploadService {
    /// Creates a new upload service.
    pub fn new(
        videos: Arc<dyn VideoStore>,
        storage: Arc<StorageManager>,
        config: &StorageConfig,
    ) -> Self {
        Self {
            videos,
            storage,
            max_upload_size_bytes: config.max_upload_size_bytes,
        }
    }

    /// The configured upload ceiling.
    pub fn max_upload_size_bytes(&self) -> u64 {
        self.max_upload_size_bytes
    }

    /// Validate, store and record a new video. The new video is active.
    pub async fn upload(&self, params: UploadVideoParams) -> Result<Video, AppError> {
        let fields = params.fields.normalize()?;
        let extension = check_video_type(&params.file_name, params.mime_type.as_deref())?;
        check_video_size(params.data.len() as u64, self.max_upload_size_bytes)?;

        let id = Uuid::new_v4();
        let storage_path = video_blob_path(id, &extension);
        let size_bytes = params.data.len() as i64;
        let provider = self.storage.provider();

        provider.write(&storage_path, params.data).await?;

        let record = CreateVideo {
            id,
            fields,
            file_name: params.file_name,
            storage_path: storage_path.clone(),
            mime_type: params.mime_type,
            size_bytes,
        };

        let video = match self.videos.create(record).await {
            Ok(video) => video,
            Err(e) => {
                if let Err(cleanup) = provider.delete(&storage_path).await {
                    error!(
                        path = %storage_path,
                        error = %cleanup,
                        "Failed to remove orphaned video file"
                    );
                }
                return Err(e);
            }
        };

        info!(
            video_id = %video.id,
            title = %video.title,
            video_type = %video.video_type,
            size = video.size_bytes,
            "Video uploaded"
        );
        Ok(video)
    }
}
