//! Listing, lookup, editing and deletion of catalog videos.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use coursehub_core::error::AppError;
use coursehub_core::types::pagination::{PageRequest, PageResponse};
use coursehub_database::repositories::VideoStore;
use coursehub_entity::video::{Video, VideoChanges, VideoFilter};
use coursehub_storage::StorageManager;

/// Browse and administer the video catalog.
#[derive(Clone)]
pub struct VideoDirectoryService {
    /// Video records.
    videos: Arc<dyn VideoStore>,
    /// Blob storage, for removing files of deleted videos.
    storage: Arc<StorageManager>,
}

impl std::fmt::Debug for VideoDirectoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoDirectoryService").finish()
    }
}

impl VideoDirectoryService {
    /// Creates a new directory service.
    pub fn new(videos: Arc<dyn VideoStore>, storage: Arc<StorageManager>) -> Self {
        Self { videos, storage }
    }

    /// One page of videos matching `filter`, newest first.
    ///
    /// A page past the end yields an empty page carrying the real totals.
    pub async fn list(
        &self,
        filter: &VideoFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Video>, AppError> {
        self.videos.list(filter, &page).await
    }

    /// Fetch one video.
    pub async fn get(&self, id: Uuid) -> Result<Video, AppError> {
        self.videos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Video not found"))
    }

    /// Apply an admin edit. Only title, description, category and the
    /// active flag can change.
    pub async fn update(&self, id: Uuid, changes: VideoChanges) -> Result<Video, AppError> {
        changes.validate()?;

        let mut video = self.get(id).await?;
        changes.apply_to(&mut video, Utc::now());

        let video = self
            .videos
            .update(&video)
            .await?
            .ok_or_else(|| AppError::not_found("Video not found"))?;

        info!(video_id = %video.id, is_active = video.is_active, "Video updated");
        Ok(video)
    }

    /// Hard-delete a video, then remove its blob.
    ///
    /// Failing to remove the blob is logged and does not fail the call.
    pub async fn delete(&self, id: Uuid) -> Result<Video, AppError> {
        let video = self
            .videos
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Video not found"))?;

        if let Err(e) = self.storage.provider().delete(&video.storage_path).await {
            warn!(
                video_id = %video.id,
                path = %video.storage_path,
                error = %e,
                "Video deleted but its file could not be removed"
            );
        }

        info!(video_id = %video.id, title = %video.title, "Video deleted");
        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use chrono::Duration;

    use coursehub_core::error::ErrorKind;
    use coursehub_database::repositories::mock::MockVideoStore;
    use coursehub_entity::video::VideoType;
    use coursehub_storage::LocalStorageProvider;

    use super::*;

    fn video(title: &str, video_type: VideoType, seconds_ago: i64) -> Video {
        let created_at = Utc::now() - Duration::seconds(seconds_ago);
        let id = Uuid::new_v4();
        Video {
            id,
            title: title.to_string(),
            description: "Course material".to_string(),
            video_type,
            category: None,
            access_code: (video_type == VideoType::Masterclass).then(|| "SECRET".to_string()),
            is_active: true,
            file_name: format!("{title}.mp4"),
            storage_path: format!("videos/{id}.mp4"),
            mime_type: Some("video/mp4".to_string()),
            size_bytes: 4,
            duration: None,
            created_at,
            updated_at: created_at,
        }
    }

    async fn service(
        videos: Vec<Video>,
    ) -> (tempfile::TempDir, Arc<MockVideoStore>, VideoDirectoryService) {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        let storage = Arc::new(StorageManager::new(Arc::new(provider)));
        let store = Arc::new(MockVideoStore::with_videos(videos));
        let service = VideoDirectoryService::new(store.clone(), storage);
        (dir, store, service)
    }

    #[tokio::test]
    async fn test_filtered_second_page() {
        let mut videos = Vec::new();
        for i in 0..45 {
            videos.push(video(&format!("City tour {i}"), VideoType::General, i));
        }
        for i in 0..10 {
            videos.push(video(&format!("Tour masterclass {i}"), VideoType::Masterclass, i));
            videos.push(video(&format!("Warmup {i}"), VideoType::General, i));
        }
        let (_dir, _store, service) = service(videos).await;

        let filter = VideoFilter::from_params(Some("general"), Some("tour"), false).unwrap();
        let page = service
            .list(&filter, PageRequest::new(2, 20).unwrap())
            .await
            .unwrap();

        assert_eq!(page.total_items, 45);
        assert_eq!(page.total_pages, 3);
        let titles: Vec<_> = page.items.iter().map(|v| v.title.clone()).collect();
        let expected: Vec<_> = (20..40).map(|i| format!("City tour {i}")).collect();
        assert_eq!(titles, expected);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let (_dir, _store, service) =
            service(vec![video("Intro", VideoType::General, 0)]).await;
        let page = service
            .list(&VideoFilter::default(), PageRequest::new(5, 20).unwrap())
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_deactivate_changes_only_flag() {
        let original = video("Intro", VideoType::General, 0);
        let (_dir, _store, service) = service(vec![original.clone()]).await;

        let updated = service
            .update(
                original.id,
                VideoChanges {
                    is_active: Some(false),
                    ..VideoChanges::default()
                },
            )
            .await
            .unwrap();

        assert!(!updated.is_active);
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.created_at, original.created_at);

        let admin = VideoFilter::from_params(None, None, true).unwrap();
        let listed = service.list(&admin, PageRequest::default()).await.unwrap();
        assert_eq!(listed.items.len(), 1);
        let public = service
            .list(&VideoFilter::default(), PageRequest::default())
            .await
            .unwrap();
        assert!(public.items.is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_blank_title() {
        let original = video("Intro", VideoType::General, 0);
        let (_dir, _store, service) = service(vec![original.clone()]).await;
        let err = service
            .update(
                original.id,
                VideoChanges {
                    title: Some("   ".to_string()),
                    ..VideoChanges::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_delete_then_not_found() {
        let original = video("Intro", VideoType::General, 0);
        let (dir, _store, service) = service(vec![original.clone()]).await;
        service
            .storage
            .provider()
            .write(&original.storage_path, Bytes::from_static(b"data"))
            .await
            .unwrap();

        service.delete(original.id).await.unwrap();
        assert!(!dir.path().join(&original.storage_path).exists());

        let listed = service
            .list(&VideoFilter::default(), PageRequest::default())
            .await
            .unwrap();
        assert!(listed.items.is_empty());
        assert!(service.delete(original.id).await.unwrap_err().is_not_found());
        assert!(
            service
                .update(original.id, VideoChanges::default())
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_delete_without_blob_still_succeeds() {
        let original = video("Intro", VideoType::General, 0);
        let (_dir, store, service) = service(vec![original.clone()]).await;
        service.delete(original.id).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let (_dir, store, service) = service(Vec::new()).await;
        store.set_unavailable(true);
        let err = service
            .list(&VideoFilter::default(), PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
    }
}
