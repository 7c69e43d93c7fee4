//! In-memory stores for tests and local development without PostgreSQL.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use coursehub_core::error::AppError;
use coursehub_core::result::AppResult;
use coursehub_core::types::pagination::{PageRequest, PageResponse};
use coursehub_entity::notification::{Notification, QuizResult};
use coursehub_entity::video::{CreateVideo, Video, VideoFilter};

use super::notification::NotificationCounter;
use super::video::VideoStore;

fn unavailable() -> AppError {
    AppError::database("Mock store is unavailable")
}

/// [`VideoStore`] over a vector.
#[derive(Debug, Default)]
pub struct MockVideoStore {
    videos: RwLock<Vec<Video>>,
    unavailable: AtomicBool,
}

impl MockVideoStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with `videos`.
    pub fn with_videos(videos: Vec<Video>) -> Self {
        Self {
            videos: RwLock::new(videos),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Insert a record as-is, bypassing validation.
    pub async fn insert(&self, video: Video) {
        self.videos.write().await.push(video);
    }

    /// Make every subsequent call fail with a database error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored videos.
    pub async fn len(&self) -> usize {
        self.videos.read().await.len()
    }

    /// Whether the store holds no videos.
    pub async fn is_empty(&self) -> bool {
        self.videos.read().await.is_empty()
    }

    fn check(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(())
    }
}

#[async_trait]
impl VideoStore for MockVideoStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Video>> {
        self.check()?;
        Ok(self.videos.read().await.iter().find(|v| v.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &VideoFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Video>> {
        self.check()?;
        let mut matching: Vec<Video> = self
            .videos
            .read()
            .await
            .iter()
            .filter(|v| filter.matches(v))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();
        Ok(PageResponse::new(items, page, total))
    }

    async fn create(&self, video: CreateVideo) -> AppResult<Video> {
        self.check()?;
        let video = video.into_video(Utc::now());
        self.videos.write().await.push(video.clone());
        Ok(video)
    }

    async fn update(&self, video: &Video) -> AppResult<Option<Video>> {
        self.check()?;
        let mut videos = self.videos.write().await;
        let Some(existing) = videos.iter_mut().find(|v| v.id == video.id) else {
            return Ok(None);
        };
        existing.title = video.title.clone();
        existing.description = video.description.clone();
        existing.category = video.category.clone();
        existing.is_active = video.is_active;
        existing.updated_at = video.updated_at;
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Video>> {
        self.check()?;
        let mut videos = self.videos.write().await;
        Ok(videos
            .iter()
            .position(|v| v.id == id)
            .map(|index| videos.remove(index)))
    }
}

/// [`NotificationCounter`] over in-memory notifications and quiz results.
#[derive(Debug, Default)]
pub struct MockNotificationCounter {
    notifications: RwLock<Vec<Notification>>,
    quiz_results: RwLock<Vec<QuizResult>>,
    unavailable: AtomicBool,
}

impl MockNotificationCounter {
    /// An empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification.
    pub async fn add_notification(&self, notification: Notification) {
        self.notifications.write().await.push(notification);
    }

    /// Record a quiz result.
    pub async fn add_quiz_result(&self, result: QuizResult) {
        self.quiz_results.write().await.push(result);
    }

    /// Make every subsequent call fail with a database error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl NotificationCounter for MockNotificationCounter {
    async fn count_unread_for(&self, user: &str) -> AppResult<u64> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        let notifications = self.notifications.read().await;
        Ok(notifications.iter().filter(|n| n.is_unread_for(user)).count() as u64)
    }

    async fn count_unreviewed_quiz_completions(&self) -> AppResult<u64> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        let results = self.quiz_results.read().await;
        Ok(results.iter().filter(|r| r.awaits_admin_review()).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use coursehub_entity::video::{VideoFields, VideoType};

    fn video(title: &str, minutes_ago: i64, active: bool) -> Video {
        let created_at = Utc::now() - Duration::minutes(minutes_ago);
        Video {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("{title} description"),
            video_type: VideoType::General,
            category: None,
            access_code: None,
            is_active: active,
            file_name: format!("{title}.mp4"),
            storage_path: format!("videos/{title}.mp4"),
            mime_type: Some("video/mp4".to_string()),
            size_bytes: 1024,
            duration: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_paged() {
        let store = MockVideoStore::with_videos(vec![
            video("old", 30, true),
            video("new", 1, true),
            video("middle", 10, true),
        ]);
        let page = store
            .list(&VideoFilter::default(), &PageRequest::new(1, 2).unwrap())
            .await
            .unwrap();
        let titles: Vec<_> = page.items.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "middle"]);
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_list_hides_inactive_unless_admin() {
        let store = MockVideoStore::with_videos(vec![video("a", 1, true), video("b", 2, false)]);
        let page = PageRequest::default();
        let public = store.list(&VideoFilter::default(), &page).await.unwrap();
        assert_eq!(public.total_items, 1);

        let admin = VideoFilter {
            include_inactive: true,
            ..VideoFilter::default()
        };
        assert_eq!(store.list(&admin, &page).await.unwrap().total_items, 2);
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let store = MockVideoStore::new();
        let created = store
            .create(CreateVideo {
                id: Uuid::new_v4(),
                fields: VideoFields {
                    title: "Intro".to_string(),
                    description: "Basics".to_string(),
                    ..VideoFields::default()
                },
                file_name: "intro.mp4".to_string(),
                storage_path: "videos/intro.mp4".to_string(),
                mime_type: None,
                size_bytes: 10,
            })
            .await
            .unwrap();
        assert!(created.is_active);

        let mut edited = created.clone();
        edited.title = "Intro v2".to_string();
        let updated = store.update(&edited).await.unwrap().unwrap();
        assert_eq!(updated.title, "Intro v2");

        assert!(store.delete(created.id).await.unwrap().is_some());
        assert!(store.delete(created.id).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_unavailable_store_errors() {
        let store = MockVideoStore::new();
        store.set_unavailable(true);
        let err = store.find_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(err.kind.is_infrastructure());

        let counter = MockNotificationCounter::new();
        counter.set_unavailable(true);
        assert!(counter.count_unread_for("default").await.is_err());
    }
}
