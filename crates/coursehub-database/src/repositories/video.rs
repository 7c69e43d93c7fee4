//! Video catalog repository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;
use coursehub_core::types::pagination::{PageRequest, PageResponse};
use coursehub_entity::video::{CreateVideo, Video, VideoFilter};

/// Persistence operations on the video catalog.
#[async_trait]
pub trait VideoStore: Send + Sync + 'static {
    /// Look up one video.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Video>>;

    /// One page of videos matching `filter`, newest first.
    async fn list(&self, filter: &VideoFilter, page: &PageRequest)
    -> AppResult<PageResponse<Video>>;

    /// Insert a new, active video.
    async fn create(&self, video: CreateVideo) -> AppResult<Video>;

    /// Persist the editable fields of `video`. `None` if it no longer exists.
    async fn update(&self, video: &Video) -> AppResult<Option<Video>>;

    /// Remove a video, returning the deleted record if there was one.
    async fn delete(&self, id: Uuid) -> AppResult<Option<Video>>;
}

/// PostgreSQL-backed [`VideoStore`].
#[derive(Debug, Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    /// Create a new video repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the WHERE clause for `filter` to `query`.
fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &VideoFilter) {
    query.push(" WHERE TRUE");
    if !filter.include_inactive {
        query.push(" AND is_active = TRUE");
    }
    if let Some(video_type) = filter.video_type {
        query.push(" AND video_type = ").push_bind(video_type);
    }
    if let Some(term) = &filter.search {
        let pattern = format!("%{}%", escape_like(term));
        query
            .push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR category ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

/// Postgres BIGINT value for a LIMIT or OFFSET, saturating at `i64::MAX`.
fn sql_bound(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Escape `%`, `_` and `\` so the term matches literally inside LIKE.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl VideoStore for VideoRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Video>> {
        sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find video", e))
    }

    async fn list(
        &self,
        filter: &VideoFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Video>> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM videos");
        push_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count videos", e))?;

        let total = total.max(0) as u64;
        if page.offset() >= total {
            return Ok(PageResponse::new(Vec::new(), page, total));
        }

        let mut select = QueryBuilder::<Postgres>::new("SELECT * FROM videos");
        push_filter(&mut select, filter);
        select
            .push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(sql_bound(page.limit()))
            .push(" OFFSET ")
            .push_bind(sql_bound(page.offset()));

        let videos = select
            .build_query_as::<Video>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list videos", e))?;

        Ok(PageResponse::new(videos, page, total))
    }

    async fn create(&self, video: CreateVideo) -> AppResult<Video> {
        sqlx::query_as::<_, Video>(
            "INSERT INTO videos (id, title, description, video_type, category, access_code, \
             file_name, storage_path, mime_type, size_bytes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(video.id)
        .bind(&video.fields.title)
        .bind(&video.fields.description)
        .bind(video.fields.video_type)
        .bind(&video.fields.category)
        .bind(&video.fields.access_code)
        .bind(&video.file_name)
        .bind(&video.storage_path)
        .bind(&video.mime_type)
        .bind(video.size_bytes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create video", e))
    }

    async fn update(&self, video: &Video) -> AppResult<Option<Video>> {
        sqlx::query_as::<_, Video>(
            "UPDATE videos SET title = $2, description = $3, category = $4, is_active = $5, \
             updated_at = $6 WHERE id = $1 RETURNING *",
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.category)
        .bind(video.is_active)
        .bind(video.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update video", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Video>> {
        sqlx::query_as::<_, Video>("DELETE FROM videos WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete video", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_entity::video::VideoType;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("intro"), "intro");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }

    #[test]
    fn test_sql_bound_saturates() {
        assert_eq!(sql_bound(20), 20);
        assert_eq!(sql_bound(i64::MAX as u64), i64::MAX);
        assert_eq!(sql_bound(u64::MAX), i64::MAX);

        let page = PageRequest::new(2, u64::MAX).unwrap();
        assert_eq!(sql_bound(page.limit()), i64::MAX);
        assert_eq!(sql_bound(page.offset()), i64::MAX);
    }

    #[test]
    fn test_filter_sql_for_public_listing() {
        let filter = VideoFilter::default();
        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM videos");
        push_filter(&mut query, &filter);
        assert_eq!(
            query.sql(),
            "SELECT * FROM videos WHERE TRUE AND is_active = TRUE"
        );
    }

    #[test]
    fn test_filter_sql_for_admin_search() {
        let filter = VideoFilter {
            video_type: Some(VideoType::Masterclass),
            search: Some("intro".to_string()),
            include_inactive: true,
        };
        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM videos");
        push_filter(&mut query, &filter);
        assert_eq!(
            query.sql(),
            "SELECT COUNT(*) FROM videos WHERE TRUE AND video_type = $1 \
             AND (title ILIKE $2 OR description ILIKE $3 OR category ILIKE $4)"
        );
    }
}
