//! Route definitions for the CourseHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Room for the text fields and part headers around the video file.
const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;

/// Build the routes with their state. Cross-cutting layers are added by
/// [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .storage
        .max_upload_size_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(notification_routes())
        .merge(video_routes())
        .merge(admin_routes())
        .method_not_allowed_fallback(handlers::fallback::not_found);

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::fallback::not_found)
        .layer(DefaultBodyLimit::max(
            usize::try_from(body_limit).unwrap_or(usize::MAX),
        ))
        .with_state(state)
}

/// Liveness probes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(handlers::health::test))
        .route("/health", get(handlers::health::health))
}

/// Navigation badge counters
fn notification_routes() -> Router<AppState> {
    Router::new().route(
        "/notifications/counts",
        get(handlers::notification::counts),
    )
}

/// Public catalog
fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(handlers::video::list_videos))
        .route("/videos/{id}", get(handlers::video::get_video))
}

/// Admin video management
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/upload-video", post(handlers::admin::upload_video))
        .route(
            "/admin/videos/{id}",
            put(handlers::admin::update_video).delete(handlers::admin::delete_video),
        )
}
