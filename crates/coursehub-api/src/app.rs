//! Application builder: wires router, middleware and state into an Axum app.

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::error_detail::{expose_error_detail, panic_response};
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Outside production, 500 responses carry the failure detail in their
/// `error` field.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    let production = state.config.server.is_production();

    let mut app = build_router(state).layer(CatchPanicLayer::custom(panic_response));
    if !production {
        app = app.layer(axum_middleware::from_fn(expose_error_detail));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(request_logging))
}
