//! Liveness handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{HealthResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/test
pub async fn test() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Server is working!".to_string(),
    })
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.storage.health_status().await.to_string(),
    })
}
