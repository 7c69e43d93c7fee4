//! Unmatched routes.

use axum::Json;
use axum::extract::OriginalUri;
use axum::http::StatusCode;
use serde_json::{Value, json};

/// Any unmatched path or method: 404 naming the requested URL.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "API endpoint not found",
            "requestedUrl": uri.to_string(),
        })),
    )
}
