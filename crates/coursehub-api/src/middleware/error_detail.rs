//! Exposes 500 error details outside production.

use std::any::Any;

use axum::Json;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::{ApiErrorResponse, InternalErrorDetail, internal_error_response};

/// Rewrite the body of a 500 carrying [`InternalErrorDetail`] so that its
/// `error` field holds the detail instead of the generic text.
pub async fn expose_error_detail(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    match response.extensions_mut().remove::<InternalErrorDetail>() {
        Some(InternalErrorDetail(detail)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse::internal(detail)),
        )
            .into_response(),
        None => response,
    }
}

/// Turn a caught panic into the standard 500 response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "panic with a non-string payload".to_string()
    };
    tracing::error!(panic = %detail, "Request handler panicked");
    internal_error_response(detail)
}
