//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use coursehub_core::error::{AppError, ErrorKind};

/// Message of every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// `error` value of a 500 response when details are hidden.
pub const REDACTED_ERROR_DETAIL: &str = "Something went wrong";

/// Body of a failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Failure detail, present on 500 responses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiErrorResponse {
    /// A 4xx body.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    /// A 500 body with the given detail.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            error: Some(detail.into()),
        }
    }
}

/// Full description of a 500, attached to the response as an extension.
///
/// The body always carries [`REDACTED_ERROR_DETAIL`]; outside production the
/// `expose_error_detail` middleware swaps this text in.
#[derive(Debug, Clone)]
pub struct InternalErrorDetail(pub String);

/// Build the 500 response for `detail`.
pub fn internal_error_response(detail: String) -> Response {
    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse::internal(REDACTED_ERROR_DETAIL)),
    )
        .into_response();
    response.extensions_mut().insert(InternalErrorDetail(detail));
    response
}

/// Handler and extractor error: an [`AppError`] on its way to becoming an
/// HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Result type of the HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(err) = self;
        let status = match err.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::ExternalService => {
                tracing::error!(kind = %err.kind, error = %err, "Internal server error");
                return internal_error_response(err.to_string());
            }
        };

        (status, Json(ApiErrorResponse::message(err.message))).into_response()
    }
}
