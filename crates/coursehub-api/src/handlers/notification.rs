//! Notification handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::dto::request::CountsQuery;
use crate::dto::response::CountsResponse;
use crate::state::AppState;

/// GET /api/notifications/counts?userId=...
///
/// Always 200: a failing store yields zeroed counters, and a query string
/// that does not parse counts for the default user.
pub async fn counts(
    State(state): State<AppState>,
    query: Result<Query<CountsQuery>, QueryRejection>,
) -> Json<CountsResponse> {
    let user_id = query.ok().and_then(|Query(query)| query.user_id);
    let report = state.notification_counts.report(user_id.as_deref()).await;
    Json(CountsResponse {
        success: true,
        counts: report.counts,
        user: report.user,
    })
}
