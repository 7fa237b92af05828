//! Audit log routes (read-only)

use axum::{extract::State, routing::get, Json, Router};

use crate::error::{ApiError, ErrorResponse};
use crate::extract::{ApiPath, ApiQuery};
use crate::models::{CallAttemptResponse, LogsQuery};
use crate::AppState;

/// Most recent outbound call attempts, newest first
#[utoipa::path(
    get,
    path = "/logs",
    params(LogsQuery),
    responses(
        (status = 200, description = "Recent call attempts", body = Vec<CallAttemptResponse>),
        (status = 400, description = "Malformed limit", body = ErrorResponse),
        (status = 500, description = "Audit store unavailable", body = ErrorResponse)
    ),
    tag = "Logs"
)]
pub async fn list_logs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LogsQuery>,
) -> Result<Json<Vec<CallAttemptResponse>>, ApiError> {
    let attempts = state
        .gateway
        .recent_attempts(query.effective_limit())
        .await?;

    Ok(Json(attempts.into_iter().map(Into::into).collect()))
}

/// One call attempt by ID
#[utoipa::path(
    get,
    path = "/logs/{id}",
    params(("id" = i64, Path, description = "Call attempt ID")),
    responses(
        (status = 200, description = "Call attempt", body = CallAttemptResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Unknown ID", body = ErrorResponse),
        (status = 500, description = "Audit store unavailable", body = ErrorResponse)
    ),
    tag = "Logs"
)]
pub async fn get_log(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CallAttemptResponse>, ApiError> {
    let attempt = state.gateway.attempt(id).await?;
    Ok(Json(attempt.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logs", get(list_logs))
        .route("/logs/:id", get(get_log))
}
