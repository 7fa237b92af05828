//! API error boundary
//!
//! The only place where domain and gateway failures become HTTP status codes.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use outpost::{DomainError, GatewayError};

/// Longest slice of an upstream error body echoed back to the client (characters)
const MAX_UPSTREAM_DETAIL_CHARS: usize = 200;

/// Error payload returned by every endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable message
    pub message: String,
    /// Underlying cause, when there is one worth showing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                message: message.into(),
                error,
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, None)
    }

    /// Map a provider call failure; `context` names what was being fetched
    /// and is used when the upstream status is mirrored.
    pub fn gateway(context: &str, err: GatewayError) -> Self {
        match err {
            GatewayError::Upstream { status, body } => {
                let status = StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                Self::new(status, context, upstream_detail(&body))
            }
            GatewayError::Store(e) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Audit log could not be written",
                Some(e.to_string()),
            ),
            GatewayError::Configuration(_)
            | GatewayError::Transport(_)
            | GatewayError::Decode(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                Some(err.to_string()),
            ),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Trimmed, shortened upstream body; the full body stays in the audit log
fn upstream_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match body.char_indices().nth(MAX_UPSTREAM_DETAIL_CHARS) {
        Some((cut, _)) => Some(format!("{}...", &body[..cut])),
        None => Some(body.to_string()),
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => Self::new(
                StatusCode::NOT_FOUND,
                format!("{entity_type} with ID {id} not found"),
                None,
            ),
            DomainError::Validation(message) => Self::new(StatusCode::BAD_REQUEST, message, None),
            DomainError::Conflict(message) => Self::new(StatusCode::CONFLICT, message, None),
            DomainError::Repository(cause) => {
                tracing::error!("Repository failure: {}", cause);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Some(cause),
                )
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(
            rejection.status(),
            "Invalid query parameters",
            Some(rejection.body_text()),
        )
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(
            rejection.status(),
            "Invalid path parameter",
            Some(rejection.body_text()),
        )
    }
}

/// Keeps axum's status (400 syntax, 415 content type, 422 wrong shape)
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            rejection.status(),
            "Invalid request body",
            Some(rejection.body_text()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outpost::DecodeError;

    #[test]
    fn test_upstream_status_is_mirrored() {
        let err = ApiError::gateway(
            "Failed to fetch weather data",
            GatewayError::Upstream {
                status: 503,
                body: String::new(),
            },
        );
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.body.message, "Failed to fetch weather data");
        assert_eq!(err.body.error, None);
    }

    #[test]
    fn test_upstream_body_is_echoed_and_truncated() {
        let err = ApiError::gateway(
            "Failed to fetch exchange rates",
            GatewayError::Upstream {
                status: 404,
                body: " {\"error\":\"unsupported-code\"}\n".to_string(),
            },
        );
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.body.error.as_deref(),
            Some("{\"error\":\"unsupported-code\"}")
        );

        let long = "é".repeat(MAX_UPSTREAM_DETAIL_CHARS + 50);
        let err = ApiError::gateway(
            "Failed to fetch exchange rates",
            GatewayError::Upstream {
                status: 500,
                body: long,
            },
        );
        let detail = err.body.error.unwrap();
        assert!(detail.ends_with("..."));
        assert_eq!(detail.chars().count(), MAX_UPSTREAM_DETAIL_CHARS + 3);
    }

    #[test]
    fn test_non_error_upstream_status_becomes_bad_gateway() {
        let err = ApiError::gateway(
            "Failed to fetch exchange rates",
            GatewayError::Upstream {
                status: 304,
                body: String::new(),
            },
        );
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_decode_error_is_internal_with_detail() {
        let err = ApiError::gateway(
            "Failed to fetch weather data",
            GatewayError::Decode(DecodeError::missing("current.temperature_2m")),
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err
            .body
            .error
            .as_deref()
            .unwrap()
            .contains("current.temperature_2m"));
    }

    #[test]
    fn test_store_failure_says_audit_log() {
        let err = ApiError::gateway(
            "Failed to fetch weather data",
            GatewayError::Store(DomainError::Repository("pool closed".to_string())),
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.message, "Audit log could not be written");
    }

    #[test]
    fn test_domain_errors_map_to_statuses() {
        assert_eq!(
            ApiError::from(DomainError::not_found("Log", 9)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(DomainError::Validation("bad".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DomainError::Conflict("dup".into())).status(),
            StatusCode::CONFLICT
        );
    }
}
