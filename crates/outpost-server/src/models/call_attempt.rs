//! Audit log DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use outpost::{CallAttempt, DEFAULT_RECENT_LIMIT};

/// Largest page `GET /logs` will return
pub const MAX_LOG_LIMIT: i64 = 1000;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogsQuery {
    /// Number of records, clamped to 1..=1000 (default 100)
    pub limit: Option<i64>,
}

impl LogsQuery {
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .clamp(1, MAX_LOG_LIMIT)
    }
}

/// One audited outbound call
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallAttemptResponse {
    pub id: i64,
    pub provider: String,
    pub request_url: String,
    pub request_method: String,
    pub request_body: Option<String>,
    pub response_body: Option<String>,
    /// Absent when the provider was never reached
    pub status_code: Option<i32>,
    pub requested_at: DateTime<Utc>,
    pub success: bool,
    pub error_message: Option<String>,
    pub elapsed_ms: i64,
}

impl From<CallAttempt> for CallAttemptResponse {
    fn from(a: CallAttempt) -> Self {
        Self {
            id: a.id,
            provider: a.provider,
            request_url: a.request_url,
            request_method: a.request_method,
            request_body: a.request_body,
            response_body: a.response_body,
            status_code: a.status_code,
            requested_at: a.requested_at,
            success: a.success,
            error_message: a.error_message,
            elapsed_ms: a.elapsed_ms,
        }
    }
}
