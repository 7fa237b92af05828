//! CallAttempt - Audit record of one outbound call
//!
//! Pure domain entity without infrastructure dependencies.
//! A `PendingCallAttempt` is built while the call runs; the audit store turns
//! it into an immutable `CallAttempt` by assigning its identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::value_objects::{HttpMethod, Provider};

/// Longest error message kept in the audit trail (characters)
pub const MAX_ERROR_MESSAGE_CHARS: usize = 1000;

/// CallAttempt - committed, read-only audit record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallAttempt {
    pub id: i64,
    pub provider: String,
    pub request_url: String,
    pub request_method: String,
    pub request_body: Option<String>,
    pub response_body: Option<String>,
    /// Absent when the remote peer was never reached
    pub status_code: Option<i32>,
    pub requested_at: DateTime<Utc>,
    pub success: bool,
    pub error_message: Option<String>,
    pub elapsed_ms: i64,
}

/// Attempt owned by the executor until it is appended to the store
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCallAttempt {
    pub provider: String,
    pub request_url: String,
    pub request_method: String,
    pub request_body: Option<String>,
    pub response_body: Option<String>,
    pub status_code: Option<i32>,
    pub requested_at: DateTime<Utc>,
    pub success: bool,
    pub error_message: Option<String>,
    pub elapsed_ms: i64,
}

impl PendingCallAttempt {
    /// Start a record for a call that is being dispatched now
    pub fn dispatched(
        provider: Provider,
        method: HttpMethod,
        url: impl Into<String>,
        request_body: Option<String>,
    ) -> Self {
        Self {
            provider: provider.audit_name().to_string(),
            request_url: url.into(),
            request_method: method.to_string(),
            request_body,
            response_body: None,
            status_code: None,
            requested_at: Utc::now(),
            success: false,
            error_message: None,
            elapsed_ms: 0,
        }
    }

    /// 2xx response that decoded cleanly
    pub fn succeeded(mut self, status: u16, response_body: String, elapsed: Duration) -> Self {
        self.success = true;
        self.status_code = Some(status as i32);
        self.response_body = Some(response_body);
        self.error_message = None;
        self.elapsed_ms = millis(elapsed);
        self
    }

    /// Non-2xx response; the body is kept verbatim
    pub fn upstream_failed(mut self, status: u16, response_body: String, elapsed: Duration) -> Self {
        self.success = false;
        self.status_code = Some(status as i32);
        self.response_body = Some(response_body);
        self.error_message = Some(bounded(format!("API returned status code: {status}")));
        self.elapsed_ms = millis(elapsed);
        self
    }

    /// 2xx response whose payload did not match the expected shape
    pub fn decode_failed(
        mut self,
        status: u16,
        response_body: String,
        error: impl std::fmt::Display,
        elapsed: Duration,
    ) -> Self {
        self.success = false;
        self.status_code = Some(status as i32);
        self.response_body = Some(response_body);
        self.error_message = Some(bounded(error.to_string()));
        self.elapsed_ms = millis(elapsed);
        self
    }

    /// Network-level failure. `status` is set only when the peer answered
    /// but the body could not be read.
    pub fn transport_failed(
        mut self,
        status: Option<u16>,
        error: impl std::fmt::Display,
        elapsed: Duration,
    ) -> Self {
        self.success = false;
        self.status_code = status.map(i32::from);
        self.response_body = None;
        self.error_message = Some(bounded(non_empty(error.to_string(), "transport error")));
        self.elapsed_ms = millis(elapsed);
        self
    }
}

impl CallAttempt {
    /// Freeze a pending attempt under the identity assigned by the store
    pub fn from_pending(id: i64, pending: PendingCallAttempt) -> Self {
        Self {
            id,
            provider: pending.provider,
            request_url: pending.request_url,
            request_method: pending.request_method,
            request_body: pending.request_body,
            response_body: pending.response_body,
            status_code: pending.status_code,
            requested_at: pending.requested_at,
            success: pending.success,
            error_message: pending.error_message,
            elapsed_ms: pending.elapsed_ms,
        }
    }

    /// success implies status + body; failure implies an error message
    pub fn is_well_formed(&self) -> bool {
        let outcome_ok = if self.success {
            self.status_code.is_some() && self.response_body.is_some()
        } else {
            self.error_message.as_deref().is_some_and(|m| !m.is_empty())
        };
        outcome_ok && self.elapsed_ms >= 0
    }
}

fn millis(elapsed: Duration) -> i64 {
    i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

fn bounded(message: String) -> String {
    if message.chars().count() <= MAX_ERROR_MESSAGE_CHARS {
        return message;
    }
    message.chars().take(MAX_ERROR_MESSAGE_CHARS).collect()
}
