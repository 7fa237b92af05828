//! Domain Errors
//!
//! Error types for domain operations and outbound calls.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

/// A provider payload could not be turned into its typed result.
///
/// `path` is a dotted JSON path (`current.temperature_2m`), or `$` when the
/// document itself is not valid JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode `{path}`: {reason}")]
pub struct DecodeError {
    pub path: String,
    pub reason: String,
}

impl DecodeError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(path: impl Into<String>) -> Self {
        Self::new(path, "missing field")
    }

    pub fn wrong_type(path: impl Into<String>, expected: &str) -> Self {
        Self::new(path, format!("expected {expected}"))
    }
}

/// Errors surfaced by an outbound provider call
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Misconfiguration detected before any network attempt; never audited.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request never produced a usable response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("Upstream returned status {status}")]
    Upstream { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The call ran but its audit record could not be committed.
    #[error("Audit log could not be written: {0}")]
    Store(#[source] DomainError),
}
