//! HTTP Transport Port
//!
//! Abstract interface for sending one outbound request.
//! Implementations must tolerate concurrent use (pooled connections).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::HttpMethod;

/// Fully-formed outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

impl OutboundRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }
}

/// Response with its body fully read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundResponse {
    pub status: u16,
    pub body: String,
}

impl OutboundResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request failed below the HTTP status level
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportFailure {
    pub message: String,
    /// Set when a status line arrived before the failure (body read error)
    pub status: Option<u16>,
}

impl TransportFailure {
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }
}

/// Outbound HTTP interface
///
/// Performs exactly one network attempt per call: no retries, no caching.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &OutboundRequest) -> Result<OutboundResponse, TransportFailure>;
}
