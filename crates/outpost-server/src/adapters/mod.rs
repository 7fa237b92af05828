//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod http_transport;
#[cfg(test)]
pub mod memory;
pub mod postgres;

// Re-exports
pub use http_transport::ReqwestTransport;
pub use postgres::{PgCallAttemptRepository, PgProductRepository};
