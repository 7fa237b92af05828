//! Service Ports
//!
//! Abstract interfaces for external services.

mod http_transport;

pub use http_transport::*;
