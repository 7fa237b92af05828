//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and outbound providers.

pub(crate) mod call_executor;
mod gateway_service;
mod product_service;

pub use call_executor::CallExecutor;
pub use gateway_service::GatewayService;
pub use product_service::ProductService;
