//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod call_attempt_repository;
mod product_repository;

pub use call_attempt_repository::*;
pub use product_repository::*;
