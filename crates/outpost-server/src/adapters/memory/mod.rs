//! In-Memory Repository Implementations
//!
//! Used by service and route tests in place of PostgreSQL.

mod call_attempt_repository;
mod product_repository;

pub use call_attempt_repository::MemoryCallAttemptRepository;
pub use product_repository::MemoryProductRepository;
