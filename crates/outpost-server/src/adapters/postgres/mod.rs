//! PostgreSQL Repository Implementations

mod call_attempt_repository;
mod product_repository;

pub use call_attempt_repository::PgCallAttemptRepository;
pub use product_repository::PgProductRepository;
