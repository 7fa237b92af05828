//! Product Repository Port
//!
//! Abstract interface for catalog persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Product, ProductDraft};

/// Repository interface for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a Product by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;

    /// All products ordered by ID
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Insert a new product. Fails with `Conflict` when the SKU is taken.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, DomainError>;

    /// Replace a product's fields if its stored version equals `expected_version`.
    ///
    /// Fails with `NotFound` for an unknown id and `Conflict` for a stale
    /// version or a SKU owned by another product.
    async fn update(
        &self,
        id: i64,
        draft: &ProductDraft,
        expected_version: i32,
    ) -> Result<Product, DomainError>;

    /// Delete a product by ID; `false` when it did not exist
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
