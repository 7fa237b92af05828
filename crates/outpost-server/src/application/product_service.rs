//! Product Application Service (Use Case)
//!
//! Validates catalog input and delegates persistence to the repository.

use std::sync::Arc;

use outpost::{DomainError, Product, ProductDraft, ProductRepository};

/// Application service for Product operations
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Get all Products
    pub async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a Product by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Product, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    /// Create a new Product
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        draft.validate()?;
        let saved = self.repo.insert(&draft).await?;

        tracing::info!("Created Product: {} ({}) - {}", saved.name, saved.id, saved.sku);

        Ok(saved)
    }

    /// Replace a Product's fields, guarded by its version
    pub async fn update(
        &self,
        id: i64,
        draft: ProductDraft,
        expected_version: i32,
    ) -> Result<Product, DomainError> {
        draft.validate()?;
        let updated = self.repo.update(id, &draft, expected_version).await?;

        tracing::info!("Updated Product: {} (version {})", updated.id, updated.version);

        Ok(updated)
    }

    /// Delete a Product
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Product", id));
        }
        tracing::info!("Deleted Product: {}", id);
        Ok(())
    }
}
