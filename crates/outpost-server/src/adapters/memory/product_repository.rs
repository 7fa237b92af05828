use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use outpost::{DomainError, Product, ProductDraft, ProductRepository};

#[derive(Default)]
struct Catalog {
    next_id: i64,
    products: BTreeMap<i64, Product>,
}

/// BTreeMap-backed catalog mirroring the SQL constraints
#[derive(Default)]
pub struct MemoryProductRepository {
    catalog: RwLock<Catalog>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sku_conflict() -> DomainError {
    DomainError::Conflict("Product with this SKU already exists".to_string())
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        Ok(self.catalog.read().await.products.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.catalog.read().await.products.values().cloned().collect())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, DomainError> {
        let mut catalog = self.catalog.write().await;
        if catalog.products.values().any(|p| p.sku == draft.sku) {
            return Err(sku_conflict());
        }

        catalog.next_id += 1;
        let product = Product {
            id: catalog.next_id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            category: draft.category.clone(),
            brand: draft.brand.clone(),
            stock_quantity: draft.stock_quantity,
            sku: draft.sku.clone(),
            is_active: draft.is_active,
            image_url: draft.image_url.clone(),
            version: 1,
            created_at: Utc::now(),
            updated_at: None,
        };
        catalog.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: i64,
        draft: &ProductDraft,
        expected_version: i32,
    ) -> Result<Product, DomainError> {
        let mut catalog = self.catalog.write().await;
        if catalog
            .products
            .values()
            .any(|p| p.sku == draft.sku && p.id != id)
        {
            return Err(sku_conflict());
        }

        let product = catalog
            .products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Product", id))?;
        if product.version != expected_version {
            return Err(DomainError::Conflict(format!(
                "Product {id} was modified concurrently (expected version {expected_version})"
            )));
        }

        product.name = draft.name.clone();
        product.description = draft.description.clone();
        product.price = draft.price;
        product.category = draft.category.clone();
        product.brand = draft.brand.clone();
        product.stock_quantity = draft.stock_quantity;
        product.sku = draft.sku.clone();
        product.is_active = draft.is_active;
        product.image_url = draft.image_url.clone();
        product.version += 1;
        product.updated_at = Some(Utc::now());
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.catalog.write().await.products.remove(&id).is_some())
    }
}
