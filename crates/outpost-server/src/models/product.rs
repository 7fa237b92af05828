//! Product catalog DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use outpost::{Product, ProductDraft};

fn default_active() -> bool {
    true
}

/// Create Product request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 1299.99)]
    pub price: Decimal,
    pub category: String,
    pub brand: Option<String>,
    #[serde(default)]
    pub stock_quantity: i32,
    pub sku: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub image_url: Option<String>,
}

/// Update Product request (full replacement)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// Must match the path id when present
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub brand: Option<String>,
    #[serde(default)]
    pub stock_quantity: i32,
    pub sku: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub image_url: Option<String>,
    /// Version the client last read
    pub version: i32,
}

impl From<CreateProductRequest> for ProductDraft {
    fn from(r: CreateProductRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            price: r.price,
            category: r.category,
            brand: r.brand,
            stock_quantity: r.stock_quantity,
            sku: r.sku,
            is_active: r.is_active,
            image_url: r.image_url,
        }
    }
}

impl UpdateProductRequest {
    /// Split into the draft and the expected version
    pub fn into_parts(self) -> (ProductDraft, i32) {
        let draft = ProductDraft {
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            brand: self.brand,
            stock_quantity: self.stock_quantity,
            sku: self.sku,
            is_active: self.is_active,
            image_url: self.image_url,
        };
        (draft, self.version)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub brand: Option<String>,
    pub stock_quantity: i32,
    pub sku: String,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            category: p.category,
            brand: p.brand,
            stock_quantity: p.stock_quantity,
            sku: p.sku,
            is_active: p.is_active,
            image_url: p.image_url,
            version: p.version,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
