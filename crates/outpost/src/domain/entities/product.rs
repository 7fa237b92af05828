//! Product - Catalog entry
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Prices carry at most this many fractional digits (NUMERIC(18,2) in storage)
pub const PRICE_SCALE: u32 = 2;
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, PRICE_SCALE);
pub const MAX_PRICE: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, PRICE_SCALE);

/// Product - persisted catalog entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub brand: Option<String>,
    pub stock_quantity: i32,
    /// Unique across the catalog
    pub sku: String,
    pub is_active: bool,
    pub image_url: Option<String>,
    /// Optimistic-concurrency counter, bumped on every update
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Caller-supplied product fields (create and full update)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub brand: Option<String>,
    pub stock_quantity: i32,
    pub sku: String,
    pub is_active: bool,
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Check field presence, lengths and ranges
    pub fn validate(&self) -> Result<(), DomainError> {
        required("name", &self.name, 100)?;
        optional("description", self.description.as_deref(), 500)?;
        required("category", &self.category, 50)?;
        optional("brand", self.brand.as_deref(), 50)?;
        required("sku", &self.sku, 50)?;
        optional("image_url", self.image_url.as_deref(), 500)?;

        if self.price < MIN_PRICE || self.price > MAX_PRICE {
            return Err(DomainError::Validation(format!(
                "price must be between {MIN_PRICE} and {MAX_PRICE}"
            )));
        }
        if self.price.normalize().scale() > PRICE_SCALE {
            return Err(DomainError::Validation(format!(
                "price cannot have more than {PRICE_SCALE} decimal places"
            )));
        }

        if self.stock_quantity < 0 {
            return Err(DomainError::Validation(
                "stock_quantity must not be negative".to_string(),
            ));
        }

        if let Some(url) = self.image_url.as_deref() {
            if !is_http_url(url) {
                return Err(DomainError::Validation(
                    "image_url must be an absolute http(s) URL".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn required(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    optional(field, Some(value), max)
}

fn optional(field: &str, value: Option<&str>, max: usize) -> Result<(), DomainError> {
    match value {
        Some(v) if v.chars().count() > max => Err(DomainError::Validation(format!(
            "{field} cannot exceed {max} characters"
        ))),
        _ => Ok(()),
    }
}

fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            !host.is_empty() && !host.contains(char::is_whitespace)
        }
        None => false,
    }
}
