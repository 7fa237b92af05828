//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sqlx::PgPool;

use outpost::{DomainError, Product, ProductDraft, ProductRepository};

const PRODUCT_COLUMNS: &str = "id, name, description, price, category, brand, \
     stock_quantity, sku, is_active, image_url, version, created_at, updated_at";

/// PostgreSQL implementation of ProductRepository
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn sku_taken(&self, sku: &str, except_id: Option<i64>) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE sku = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(sku)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: rust_decimal::Decimal,
    category: String,
    brand: Option<String>,
    stock_quantity: i32,
    sku: String,
    is_active: bool,
    image_url: Option<String>,
    version: i32,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            category: row.category,
            brand: row.brand,
            stock_quantity: row.stock_quantity,
            sku: row.sku,
            is_active: row.is_active,
            image_url: row.image_url,
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::Conflict("Product with this SKU already exists".to_string())
        }
        _ => DomainError::Repository(err.to_string()),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, DomainError> {
        if self.sku_taken(&draft.sku, None).await? {
            return Err(DomainError::Conflict(
                "Product with this SKU already exists".to_string(),
            ));
        }

        let sql = format!(
            r#"
            INSERT INTO products (name, description, price, category, brand, stock_quantity, sku, is_active, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price)
            .bind(&draft.category)
            .bind(&draft.brand)
            .bind(draft.stock_quantity)
            .bind(&draft.sku)
            .bind(draft.is_active)
            .bind(&draft.image_url)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: i64,
        draft: &ProductDraft,
        expected_version: i32,
    ) -> Result<Product, DomainError> {
        if !self.exists(id).await? {
            return Err(DomainError::not_found("Product", id));
        }
        if self.sku_taken(&draft.sku, Some(id)).await? {
            return Err(DomainError::Conflict(
                "Product with this SKU already exists".to_string(),
            ));
        }

        let sql = format!(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, category = $5, brand = $6,
                stock_quantity = $7, sku = $8, is_active = $9, image_url = $10,
                version = version + 1, updated_at = NOW()
            WHERE id = $1 AND version = $11
            RETURNING {PRODUCT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price)
            .bind(&draft.category)
            .bind(&draft.brand)
            .bind(draft.stock_quantity)
            .bind(&draft.sku)
            .bind(draft.is_active)
            .bind(&draft.image_url)
            .bind(expected_version)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => Ok(row.into()),
            // Either deleted meanwhile or somebody else bumped the version
            None if self.exists(id).await? => Err(DomainError::Conflict(format!(
                "Product {id} was modified concurrently (expected version {expected_version})"
            ))),
            None => Err(DomainError::not_found("Product", id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
