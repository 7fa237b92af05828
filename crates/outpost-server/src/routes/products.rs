//! Product catalog routes
//!
//! HTTP handlers that delegate to ProductService for business logic.

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::{ApiError, ErrorResponse};
use crate::extract::{ApiJson, ApiPath};
use crate::models::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::AppState;

/// List all Products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products ordered by ID", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state.product_service.list_all().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Get Product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.product_service.get_by_id(id).await?;
    Ok(Json(product.into()))
}

/// Create new Product
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "SKU already exists", body = ErrorResponse),
        (status = 422, description = "Body has the wrong shape", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = state.product_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Update Product
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Validation failed or ID mismatch", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 409, description = "Stale version or SKU already exists", body = ErrorResponse),
        (status = 422, description = "Body has the wrong shape", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::bad_request("Product ID mismatch"));
    }

    let (draft, version) = payload.into_parts();
    let product = state.product_service.update(id, draft, version).await?;
    Ok(Json(product.into()))
}

/// Delete Product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state.product_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}
