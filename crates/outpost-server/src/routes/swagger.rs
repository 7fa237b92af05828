//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    CallAttemptResponse,
    CreateProductRequest,
    // External models
    CurrentWeatherResponse,
    ExchangeRateResponse,
    // Product models
    ProductResponse,
    UpdateProductRequest,
    WeatherResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // External provider endpoints
        super::external::get_weather,
        super::external::get_exchange_rates,
        // Audit log endpoints
        super::logs::list_logs,
        super::logs::get_log,
        // Product endpoints
        super::products::list_products,
        super::products::get_product,
        super::products::create_product,
        super::products::update_product,
        super::products::delete_product,
    ),
    components(schemas(
        WeatherResponse,
        CurrentWeatherResponse,
        ExchangeRateResponse,
        CallAttemptResponse,
        ProductResponse,
        CreateProductRequest,
        UpdateProductRequest,
        ErrorResponse,
    )),
    tags(
        (name = "External", description = "Audited calls to weather and exchange-rate providers"),
        (name = "Logs", description = "Outbound call audit trail"),
        (name = "Products", description = "Product catalog")
    ),
    info(
        title = "Outpost API",
        version = "0.1.0",
        description = "Outbound API gateway. Every provider call is timed and recorded in an append-only audit log.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
)]
pub struct ApiDoc;
