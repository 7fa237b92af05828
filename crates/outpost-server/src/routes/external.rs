//! External provider routes
//!
//! Each request makes exactly one audited outbound call.

use axum::{extract::State, routing::get, Json, Router};

use outpost::CurrencyCode;

use crate::error::{ApiError, ErrorResponse};
use crate::extract::ApiQuery;
use crate::models::{ExchangeRateQuery, ExchangeRateResponse, WeatherQuery, WeatherResponse};
use crate::AppState;

/// Current weather for a coordinate pair
#[utoipa::path(
    get,
    path = "/weather",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Current conditions", body = WeatherResponse),
        (status = 400, description = "Coordinates missing, malformed or out of range", body = ErrorResponse),
        (status = 500, description = "Provider unreachable, undecodable or audit failure", body = ErrorResponse)
    ),
    tag = "External"
)]
pub async fn get_weather(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<WeatherQuery>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let coordinates = query.coordinates()?;

    let weather = state
        .gateway
        .current_weather(coordinates)
        .await
        .map_err(|e| ApiError::gateway("Failed to fetch weather data", e))?;

    Ok(Json(weather.into()))
}

/// Latest exchange rates for a base currency
#[utoipa::path(
    get,
    path = "/exchange-rates",
    params(ExchangeRateQuery),
    responses(
        (status = 200, description = "Rates keyed by currency code", body = ExchangeRateResponse),
        (status = 400, description = "Malformed currency code", body = ErrorResponse),
        (status = 500, description = "Provider unreachable, undecodable or audit failure", body = ErrorResponse)
    ),
    tag = "External"
)]
pub async fn get_exchange_rates(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ExchangeRateQuery>,
) -> Result<Json<ExchangeRateResponse>, ApiError> {
    let base = match query.base_currency.as_deref() {
        Some(raw) => CurrencyCode::parse(raw)?,
        None => CurrencyCode::default(),
    };

    let rates = state
        .gateway
        .exchange_rates(&base)
        .await
        .map_err(|e| ApiError::gateway("Failed to fetch exchange rates", e))?;

    Ok(Json(rates.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/exchange-rates", get(get_exchange_rates))
}
