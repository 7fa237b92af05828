//! Exchange Rate DTOs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

use outpost::ExchangeRateResult;

/// Query for `GET /exchange-rates`
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ExchangeRateQuery {
    /// ISO-4217 code, case-insensitive (default USD)
    #[param(example = "USD")]
    pub base_currency: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateResponse {
    pub base: String,
    pub date: String,
    /// Currency code -> units per one `base`
    pub rates: BTreeMap<String, f64>,
}

impl From<ExchangeRateResult> for ExchangeRateResponse {
    fn from(r: ExchangeRateResult) -> Self {
        Self {
            base: r.base,
            date: r.date,
            rates: r.rates,
        }
    }
}
