//! ExchangeRate - Currency rates relative to a base currency

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decoded exchange-rate provider response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateResult {
    pub base: String,
    pub date: String,
    /// Currency code -> rate; empty when the provider sent no rates
    pub rates: BTreeMap<String, f64>,
}
