//! Gateway Application Service (Use Case)
//!
//! Builds provider URLs from configuration, runs them through the
//! `CallExecutor`, and exposes the audit trail for reading.

use reqwest::Url;
use std::sync::Arc;

use outpost::domain::decoders::{decode_exchange_rates, decode_weather};
use outpost::{
    CallAttempt, CallAttemptRepository, Coordinates, CurrencyCode, DomainError,
    ExchangeRateResult, GatewayError, OutboundRequest, Provider, WeatherResult,
};

use super::CallExecutor;
use crate::config::GatewayConfig;

/// Variables requested from the forecast endpoint
const CURRENT_WEATHER_FIELDS: &str = "temperature_2m,wind_speed_10m,weather_code";

/// Application service for outbound provider calls and their audit trail
pub struct GatewayService {
    executor: CallExecutor,
    audit: Arc<dyn CallAttemptRepository>,
    weather_api_url: Url,
    exchange_rate_api_url: Url,
}

impl GatewayService {
    pub fn new(
        config: &GatewayConfig,
        executor: CallExecutor,
        audit: Arc<dyn CallAttemptRepository>,
    ) -> Self {
        Self {
            executor,
            audit,
            weather_api_url: config.weather_api_url.clone(),
            exchange_rate_api_url: config.exchange_rate_api_url.clone(),
        }
    }

    /// Current conditions at `coordinates`
    pub async fn current_weather(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherResult, GatewayError> {
        let url = self.weather_url(coordinates);
        self.executor
            .execute(Provider::Weather, OutboundRequest::get(url), decode_weather)
            .await
    }

    /// Latest rates against `base`
    pub async fn exchange_rates(
        &self,
        base: &CurrencyCode,
    ) -> Result<ExchangeRateResult, GatewayError> {
        let url = self.exchange_rate_url(base)?;
        self.executor
            .execute(
                Provider::ExchangeRate,
                OutboundRequest::get(url),
                decode_exchange_rates,
            )
            .await
    }

    /// Most recent attempts, newest first
    pub async fn recent_attempts(&self, limit: i64) -> Result<Vec<CallAttempt>, DomainError> {
        self.audit.list_recent(limit).await
    }

    /// One attempt by id
    pub async fn attempt(&self, id: i64) -> Result<CallAttempt, DomainError> {
        self.audit
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Log", id))
    }

    fn weather_url(&self, coordinates: Coordinates) -> String {
        let mut url = self.weather_api_url.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &coordinates.latitude().to_string())
            .append_pair("longitude", &coordinates.longitude().to_string())
            .append_pair("current", CURRENT_WEATHER_FIELDS);
        url.to_string()
    }

    fn exchange_rate_url(&self, base: &CurrencyCode) -> Result<String, GatewayError> {
        let mut url = self.exchange_rate_api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::Configuration(format!(
                    "exchange rate URL cannot take a path: {}",
                    self.exchange_rate_api_url
                ))
            })?
            .pop_if_empty()
            .push(base.as_str());
        Ok(url.to_string())
    }
}
