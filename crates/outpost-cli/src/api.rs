//! Outpost API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;

/// API Client for Outpost
pub struct OutpostClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub current: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub time: String,
    pub temperature: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeRateResponse {
    pub base: String,
    pub date: String,
    pub rates: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallAttempt {
    pub id: i64,
    pub provider: String,
    pub request_url: String,
    pub request_method: String,
    pub response_body: Option<String>,
    pub status_code: Option<i32>,
    pub requested_at: String,
    pub success: bool,
    pub error_message: Option<String>,
    pub elapsed_ms: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub brand: Option<String>,
    pub stock_quantity: i32,
    pub sku: String,
    pub is_active: bool,
    pub version: i32,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    error: Option<String>,
}

impl OutpostClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Current weather via the gateway
    pub async fn weather(&self, latitude: Option<f64>, longitude: Option<f64>) -> Result<WeatherResponse> {
        let mut query = Vec::new();
        if let Some(lat) = latitude {
            query.push(("latitude", lat.to_string()));
        }
        if let Some(lon) = longitude {
            query.push(("longitude", lon.to_string()));
        }
        self.get_json("/weather", &query).await
    }

    /// Exchange rates via the gateway
    pub async fn exchange_rates(&self, base: Option<&str>) -> Result<ExchangeRateResponse> {
        let query: Vec<(&str, String)> = base
            .map(|b| vec![("baseCurrency", b.to_string())])
            .unwrap_or_default();
        self.get_json("/exchange-rates", &query).await
    }

    /// Recent audit records
    pub async fn list_logs(&self, limit: Option<i64>) -> Result<Vec<CallAttempt>> {
        let query: Vec<(&str, String)> = limit
            .map(|l| vec![("limit", l.to_string())])
            .unwrap_or_default();
        self.get_json("/logs", &query).await
    }

    /// One audit record
    pub async fn get_log(&self, id: i64) -> Result<CallAttempt> {
        self.get_json(&format!("/logs/{id}"), &[]).await
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.get_json("/products", &[]).await
    }

    pub async fn get_product(&self, id: i64) -> Result<Product> {
        self.get_json(&format!("/products/{id}"), &[]).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "GET");

        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .context("Failed to connect to Outpost API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, error_message(&body));
        }

        resp.json().await.context("Failed to parse response")
    }
}

/// Prefer the server's `message`/`error` fields over the raw body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message,
            error: Some(detail),
        }) => format!("{message} ({detail})"),
        Ok(ErrorBody { message, error: None }) => message,
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_exchange_rates_sends_base_currency() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/exchange-rates")
                .query_param("baseCurrency", "EUR");
            then.status(200)
                .body(r#"{"base":"EUR","date":"2024-01-15","rates":{"USD":1.09}}"#);
        });

        let rates = OutpostClient::new(&server.base_url())
            .exchange_rates(Some("EUR"))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(rates.rates.get("USD"), Some(&1.09));
    }

    #[tokio::test]
    async fn test_error_status_surfaces_server_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/logs/42");
            then.status(404)
                .body(r#"{"message":"Log with ID 42 not found"}"#);
        });

        let err = OutpostClient::new(&server.base_url())
            .get_log(42)
            .await
            .unwrap_err();

        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("Log with ID 42 not found"));
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("plain text"), "plain text");
        assert_eq!(
            error_message(r#"{"message":"Internal server error","error":"boom"}"#),
            "Internal server error (boom)"
        );
    }
}
