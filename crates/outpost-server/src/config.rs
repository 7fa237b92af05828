//! Gateway Configuration
//!
//! Read once at startup from the secret store. Invalid or missing values
//! stop the server before it accepts requests.

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

pub const WEATHER_API_URL: &str = "WEATHER_API_URL";
pub const EXCHANGE_RATE_API_URL: &str = "EXCHANGE_RATE_API_URL";
pub const OUTBOUND_TIMEOUT_SECS: &str = "OUTBOUND_TIMEOUT_SECS";
pub const OUTBOUND_USER_AGENT: &str = "OUTBOUND_USER_AGENT";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is not a valid http(s) URL: {reason}")]
    InvalidUrl { key: &'static str, reason: String },

    #[error("{0} must be a positive integer")]
    InvalidNumber(&'static str),
}

/// Provider endpoints and outbound client settings
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub weather_api_url: Url,
    pub exchange_rate_api_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl GatewayConfig {
    /// Build from a key lookup (Shuttle secrets in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let weather_api_url = required_url(&lookup, WEATHER_API_URL)?;
        let exchange_rate_api_url = required_url(&lookup, EXCHANGE_RATE_API_URL)?;

        let timeout_secs = match non_blank(&lookup, OUTBOUND_TIMEOUT_SECS) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidNumber(OUTBOUND_TIMEOUT_SECS))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let user_agent = non_blank(&lookup, OUTBOUND_USER_AGENT)
            .unwrap_or_else(|| format!("Outpost-Gateway/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            weather_api_url,
            exchange_rate_api_url,
            timeout: Duration::from_secs(timeout_secs),
            user_agent,
        })
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required_url<F>(lookup: &F, key: &'static str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = non_blank(lookup, key).ok_or(ConfigError::Missing(key))?;
    let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
        key,
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            key,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}
