//! Provider - Third-party API integrations

/// Upstream data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Weather,
    ExchangeRate,
}

impl Provider {
    /// Name recorded in the audit trail
    pub fn audit_name(&self) -> &'static str {
        match self {
            Provider::Weather => "Open-Meteo Weather API",
            Provider::ExchangeRate => "Exchange Rate API",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Weather => write!(f, "weather"),
            Provider::ExchangeRate => write!(f, "exchange_rate"),
        }
    }
}
