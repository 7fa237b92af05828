//! CurrencyCode - Three-letter ISO 4217 style code

use crate::domain::errors::DomainError;

pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Upper-cased three-letter currency code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let code = raw.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::Validation(format!(
                "currency code must be three letters, got '{raw}'"
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(DEFAULT_BASE_CURRENCY.to_string())
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case() {
        assert_eq!(CurrencyCode::parse(" eur ").unwrap().as_str(), "EUR");
    }

    #[test]
    fn test_rejects_bad_codes() {
        for raw in ["", "US", "USDT", "U$D", "../"] {
            assert!(CurrencyCode::parse(raw).is_err(), "{raw} should be rejected");
        }
    }
}
