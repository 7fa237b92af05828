//! Exchange-rate payload

use std::collections::BTreeMap;

use super::json::{parse, JsonObject};
use crate::domain::entities::ExchangeRateResult;
use crate::domain::errors::DecodeError;

/// Decode a latest-rates response. Property names match case-insensitively;
/// an absent or null `rates` map decodes as empty.
pub fn decode_exchange_rates(raw: &str) -> Result<ExchangeRateResult, DecodeError> {
    let doc = parse(raw)?;
    let root = JsonObject::root(&doc)?.ignore_case();

    let base = root.string("base")?;
    let date = root.string("date")?;

    let mut rates = BTreeMap::new();
    if let Some(value) = root.optional("rates") {
        let path = root.path_of("rates");
        let map = value
            .as_object()
            .ok_or_else(|| DecodeError::wrong_type(path.clone(), "object"))?;
        for (code, rate) in map {
            let rate = rate
                .as_f64()
                .ok_or_else(|| DecodeError::wrong_type(format!("{path}.{code}"), "number"))?;
            rates.insert(code.clone(), rate);
        }
    }

    Ok(ExchangeRateResult { base, date, rates })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_sample_payload() {
        let raw = r#"{"base":"USD","date":"2024-01-01","rates":{"EUR":0.91}}"#;
        let result = decode_exchange_rates(raw).unwrap();

        assert_eq!(result.base, "USD");
        assert_eq!(result.date, "2024-01-01");
        assert_eq!(result.rates["EUR"], 0.91);
    }

    #[test]
    fn test_missing_rates_is_empty() {
        let result = decode_exchange_rates(r#"{"base":"USD","date":"2024-01-01"}"#).unwrap();
        assert!(result.rates.is_empty());
    }

    #[test]
    fn test_null_rates_is_empty() {
        let result =
            decode_exchange_rates(r#"{"base":"USD","date":"2024-01-01","rates":null}"#).unwrap();
        assert!(result.rates.is_empty());
    }

    #[test]
    fn test_property_names_ignore_case() {
        let raw = r#"{"BASE":"EUR","Date":"2024-02-02","Rates":{"USD":1.09,"GBP":0.85},"time_last_updated":1}"#;
        let result = decode_exchange_rates(raw).unwrap();

        assert_eq!(result.base, "EUR");
        assert_eq!(result.date, "2024-02-02");
        assert_eq!(result.rates.len(), 2);
    }

    #[test]
    fn test_missing_base_fails() {
        let err = decode_exchange_rates(r#"{"date":"2024-01-01","rates":{}}"#).unwrap_err();
        assert_eq!(err.path, "base");
    }

    #[test]
    fn test_non_numeric_rate_names_the_currency() {
        let raw = r#"{"base":"USD","date":"2024-01-01","rates":{"EUR":"0.91"}}"#;
        let err = decode_exchange_rates(raw).unwrap_err();
        assert_eq!(err.path, "rates.EUR");
    }

    #[test]
    fn test_rates_must_be_an_object() {
        let raw = r#"{"base":"USD","date":"2024-01-01","rates":[1,2]}"#;
        let err = decode_exchange_rates(raw).unwrap_err();
        assert_eq!(err.path, "rates");
    }
}
