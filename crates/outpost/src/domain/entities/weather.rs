//! Weather - Current conditions at a coordinate

use serde::{Deserialize, Serialize};

/// Decoded weather provider response
///
/// `current` is always populated by a successful decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub latitude: f64,
    pub longitude: f64,
    pub current: Option<CurrentConditions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub time: String,
    pub temperature: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
}
