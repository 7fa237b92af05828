//! Open-Meteo forecast payload

use super::json::{parse, JsonObject};
use crate::domain::entities::{CurrentConditions, WeatherResult};
use crate::domain::errors::DecodeError;

/// Decode a forecast response. Every field, including the nested
/// `current.*` block, is mandatory.
pub fn decode_weather(raw: &str) -> Result<WeatherResult, DecodeError> {
    let doc = parse(raw)?;
    let root = JsonObject::root(&doc)?;

    let latitude = root.f64("latitude")?;
    let longitude = root.f64("longitude")?;

    let current = root.object("current")?;
    let conditions = CurrentConditions {
        time: current.string("time")?,
        temperature: current.f64("temperature_2m")?,
        wind_speed: current.f64("wind_speed_10m")?,
        weather_code: current.i32("weather_code")?,
    };

    Ok(WeatherResult {
        latitude,
        longitude,
        current: Some(conditions),
    })
}
