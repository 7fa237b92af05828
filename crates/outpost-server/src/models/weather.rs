//! Weather DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use outpost::{Coordinates, CurrentConditions, WeatherResult};

/// Query for `GET /weather`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherQuery {
    /// Latitude in degrees, -90..=90 (default 52.52)
    #[param(example = 52.52)]
    pub latitude: Option<f64>,
    /// Longitude in degrees, -180..=180 (default 13.41)
    #[param(example = 13.41)]
    pub longitude: Option<f64>,
}

impl WeatherQuery {
    pub fn coordinates(&self) -> Result<Coordinates, outpost::DomainError> {
        let defaults = Coordinates::default();
        Coordinates::new(
            self.latitude.unwrap_or(defaults.latitude()),
            self.longitude.unwrap_or(defaults.longitude()),
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub current: Option<CurrentWeatherResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeatherResponse {
    /// Local ISO-8601 time reported by the provider
    pub time: String,
    /// Air temperature at 2 m (°C)
    pub temperature: f64,
    /// Wind speed at 10 m (km/h)
    pub wind_speed: f64,
    /// WMO weather interpretation code
    pub weather_code: i32,
}

impl From<CurrentConditions> for CurrentWeatherResponse {
    fn from(c: CurrentConditions) -> Self {
        Self {
            time: c.time,
            temperature: c.temperature,
            wind_speed: c.wind_speed,
            weather_code: c.weather_code,
        }
    }
}

impl From<WeatherResult> for WeatherResponse {
    fn from(w: WeatherResult) -> Self {
        Self {
            latitude: w.latitude,
            longitude: w.longitude,
            current: w.current.map(Into::into),
        }
    }
}
