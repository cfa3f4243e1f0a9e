//! OpenWeatherMap payload models
//!
//! Raw serde shapes for the `/weather` and `/forecast` responses, plus
//! the parsed `CurrentWeather` handed to the adapter layer. Fields the
//! upstream sometimes omits are `Option`; their absence is a parse
//! error surfaced by the client, never a panic.

use chrono::{DateTime, Utc};
use domain::ForecastSample;
use serde::{Deserialize, Serialize};

use crate::client::WeatherError;

/// Parsed current conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Observation time (UTC)
    pub observed_at: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Weather category (e.g. "Rain")
    pub condition_main: String,
    /// Free-text description (e.g. "light rain")
    pub description: String,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Surface pressure in hPa
    pub pressure: u32,
    /// Wind speed in m/s
    pub wind_speed: f64,
}

/// Raw `/weather` response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    /// Observation time, Unix seconds UTC
    pub dt: i64,
    pub main: Option<MainData>,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
    pub wind: Option<WindData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainData {
    pub temp: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionData {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindData {
    pub speed: f64,
}

impl CurrentResponse {
    /// Parse into `CurrentWeather`, rejecting responses that are
    /// missing the `main`, `weather`, or `wind` objects.
    pub fn parse(self) -> Result<CurrentWeather, WeatherError> {
        let main = self
            .main
            .ok_or_else(|| WeatherError::ParseError("missing 'main' object".to_string()))?;
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::ParseError("missing 'weather' entry".to_string()))?;
        let wind = self
            .wind
            .ok_or_else(|| WeatherError::ParseError("missing 'wind' object".to_string()))?;
        let observed_at = DateTime::from_timestamp(self.dt, 0)
            .ok_or_else(|| WeatherError::ParseError(format!("invalid timestamp {}", self.dt)))?;

        Ok(CurrentWeather {
            observed_at,
            temperature: main.temp,
            condition_main: condition.main,
            description: condition.description,
            humidity: main.humidity,
            pressure: main.pressure,
            wind_speed: wind.speed,
        })
    }
}

/// Raw `/forecast` response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Option<Vec<ForecastEntry>>,
}

/// One 3-hourly entry of the forecast list
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: Option<EntryMain>,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryMain {
    pub temp: f64,
}

impl ForecastResponse {
    /// Convert the forecast list into domain samples, preserving feed
    /// order. A missing `list` or a malformed entry is a parse error.
    pub fn into_samples(self) -> Result<Vec<ForecastSample>, WeatherError> {
        let list = self
            .list
            .ok_or_else(|| WeatherError::ParseError("missing 'list' array".to_string()))?;
        list.into_iter().map(ForecastEntry::into_sample).collect()
    }
}

impl ForecastEntry {
    fn into_sample(self) -> Result<ForecastSample, WeatherError> {
        let main = self
            .main
            .ok_or_else(|| WeatherError::ParseError("forecast entry missing 'main'".to_string()))?;
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            WeatherError::ParseError("forecast entry missing 'weather'".to_string())
        })?;
        ForecastSample::from_unix(self.dt, main.temp, condition.main, condition.description)
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

/// Error body the upstream returns alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}
