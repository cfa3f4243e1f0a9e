//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{CityName, ForecastSample};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current weather conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Weather category (e.g. "Rain", "Clear")
    pub condition_main: String,
    /// Free-text condition description
    pub description: String,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Surface pressure in hPa
    pub pressure: u32,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// When this data was observed
    pub observed_at: DateTime<Utc>,
}

impl CurrentConditions {
    /// Deterministic one-line summary, used when no language model is
    /// available or the inference call fails.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Currently {} at {:.1}°C, humidity {}%, wind {:.1} m/s.",
            domain::title_case(&self.description),
            self.temperature,
            self.humidity,
            self.wind_speed
        )
    }
}

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather conditions for a city
    async fn current_conditions(
        &self,
        city: &CityName,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the raw 3-hourly forecast samples for a city (up to 5 days)
    async fn forecast_samples(
        &self,
        city: &CityName,
    ) -> Result<Vec<ForecastSample>, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}
