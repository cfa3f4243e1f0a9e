//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap API (`/weather` and `/forecast`
//! endpoints). City lookup is by name, temperatures are requested in
//! metric units.

use async_trait::async_trait;
use domain::ForecastSample;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiErrorBody, CurrentResponse, CurrentWeather, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The requested city is unknown to the weather service
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The configured API key was rejected
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OwmConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key
    pub api_key: SecretString,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Unit system passed to the API (default: metric)
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_units() -> String {
    "metric".to_string()
}

impl OwmConfig {
    /// Build a configuration with defaults for everything but the key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: SecretString::from(api_key.into()),
            timeout_secs: default_timeout(),
            units: default_units(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city
    async fn current(&self, city: &str) -> Result<CurrentWeather, WeatherError>;

    /// Get the 3-hourly forecast for a city, in feed order
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>, WeatherError>;

    /// Check if the weather service is reachable
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OwmConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OwmConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn get(&self, endpoint: &str, city: &str) -> Result<Response, WeatherError> {
        let url = format!("{}/{endpoint}", self.config.base_url);
        debug!(endpoint = %endpoint, "Fetching weather data");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.expose_secret()),
                ("units", self.config.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    WeatherError::ConnectionFailed(e.to_string())
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        Self::check_status(response, city).await
    }

    /// Map non-2xx statuses to typed errors, pulling the upstream's
    /// `message` field into the error text when present.
    async fn check_status(response: Response, city: &str) -> Result<Response, WeatherError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("HTTP {status}"));

        match status {
            StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound(format!(
                "{city}: {message}"
            ))),
            StatusCode::UNAUTHORIZED => Err(WeatherError::InvalidApiKey),
            StatusCode::TOO_MANY_REQUESTS => Err(WeatherError::RateLimitExceeded),
            s if s.is_server_error() => Err(WeatherError::ServiceUnavailable(message)),
            _ => Err(WeatherError::RequestFailed(message)),
        }
    }

    async fn decode<T>(response: Response) -> Result<T, WeatherError>
    where
        T: for<'de> Deserialize<'de>,
    {
        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(city = %city))]
    async fn current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let response = self.get("weather", city).await?;
        let raw: CurrentResponse = Self::decode(response).await?;
        raw.parse()
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>, WeatherError> {
        let response = self.get("forecast", city).await?;
        let raw: ForecastResponse = Self::decode(response).await?;
        raw.into_samples()
    }

    async fn is_healthy(&self) -> bool {
        // A 401 or 404 still proves the service is reachable
        match self.current("London").await {
            Ok(_) => true,
            Err(WeatherError::CityNotFound(_) | WeatherError::InvalidApiKey) => true,
            Err(_) => false,
        }
    }
}
