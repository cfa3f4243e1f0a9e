//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{CurrentConditions, WeatherPort};
use async_trait::async_trait;
use domain::{CityName, ForecastSample};
use integration_weather::{
    CurrentWeather as IntegrationCurrent, OpenWeatherClient, OwmConfig, WeatherClient,
    WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with the given provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: OwmConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::UpstreamMalformed(e),
            WeatherError::CityNotFound(e) => ApplicationError::NotFound(e),
            WeatherError::InvalidApiKey => {
                ApplicationError::Configuration("Weather API key was rejected".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert integration current weather to the application view
    fn map_current(current: IntegrationCurrent) -> CurrentConditions {
        CurrentConditions {
            temperature: current.temperature,
            condition_main: current.condition_main,
            description: current.description,
            humidity: current.humidity,
            pressure: current.pressure,
            wind_speed: current.wind_speed,
            observed_at: current.observed_at,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_conditions(
        &self,
        city: &CityName,
    ) -> Result<CurrentConditions, ApplicationError> {
        let result = self
            .client
            .current(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    condition = %current.condition_main,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map(Self::map_current)
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast_samples(
        &self,
        city: &CityName,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let result = self
            .client
            .forecast(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(samples) => {
                debug!(samples = samples.len(), "Retrieved forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
