//! Weather provider configuration.

use integration_weather::OwmConfig;
use secrecy::SecretString;
use serde::Deserialize;

/// OpenWeatherMap configuration as it appears in the application config
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (`SKYCAST_WEATHER__API_KEY`)
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Unit system passed to the API
    #[serde(default = "default_units")]
    pub units: String,

    /// City to show when a request does not name one
    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_api_key() -> SecretString {
    // An empty key keeps startup working; requests will surface an
    // auth error that the dashboard renders as placeholders.
    SecretString::from("")
}

const fn default_timeout() -> u64 {
    10
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_city() -> String {
    "London".to_string()
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            timeout_secs: default_timeout(),
            units: default_units(),
            default_city: default_city(),
        }
    }
}

impl WeatherAppConfig {
    /// Convert to the integration crate's client configuration
    #[must_use]
    pub fn to_owm_config(&self) -> OwmConfig {
        OwmConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout_secs,
            units: self.units.clone(),
        }
    }
}
