//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `weather`: OpenWeatherMap provider settings
//! - `inference`: narrative generation settings

mod inference;
mod server;
mod weather;

use serde::Deserialize;

pub use inference::InferenceAppConfig;
pub use server::ServerConfig;
pub use weather::WeatherAppConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Precedence, lowest to highest: built-in defaults, a `config.toml`
    /// next to the binary, then `SKYCAST_*` environment variables with
    /// `__` separating nesting levels (e.g. `SKYCAST_SERVER__PORT`,
    /// `SKYCAST_WEATHER__API_KEY`).
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value fails to
    /// deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("inference.engine.base_url", "http://localhost:11434")?
            .set_default("inference.engine.default_model", "qwen2.5-1.5b-instruct")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                // Double underscore separates nesting levels so field
                // names containing underscores (api_key) stay addressable
                config::Environment::with_prefix("SKYCAST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
