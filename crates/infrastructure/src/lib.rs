//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains configuration loading and the adapters bridging the
//! OpenWeatherMap client and the Ollama inference engine.

pub mod adapters;
pub mod config;

pub use adapters::{SummaryAdapter, WeatherAdapter};
pub use config::{AppConfig, InferenceAppConfig, ServerConfig, WeatherAppConfig};
