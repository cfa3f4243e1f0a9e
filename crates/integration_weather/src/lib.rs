//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>):
//! current conditions (`/weather`) and the 5-day / 3-hour forecast
//! (`/forecast`), both keyed by city name.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, OwmConfig, WeatherClient, WeatherError};
pub use models::{CurrentResponse, CurrentWeather, ForecastResponse};
