//! Port definitions for the application layer

mod summary_port;
mod weather_port;

pub use summary_port::SummaryPort;
pub use weather_port::{CurrentConditions, WeatherPort};

#[cfg(test)]
pub use summary_port::MockSummaryPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
