//! Adapters implementing application ports

mod summary_adapter;
mod weather_adapter;

pub use summary_adapter::SummaryAdapter;
pub use weather_adapter::WeatherAdapter;
