//! Domain layer for Skycast
//!
//! Contains the pure forecast-aggregation core, the icon table, and
//! domain value objects. This layer performs no I/O and has no async.

pub mod errors;
pub mod forecast;
pub mod icons;
pub mod value_objects;

pub use errors::DomainError;
pub use forecast::{
    DaySummary, DayTrendPoint, ForecastSample, MAX_SUMMARY_DAYS, NOON_HOUR, TrendSeries,
    compute_daily_trend, select_daily_representatives, title_case,
};
pub use icons::{DEFAULT_ICON, icon_for};
pub use value_objects::CityName;
