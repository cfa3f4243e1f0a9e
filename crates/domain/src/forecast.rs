//! Forecast aggregation core
//!
//! Reshapes the flat 3-hourly forecast feed into one record per
//! calendar day, two different ways:
//!
//! - [`select_daily_representatives`] picks a single canonical sample
//!   per day (the 12:00 UTC one) for the forecast-card list, capped at
//!   [`MAX_SUMMARY_DAYS`] days.
//! - [`compute_daily_trend`] aggregates every sample of a day into a
//!   high/low pair for the trend chart, uncapped.
//!
//! The asymmetry is deliberate: the displayed description for a day
//! comes from one canonical observation, while its high/low spans the
//! whole day. Both functions are pure and never fail on typed input.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::DomainError;
use crate::icons::icon_for;

/// Maximum number of days admitted into the representative summary list
pub const MAX_SUMMARY_DAYS: usize = 7;

/// UTC hour that marks a day's representative sample
pub const NOON_HOUR: u32 = 12;

/// One 3-hourly observation from the upstream forecast feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Observation time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Short weather category (e.g. "Rain", "Clear")
    pub condition_main: String,
    /// Free-text condition description
    pub condition_description: String,
}

impl ForecastSample {
    /// Build a sample from a Unix timestamp in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimestamp`] if the timestamp is
    /// outside the range chrono can represent.
    pub fn from_unix(
        unix_secs: i64,
        temperature: f64,
        condition_main: impl Into<String>,
        condition_description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let timestamp = DateTime::from_timestamp(unix_secs, 0)
            .ok_or(DomainError::InvalidTimestamp(unix_secs))?;
        Ok(Self {
            timestamp,
            temperature,
            condition_main: condition_main.into(),
            condition_description: condition_description.into(),
        })
    }

    fn day_label(&self) -> String {
        self.timestamp.format("%a, %b %d").to_string()
    }
}

/// The single representative observation chosen for a calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    /// Day label, e.g. "Tue, Jan 14"
    pub day_label: String,
    /// Rounded temperature of the representative sample, in Celsius
    pub temperature: i32,
    /// Weather category of the representative sample
    pub condition_main: String,
    /// Title-cased condition description
    pub condition_description: String,
    /// Icon file name for the category
    pub icon: &'static str,
}

impl DaySummary {
    fn from_sample(sample: &ForecastSample) -> Self {
        Self {
            day_label: sample.day_label(),
            temperature: round_temp(sample.temperature),
            condition_main: sample.condition_main.clone(),
            condition_description: title_case(&sample.condition_description),
            icon: icon_for(&sample.condition_main),
        }
    }
}

/// Aggregated high/low for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTrendPoint {
    /// Short day label, e.g. "Jan 14"
    pub label: String,
    /// Rounded maximum temperature over the day, in Celsius
    pub high: i32,
    /// Rounded minimum temperature over the day, in Celsius
    pub low: i32,
}

/// Parallel-vector form of the daily trend, as charting libraries want it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub highs: Vec<i32>,
    pub lows: Vec<i32>,
}

impl TrendSeries {
    /// Number of days in the series
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the series holds no days
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<Vec<DayTrendPoint>> for TrendSeries {
    fn from(points: Vec<DayTrendPoint>) -> Self {
        let mut series = Self::default();
        for point in points {
            series.labels.push(point.label);
            series.highs.push(point.high);
            series.lows.push(point.low);
        }
        series
    }
}

/// Pick the representative (12:00 UTC) sample for each calendar day.
///
/// Scans in feed order. A sample becomes its day's representative iff
/// its UTC hour is exactly [`NOON_HOUR`] and no representative exists
/// for that day label yet. Admission stops at [`MAX_SUMMARY_DAYS`]
/// days; later noon samples are ignored, not an error. A day without a
/// 12:00 sample is absent from the output entirely (the 3-hour feed
/// cadence normally guarantees one; there is no nearest-hour fallback).
pub fn select_daily_representatives(samples: &[ForecastSample]) -> Vec<DaySummary> {
    let mut summaries: Vec<DaySummary> = Vec::new();
    for sample in samples {
        if sample.timestamp.hour() != NOON_HOUR {
            continue;
        }
        if summaries.len() >= MAX_SUMMARY_DAYS {
            break;
        }
        let label = sample.day_label();
        if summaries.iter().any(|s| s.day_label == label) {
            continue;
        }
        summaries.push(DaySummary::from_sample(sample));
    }
    summaries
}

/// Aggregate every sample of each calendar day into a high/low point.
///
/// Days appear in first-occurrence order of their UTC calendar date,
/// even when the input is temporally non-monotonic. Unlike
/// [`select_daily_representatives`] there is no day cap, and the
/// high/low span the full set of the day's samples. The label comes
/// from the day's first sample.
pub fn compute_daily_trend(samples: &[ForecastSample]) -> Vec<DayTrendPoint> {
    struct DayGroup {
        label: String,
        high: f64,
        low: f64,
    }

    let mut order: Vec<NaiveDate> = Vec::new();
    let mut groups: HashMap<NaiveDate, DayGroup> = HashMap::new();

    for sample in samples {
        let date = sample.timestamp.date_naive();
        if let Some(group) = groups.get_mut(&date) {
            group.high = group.high.max(sample.temperature);
            group.low = group.low.min(sample.temperature);
        } else {
            order.push(date);
            groups.insert(
                date,
                DayGroup {
                    label: sample.timestamp.format("%b %d").to_string(),
                    high: sample.temperature,
                    low: sample.temperature,
                },
            );
        }
    }

    order
        .into_iter()
        .filter_map(|date| groups.remove(&date))
        .map(|group| DayTrendPoint {
            label: group.label,
            high: round_temp(group.high),
            low: round_temp(group.low),
        })
        .collect()
}

/// Round a Celsius temperature to the nearest integer.
///
/// Ties round half away from zero (`f64::round`).
#[allow(clippy::cast_possible_truncation)]
fn round_temp(temperature: f64) -> i32 {
    temperature.round() as i32
}

/// Capitalize the first letter of each whitespace-separated word
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
