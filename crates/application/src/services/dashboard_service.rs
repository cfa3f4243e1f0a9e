//! Dashboard orchestration
//!
//! Fetches current conditions and the 3-hourly forecast, runs the
//! domain aggregator, and asks the summary port to phrase a narrative.
//! The result always renders: upstream failures are recovered into a
//! placeholder panel with empty forecast/trend lists and a visible
//! error string, never a failed response.

use std::sync::Arc;

use domain::{
    CityName, DEFAULT_ICON, DaySummary, TrendSeries, compute_daily_trend,
    select_daily_representatives, title_case,
};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::ports::{CurrentConditions, SummaryPort, WeatherPort};

/// Marker shown in numeric fields when upstream data is unavailable
pub const PLACEHOLDER: &str = "-";

/// Display model for the current-conditions panel
#[derive(Debug, Clone, Serialize)]
pub struct CurrentPanel {
    /// Temperature display string, e.g. "9.6" or "-"
    pub temperature: String,
    /// Title-cased condition description, e.g. "Light Rain"
    pub description: String,
    /// Weather category, e.g. "Rain"
    pub condition: String,
    /// Icon file name
    pub icon: String,
    /// Relative humidity display string
    pub humidity: String,
    /// Surface pressure display string (hPa)
    pub pressure: String,
    /// Wind speed display string (m/s)
    pub wind_speed: String,
    /// Observation date, e.g. "Monday, January 15"
    pub date: String,
}

impl CurrentPanel {
    fn from_conditions(current: &CurrentConditions) -> Self {
        Self {
            temperature: format!("{:.1}", current.temperature),
            description: title_case(&current.description),
            condition: current.condition_main.clone(),
            icon: domain::icon_for(&current.condition_main).to_string(),
            humidity: current.humidity.to_string(),
            pressure: current.pressure.to_string(),
            wind_speed: format!("{:.1}", current.wind_speed),
            date: current.observed_at.format("%A, %B %d").to_string(),
        }
    }

    /// Panel shown when upstream data could not be fetched
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            temperature: PLACEHOLDER.to_string(),
            description: PLACEHOLDER.to_string(),
            condition: PLACEHOLDER.to_string(),
            icon: DEFAULT_ICON.to_string(),
            humidity: PLACEHOLDER.to_string(),
            pressure: PLACEHOLDER.to_string(),
            wind_speed: PLACEHOLDER.to_string(),
            date: PLACEHOLDER.to_string(),
        }
    }
}

/// Everything one dashboard render needs
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// City the dashboard was requested for
    pub city: String,
    /// Current-conditions panel
    pub current: CurrentPanel,
    /// Narrative description of the current weather
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    /// Per-day forecast cards (noon representatives, at most 7)
    pub forecast: Vec<DaySummary>,
    /// Per-day high/low series for the chart
    pub trend: TrendSeries,
    /// Human-readable error when upstream data was unavailable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Dashboard {
    fn unavailable(city: &CityName, error: String) -> Self {
        Self {
            city: city.to_string(),
            current: CurrentPanel::unavailable(),
            narrative: None,
            forecast: Vec::new(),
            trend: TrendSeries::default(),
            error: Some(error),
        }
    }
}

/// Builds dashboards from the weather and summary ports
pub struct DashboardService {
    weather: Arc<dyn WeatherPort>,
    summarizer: Option<Arc<dyn SummaryPort>>,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("summarizer", &self.summarizer.is_some())
            .finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Create a service without a narrative backend
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            weather,
            summarizer: None,
        }
    }

    /// Attach a narrative summary backend
    #[must_use]
    pub fn with_summarizer(mut self, summarizer: Arc<dyn SummaryPort>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Check whether the weather upstream is reachable
    pub async fn weather_available(&self) -> bool {
        self.weather.is_available().await
    }

    /// Report the narrative backend's health and model, if one is attached
    pub async fn summarizer_status(&self) -> Option<(bool, String)> {
        match &self.summarizer {
            Some(s) => Some((s.is_healthy().await, s.model_name().to_string())),
            None => None,
        }
    }

    /// Build the dashboard for a city.
    ///
    /// Never fails: every upstream error is folded into a placeholder
    /// dashboard carrying the error message.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn build_dashboard(&self, city: &CityName) -> Dashboard {
        let current = match self.weather.current_conditions(city).await {
            Ok(current) => current,
            Err(e) => {
                warn!(error = %e, "Current weather unavailable, rendering placeholder");
                return Dashboard::unavailable(city, e.to_string());
            },
        };

        let (forecast, trend, error) = match self.weather.forecast_samples(city).await {
            Ok(samples) => {
                debug!(samples = samples.len(), "Aggregating forecast feed");
                let forecast = select_daily_representatives(&samples);
                let trend = TrendSeries::from(compute_daily_trend(&samples));
                (forecast, trend, None)
            },
            Err(e) => {
                warn!(error = %e, "Forecast unavailable, rendering current conditions only");
                (Vec::<DaySummary>::new(), TrendSeries::default(), Some(e.to_string()))
            },
        };

        let narrative = self.narrative_for(city, &current).await;

        Dashboard {
            city: city.to_string(),
            current: CurrentPanel::from_conditions(&current),
            narrative: Some(narrative),
            forecast,
            trend,
            error,
        }
    }

    /// Ask the summary port for a narrative, falling back to the
    /// deterministic local summary when inference fails.
    async fn narrative_for(&self, city: &CityName, current: &CurrentConditions) -> String {
        let Some(summarizer) = &self.summarizer else {
            return current.summary();
        };
        match summarizer.describe(city, current).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Narrative generation failed, using local summary");
                current.summary()
            },
        }
    }
}
