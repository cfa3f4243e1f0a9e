//! JSON dashboard API handlers

use application::Dashboard;
use axum::{
    Json,
    extract::{Query, State},
};
use domain::CityName;
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

/// Query parameters accepted by the dashboard endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct CityQuery {
    /// City to show; falls back to the configured default
    pub city: Option<String>,
}

/// Resolve the requested city, falling back to the configured default
pub(crate) fn resolve_city(state: &AppState, query: &CityQuery) -> Result<CityName, ApiError> {
    let requested = query
        .city
        .as_deref()
        .unwrap_or(&state.config.weather.default_city);
    CityName::new(requested).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// `GET /v1/weather` - dashboard payload as JSON.
///
/// Upstream failures do not fail the request: the payload carries
/// placeholder fields and an `error` string instead.
pub async fn weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<Dashboard>, ApiError> {
    let city = resolve_city(&state, &query)?;
    let dashboard = state.dashboard_service.build_dashboard(&city).await;
    Ok(Json(dashboard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_query_deserializes_with_city() {
        let query: CityQuery = serde_json::from_str(r#"{"city":"Paris"}"#).unwrap();
        assert_eq!(query.city.as_deref(), Some("Paris"));
    }

    #[test]
    fn city_query_deserializes_without_city() {
        let query: CityQuery = serde_json::from_str("{}").unwrap();
        assert!(query.city.is_none());
    }
}
