//! Server-rendered HTML pages

use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::{
    error::ApiError,
    handlers::dashboard::{CityQuery, resolve_city},
    state::AppState,
};

/// `GET /` - landing page with the city form
pub async fn landing(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = state
        .templates
        .render_landing(&state.config.weather.default_city)?;
    Ok(Html(html))
}

/// `GET /app` - the dashboard page.
///
/// Always renders: when upstream data is unavailable the page shows
/// placeholder values and the error banner.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Html<String>, ApiError> {
    let city = resolve_city(&state, &query)?;
    let dashboard = state.dashboard_service.build_dashboard(&city).await;
    let html = state.templates.render_dashboard(&dashboard)?;
    Ok(Html(html))
}
