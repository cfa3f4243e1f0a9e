//! Route definitions

use axum::{Router, routing::get};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(handlers::pages::landing))
        .route("/app", get(handlers::pages::dashboard_page))
        // Dashboard API (v1)
        .route("/v1/weather", get(handlers::dashboard::weather))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Icon assets
        .nest_service("/static", ServeDir::new("static"))
        // Attach state
        .with_state(state)
}

/// Build the CORS layer for the server configuration.
///
/// Returns `None` when `cors_enabled` is off, so no CORS headers are
/// emitted at all. With no configured origins every origin is allowed;
/// otherwise only the listed origins are.
pub fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    if !config.cors_enabled {
        return None;
    }

    let layer = if config.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    };

    Some(layer)
}
