//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Status of a backing service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub weather: ServiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference: Option<ServiceStatus>,
}

/// Readiness check - can the server serve live dashboards?
///
/// Probes the weather upstream and, when a narrative backend is
/// configured, the inference engine. A missing narrative backend does
/// not make the server unready since the dashboard falls back to a
/// local summary.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let weather_healthy = state.dashboard_service.weather_available().await;
    let inference = state
        .dashboard_service
        .summarizer_status()
        .await
        .map(|(healthy, model)| ServiceStatus {
            healthy,
            model: healthy.then_some(model),
        });

    let ready = weather_healthy && inference.as_ref().is_none_or(|s| s.healthy);
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            weather: ServiceStatus {
                healthy: weather_healthy,
                model: None,
            },
            inference,
        }),
    )
}
