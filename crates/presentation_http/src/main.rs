//! Skycast HTTP server
//!
//! Main entry point for the dashboard server.

use std::{sync::Arc, time::Duration};

use application::{DashboardService, SummaryPort, WeatherPort};
use infrastructure::{AppConfig, SummaryAdapter, WeatherAdapter};
use presentation_http::{TemplateEngine, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format is honored
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        AppConfig::default()
    });

    init_tracing(&config.server.log_format);

    info!("Skycast v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        default_city = %config.weather.default_city,
        narrative = config.inference.enabled,
        "Configuration loaded"
    );

    // Weather upstream adapter
    let weather_adapter = WeatherAdapter::new(config.weather.to_owm_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;
    let weather: Arc<dyn WeatherPort> = Arc::new(weather_adapter);

    // Dashboard service, with the narrative backend when enabled
    let mut dashboard_service = DashboardService::new(weather);
    if config.inference.enabled {
        let summary_adapter = SummaryAdapter::new(config.inference.engine.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?;
        info!(model = %summary_adapter.model_name(), "Narrative backend enabled");
        let summarizer: Arc<dyn SummaryPort> = Arc::new(summary_adapter);
        dashboard_service = dashboard_service.with_summarizer(summarizer);
    }

    let templates = TemplateEngine::new()
        .map_err(|e| anyhow::anyhow!("Failed to compile templates: {e}"))?;

    let state = AppState {
        dashboard_service: Arc::new(dashboard_service),
        templates,
        config: Arc::new(config.clone()),
    };

    // Build router
    let mut app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // CORS headers only when enabled
    if let Some(cors) = routes::cors_layer(&config.server) {
        app = app.layer(cors);
    }

    let app = app.layer(RequestBodyLimitLayer::new(
        config.server.max_body_size_json_bytes,
    ));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Dashboard: http://{}/app?city={}", addr, config.weather.default_city);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Initialize the tracing subscriber in text or JSON format
fn init_tracing(log_format: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "skycast_server=debug,presentation_http=debug,tower_http=debug".into());
    if log_format.eq_ignore_ascii_case("json") {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
