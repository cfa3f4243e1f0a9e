//! Application state shared across handlers

use std::sync::Arc;

use application::DashboardService;
use infrastructure::AppConfig;

use crate::templates::TemplateEngine;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Dashboard orchestration service
    pub dashboard_service: Arc<DashboardService>,
    /// Compiled HTML templates
    pub templates: TemplateEngine,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
