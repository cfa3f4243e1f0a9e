//! HTML template rendering
//!
//! Templates are embedded at compile time so the binary can be
//! deployed without a template directory next to it.

use std::sync::Arc;

use application::Dashboard;
use tera::{Context, Tera};
use thiserror::Error;

/// Landing page template
const LANDING_TEMPLATE: &str = include_str!("../templates/landing.html");

/// Dashboard page template
const DASHBOARD_TEMPLATE: &str = include_str!("../templates/dashboard.html");

/// Template rendering errors
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A template failed to compile
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// A template failed to render
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Context data could not be serialized
    #[error("Template context error: {0}")]
    Context(String),
}

/// Compiled template set shared across handlers
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Compile the embedded templates
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded template fails to parse.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_template("landing.html", LANDING_TEMPLATE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template("dashboard.html", DASHBOARD_TEMPLATE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.autoescape_on(vec![".html"]);
        Ok(Self { tera: Arc::new(tera) })
    }

    /// Render the landing page
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_landing(&self, default_city: &str) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("default_city", default_city);
        self.tera
            .render("landing.html", &context)
            .map_err(|e| TemplateError::Render(e.to_string()))
    }

    /// Render the dashboard page from a built dashboard
    ///
    /// # Errors
    ///
    /// Returns an error if the dashboard cannot be serialized into a
    /// template context or rendering fails.
    pub fn render_dashboard(&self, dashboard: &Dashboard) -> Result<String, TemplateError> {
        let context = Context::from_serialize(dashboard)
            .map_err(|e| TemplateError::Context(e.to_string()))?;
        self.tera
            .render("dashboard.html", &context)
            .map_err(|e| TemplateError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::{CurrentPanel, PLACEHOLDER};
    use domain::TrendSeries;

    fn placeholder_dashboard() -> Dashboard {
        Dashboard {
            city: "London".to_string(),
            current: CurrentPanel::unavailable(),
            narrative: None,
            forecast: Vec::new(),
            trend: TrendSeries::default(),
            error: Some("city not found".to_string()),
        }
    }

    #[test]
    fn templates_compile() {
        assert!(TemplateEngine::new().is_ok());
    }

    #[test]
    fn landing_renders_with_default_city() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_landing("London").unwrap();
        assert!(html.contains("London"));
        assert!(html.contains("/app"));
    }

    #[test]
    fn dashboard_renders_placeholders_and_error() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_dashboard(&placeholder_dashboard()).unwrap();
        assert!(html.contains("London"));
        assert!(html.contains(PLACEHOLDER));
        assert!(html.contains("city not found"));
    }

    #[test]
    fn dashboard_chart_arrays_are_json() {
        let engine = TemplateEngine::new().unwrap();
        let mut dashboard = placeholder_dashboard();
        dashboard.trend = TrendSeries {
            labels: vec!["Jan 15".to_string(), "Jan 16".to_string()],
            highs: vec![12, 9],
            lows: vec![6, 3],
        };
        dashboard.error = None;
        let html = engine.render_dashboard(&dashboard).unwrap();
        assert!(html.contains("[12,9]"));
        assert!(html.contains("[6,3]"));
        assert!(html.contains("Jan 15"));
    }
}
