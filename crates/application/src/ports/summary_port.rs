//! Narrative summary port
//!
//! The language-model call is modeled as an injected capability from
//! structured weather data to a description string, so the dashboard
//! orchestration and its tests stay deterministic and offline.

use async_trait::async_trait;
use domain::CityName;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;
use crate::ports::CurrentConditions;

/// Port for generating a human-readable weather narrative
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SummaryPort: Send + Sync {
    /// Phrase a short narrative for the given conditions
    async fn describe(
        &self,
        city: &CityName,
        current: &CurrentConditions,
    ) -> Result<String, ApplicationError>;

    /// Check if the summary backend is reachable
    async fn is_healthy(&self) -> bool;

    /// Name of the model backing this port
    fn model_name(&self) -> &str;
}
