//! Inference (narrative) configuration.

use ai_core::InferenceConfig;
use serde::{Deserialize, Serialize};

/// Inference configuration as it appears in the application config
///
/// The narrative feature is optional; with `enabled = false` the
/// dashboard falls back to a locally composed summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceAppConfig {
    /// Whether to ask the inference engine for narratives
    #[serde(default)]
    pub enabled: bool,

    /// Engine settings (base URL, model, sampling)
    #[serde(default)]
    pub engine: InferenceConfig,
}

impl Default for InferenceAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            engine: InferenceConfig::default(),
        }
    }
}
