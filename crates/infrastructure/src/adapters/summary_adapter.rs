//! Summary adapter - Implements SummaryPort using ai_core

use ai_core::{InferenceConfig, InferenceEngine, InferenceRequest, OllamaInferenceEngine};
use application::{
    error::ApplicationError,
    ports::{CurrentConditions, SummaryPort},
};
use async_trait::async_trait;
use domain::CityName;
use tracing::{debug, instrument};

/// Adapter generating weather narratives through an inference engine
pub struct SummaryAdapter {
    engine: OllamaInferenceEngine,
    model_name: String,
    system_prompt: Option<String>,
}

impl std::fmt::Debug for SummaryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryAdapter")
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl SummaryAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the inference engine fails to initialize.
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let model_name = config.default_model.clone();
        let system_prompt = config.system_prompt.clone();
        let engine = OllamaInferenceEngine::new(config)
            .map_err(|e| ApplicationError::Inference(e.to_string()))?;

        Ok(Self {
            engine,
            model_name,
            system_prompt,
        })
    }

    /// Build the narrative prompt for the current conditions
    fn prompt_for(city: &CityName, current: &CurrentConditions) -> String {
        format!(
            "The current weather in {} is {} with a temperature of {:.1}°C. \
             Explain this in a simple way for a general audience.",
            city, current.description, current.temperature
        )
    }

    /// Check whether an installed model satisfies the configured name.
    ///
    /// Ollama reports tagged names ("qwen2.5-1.5b-instruct:latest");
    /// an untagged configured name matches any tag of that model.
    fn model_matches(installed: &str, configured: &str) -> bool {
        installed == configured || installed.split(':').next() == Some(configured)
    }

    /// Convert ai_core error to application error
    fn map_error(e: ai_core::InferenceError) -> ApplicationError {
        match e {
            ai_core::InferenceError::RateLimited => ApplicationError::RateLimited,
            ai_core::InferenceError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Inference connection failed: {msg}"))
            },
            ai_core::InferenceError::Timeout => {
                ApplicationError::ExternalService("Inference timed out".to_string())
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl SummaryPort for SummaryAdapter {
    #[instrument(skip(self, current), fields(city = %city))]
    async fn describe(
        &self,
        city: &CityName,
        current: &CurrentConditions,
    ) -> Result<String, ApplicationError> {
        let prompt = Self::prompt_for(city, current);

        let request = match &self.system_prompt {
            Some(system) => InferenceRequest::with_system(system, prompt),
            None => InferenceRequest::simple(prompt),
        };

        let response = self
            .engine
            .generate(request)
            .await
            .map_err(Self::map_error)?;

        let narrative = response.content.trim().to_string();
        if narrative.is_empty() {
            return Err(ApplicationError::Inference(
                "Model returned an empty narrative".to_string(),
            ));
        }

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            "Narrative generated"
        );

        Ok(narrative)
    }

    async fn is_healthy(&self) -> bool {
        // A successful tags listing proves the server is reachable;
        // also require the configured model to be installed.
        match self.engine.list_models().await {
            Ok(models) => models
                .iter()
                .any(|m| Self::model_matches(m, &self.model_name)),
            Err(_) => false,
        }
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
