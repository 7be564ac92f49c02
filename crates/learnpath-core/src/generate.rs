//! Generation orchestrator
//!
//! Drives one curriculum generation: render the prompt, make exactly one
//! completion call, normalize, validate. No internal retries - retry policy
//! belongs to the caller, guided by [`PipelineError::retry_advice`].

use crate::contract;
use crate::error::PipelineError;
use crate::normalize::strip_code_fences;
use crate::validate::parse_generated_topics;
use learnpath_llm::{CompletionRequest, CompletionService};
use learnpath_model::{CurriculumRequest, GeneratedTopic};
use std::sync::Arc;

/// Generator configuration
///
/// Low-but-nonzero temperature favors determinism without full greedy
/// collapse; the output bound must fit a 10-topic curriculum.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output length bound
    pub max_output_tokens: u32,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With model identifier
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With sampling temperature
    #[inline]
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-pro".to_string(),
            temperature: 0.3,
            max_output_tokens: 20_000,
        }
    }
}

/// Curriculum generation orchestrator
pub struct CurriculumGenerator {
    completion: Arc<dyn CompletionService>,
    config: GeneratorConfig,
}

impl CurriculumGenerator {
    /// Create new generator
    #[inline]
    #[must_use]
    pub fn new(completion: Arc<dyn CompletionService>, config: GeneratorConfig) -> Self {
        Self { completion, config }
    }

    /// Generate a validated topics array for one request.
    ///
    /// Performs exactly one model call. On success the caller attaches the
    /// topics to a new curriculum and persists it; nothing is stored here.
    pub async fn generate(
        &self,
        request: &CurriculumRequest,
    ) -> Result<Vec<GeneratedTopic>, PipelineError> {
        tracing::info!(title = %request.title, subject = %request.subject, "generating curriculum");

        let prompt = contract::render_generation_prompt(request);
        let response = self
            .completion
            .complete(
                CompletionRequest::prompt(&self.config.model, prompt)
                    .with_temperature(self.config.temperature)
                    .with_max_output_tokens(self.config.max_output_tokens),
            )
            .await?;

        let normalized = strip_code_fences(&response.content.flatten());
        let topics = parse_generated_topics(&normalized)?;

        tracing::info!(count = topics.len(), "generated curriculum topics");
        Ok(topics)
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
