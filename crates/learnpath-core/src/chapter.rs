//! Chapter agent
//!
//! Single-tool orchestration for drafting lesson content. The model is
//! offered exactly one callable capability; a turn resolves in one of two
//! ways:
//! - the model answers directly, and its text is the chapter
//! - the model invokes the tool, which issues a second completion call with
//!   the structured chapter prompt, and that result is the chapter
//!
//! Only the first tool call is honored when the model requests several.

use crate::contract;
use crate::error::PipelineError;
use crate::generate::GeneratorConfig;
use learnpath_llm::{ChatMessage, CompletionRequest, CompletionService};
use serde_json::Value;
use std::sync::Arc;

/// Single-tool chapter drafting agent
pub struct ChapterAgent {
    completion: Arc<dyn CompletionService>,
    config: GeneratorConfig,
}

impl ChapterAgent {
    /// Create new chapter agent
    #[inline]
    #[must_use]
    pub fn new(completion: Arc<dyn CompletionService>, config: GeneratorConfig) -> Self {
        Self { completion, config }
    }

    /// Draft lesson content for one named, described subtopic.
    pub async fn draft_chapter(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, PipelineError> {
        tracing::info!(subtopic = %name, "drafting chapter");

        let first_turn = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(contract::render_chapter_agent_prompt(
                name,
                description,
            ))],
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
            tools: vec![contract::chapter_tool_spec()],
        };
        let response = self.completion.complete(first_turn).await?;

        let Some(call) = response.first_tool_call() else {
            tracing::debug!(subtopic = %name, "model answered directly, no tool call");
            return Ok(response.content.flatten());
        };

        // Malformed or missing tool arguments fall back to the values the
        // locator supplied; the tool still runs.
        let topic_name = call
            .arguments
            .get("topicName")
            .and_then(Value::as_str)
            .unwrap_or(name);
        let tool_description = call
            .arguments
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or(description);

        tracing::debug!(tool = %call.name, subtopic = %topic_name, "executing chapter tool");
        let tool_turn = CompletionRequest::prompt(
            &self.config.model,
            contract::render_chapter_prompt(topic_name, tool_description),
        )
        .with_temperature(self.config.temperature)
        .with_max_output_tokens(self.config.max_output_tokens);

        let tool_result = self.completion.complete(tool_turn).await?;
        Ok(tool_result.content.flatten())
    }
}
