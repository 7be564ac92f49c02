//! Message and response types
//!
//! The completion service is polymorphic on two axes: content may come back
//! as a bare string or as a list of typed blocks, and an agent turn may be a
//! direct answer or a tool invocation. Each axis gets a tagged union and a
//! single resolution point (`ModelContent::flatten`,
//! `CompletionResponse::first_tool_call`) so calling code never inspects
//! shapes ad hoc.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// System message
    #[inline]
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// User message
    #[inline]
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Typed content block inside a block-list response
///
/// Only `text` blocks carry meaning for this pipeline; every other block
/// type is preserved but ignored when flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Text-bearing block
    Text {
        /// Block text
        text: String,
    },
    /// Any non-text block
    #[serde(other)]
    Other,
}

/// Model content: bare string or block list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelContent {
    /// Plain string content
    Text(String),
    /// Sequence of typed content blocks
    Blocks(Vec<ContentBlock>),
}

impl ModelContent {
    /// Concatenate all text-bearing content into one string.
    ///
    /// Total: always returns a string, possibly empty.
    #[must_use]
    pub fn flatten(&self) -> String {
        match self {
            ModelContent::Text(text) => text.clone(),
            ModelContent::Blocks(blocks) => blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.as_str()),
                    ContentBlock::Other => None,
                })
                .collect(),
        }
    }

    /// Empty text content
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        ModelContent::Text(String::new())
    }
}

impl Default for ModelContent {
    fn default() -> Self {
        Self::empty()
    }
}

/// Tool invocation requested by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name
    pub name: String,
    /// Model-supplied arguments
    pub arguments: Value,
}

/// A callable capability offered to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Tool name
    pub name: String,
    /// Tool description shown to the model
    pub description: String,
    /// JSON schema of the tool parameters
    pub parameters: Value,
}

impl ToolSpec {
    /// Create new tool spec
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// Completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
    /// Output length bound
    pub max_output_tokens: u32,
    /// Tools bound for this call (empty for plain-prompt mode)
    #[serde(default)]
    pub tools: Vec<ToolSpec>,
}

impl CompletionRequest {
    /// Single-user-message request (plain-prompt mode)
    #[inline]
    #[must_use]
    pub fn prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: 0.0,
            max_output_tokens: 4096,
            tools: Vec::new(),
        }
    }

    /// With temperature
    #[inline]
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// With output length bound
    #[inline]
    #[must_use]
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// With a bound tool (single-tool mode)
    #[inline]
    #[must_use]
    pub fn with_tool(mut self, tool: ToolSpec) -> Self {
        self.tools.push(tool);
        self
    }
}

/// Completion response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompletionResponse {
    /// Response content (either shape)
    pub content: ModelContent,
    /// Requested tool invocations, in model order
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
}

impl CompletionResponse {
    /// Plain-text response with no tool calls
    #[inline]
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: ModelContent::Text(content.into()),
            tool_calls: Vec::new(),
        }
    }

    /// The honored tool call, if the model invoked any.
    ///
    /// Only the first call counts even when the model requests several.
    #[inline]
    #[must_use]
    pub fn first_tool_call(&self) -> Option<&ToolCall> {
        self.tool_calls.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn flatten_plain_text() {
        let content = ModelContent::Text("hello".to_string());
        assert_eq!(content.flatten(), "hello");
    }

    #[test]
    fn flatten_keeps_only_text_blocks() {
        let content = ModelContent::Blocks(vec![
            ContentBlock::Text {
                text: "part one ".to_string(),
            },
            ContentBlock::Other,
            ContentBlock::Text {
                text: "part two".to_string(),
            },
        ]);
        assert_eq!(content.flatten(), "part one part two");
    }

    #[test]
    fn content_deserializes_either_shape() {
        let plain: ModelContent = serde_json::from_value(json!("just text")).unwrap();
        assert_eq!(plain.flatten(), "just text");

        let blocks: ModelContent = serde_json::from_value(json!([
            { "type": "text", "text": "a" },
            { "type": "image", "url": "ignored" },
            { "type": "text", "text": "b" }
        ]))
        .unwrap();
        assert_eq!(blocks.flatten(), "ab");
    }

    #[test]
    fn first_tool_call_honors_only_the_first() {
        let response = CompletionResponse {
            content: ModelContent::empty(),
            tool_calls: vec![
                ToolCall {
                    name: "first".to_string(),
                    arguments: json!({}),
                },
                ToolCall {
                    name: "second".to_string(),
                    arguments: json!({}),
                },
            ],
        };
        assert_eq!(response.first_tool_call().unwrap().name, "first");
    }

    #[test]
    fn request_builder() {
        let request = CompletionRequest::prompt("model-x", "hello")
            .with_temperature(0.3)
            .with_max_output_tokens(20_000)
            .with_tool(ToolSpec::new("create_chapter", "desc", json!({})));

        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.max_output_tokens, 20_000);
        assert_eq!(request.tools.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
    }
}
