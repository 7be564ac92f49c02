//! HTTP completion client
//!
//! Talks to an OpenAI-compatible `/chat/completions` endpoint. The wire
//! shapes live here and nowhere else; callers only see [`CompletionRequest`]
//! and [`CompletionResponse`].

use crate::message::{ChatMessage, CompletionRequest, CompletionResponse, ModelContent, ToolCall, ToolSpec};
use crate::{CompletionError, CompletionService};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const RATE_LIMITED: u16 = 429;

/// Completion client configuration
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Endpoint base URL, e.g. `https://api.example.com/v1`
    pub base_url: String,
    /// Bearer token; optional for local endpoints
    pub api_key: Option<String>,
}

impl CompletionConfig {
    /// Create new configuration
    #[inline]
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// With API key
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// reqwest-backed completion service
#[derive(Debug, Clone)]
pub struct HttpCompletionService {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl HttpCompletionService {
    /// Create new HTTP completion service
    #[inline]
    #[must_use]
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionService for HttpCompletionService {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let wire = WireRequest::from(&request);

        let mut builder = self.client.post(self.endpoint()).json(&wire);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();

        if status == RATE_LIMITED {
            tracing::warn!(model = %request.model, "completion service rate limited");
            return Err(CompletionError::RateLimited);
        }
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, message });
        }

        let body: WireResponse = response.json().await?;
        body.into_response()
    }
}

// Wire shapes for the OpenAI-compatible chat API.

#[derive(Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
}

impl From<&CompletionRequest> for WireRequest {
    fn from(request: &CompletionRequest) -> Self {
        Self {
            model: request.model.clone(),
            messages: request.messages.clone(),
            temperature: request.temperature,
            max_tokens: request.max_output_tokens,
            tools: request.tools.iter().map(WireTool::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct WireTool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: WireFunction,
}

#[derive(Serialize)]
struct WireFunction {
    name: String,
    description: String,
    parameters: Value,
}

impl From<&ToolSpec> for WireTool {
    fn from(spec: &ToolSpec) -> Self {
        Self {
            kind: "function",
            function: WireFunction {
                name: spec.name.clone(),
                description: spec.description.clone(),
                parameters: spec.parameters.clone(),
            },
        }
    }
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    choices: Vec<WireChoice>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireMessage,
}

#[derive(Deserialize)]
struct WireMessage {
    #[serde(default)]
    content: Option<ModelContent>,
    #[serde(default)]
    tool_calls: Vec<WireToolCall>,
}

#[derive(Deserialize)]
struct WireToolCall {
    function: WireFunctionCall,
}

#[derive(Deserialize)]
struct WireFunctionCall {
    name: String,
    /// JSON-encoded argument object, per the wire contract
    arguments: String,
}

impl WireResponse {
    fn into_response(mut self) -> Result<CompletionResponse, CompletionError> {
        if self.choices.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }
        let message = self.choices.remove(0).message;

        let tool_calls = message
            .tool_calls
            .into_iter()
            .map(|call| ToolCall {
                name: call.function.name,
                // Some providers emit arguments that are not valid JSON;
                // surface them as a raw string rather than failing the turn.
                arguments: serde_json::from_str(&call.function.arguments)
                    .unwrap_or(Value::String(call.function.arguments)),
            })
            .collect();

        Ok(CompletionResponse {
            content: message.content.unwrap_or_default(),
            tool_calls,
        })
    }
}
