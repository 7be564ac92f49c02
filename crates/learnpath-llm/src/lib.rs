//! Learnpath completion-service abstraction
//!
//! The generative text model is an opaque request/response collaborator.
//! This crate defines the trait the pipeline calls, the message/content
//! types on both sides of that call, and a reqwest-backed implementation
//! for OpenAI-compatible endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use learnpath_llm::{CompletionConfig, CompletionRequest, CompletionService, HttpCompletionService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = HttpCompletionService::new(
//!     CompletionConfig::new("https://api.example.com/v1").with_api_key("secret"),
//! );
//! let response = service
//!     .complete(CompletionRequest::prompt("gpt-4o-mini", "Say hello"))
//!     .await?;
//! println!("{}", response.content.flatten());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod client;
pub mod message;

pub use client::{CompletionConfig, HttpCompletionService};
pub use message::{
    ChatMessage, CompletionRequest, CompletionResponse, ContentBlock, ModelContent, Role, ToolCall,
    ToolSpec,
};

use async_trait::async_trait;

/// Completion-service failures
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Service signaled overload (HTTP 429 equivalent); retryable by the
    /// caller after a delay, never fatal
    #[error("completion service rate limited")]
    RateLimited,

    /// Transport failure
    #[error("completion transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success API status
    #[error("completion service error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response carried no choices
    #[error("completion service returned an empty response")]
    EmptyResponse,
}

impl CompletionError {
    /// Whether the caller should retry after a delay
    #[inline]
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

/// Opaque text-completion collaborator
///
/// Supports plain-prompt mode (empty `tools`) and bindable single-tool mode.
/// Implementations perform exactly one model call per `complete` invocation;
/// retry policy belongs to callers.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Issue one completion call
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
