//! Error types for the curriculum pipeline
//!
//! Three independently reportable validation tiers (not JSON at all, wrong
//! top-level shape, wrong field types) plus the surrounding classification
//! a caller needs to decide on retries.

use crate::store::StoreError;
use learnpath_llm::CompletionError;
use learnpath_model::SubtopicId;

/// Main pipeline error type
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Model output failed normalization/validation
    #[error("generation failed: {0}")]
    GenerationFailed(#[from] ValidationError),

    /// Completion service is overloaded; retryable by the caller after a
    /// delay, never fatal
    #[error("completion service rate limited, retry later")]
    UpstreamRateLimited,

    /// Completion service failed for a non-rate-limit reason
    #[error("completion failed: {0}")]
    Completion(CompletionError),

    /// No subtopic matches the given identifier
    #[error("subtopic not found: {0}")]
    NotFound(SubtopicId),

    /// Document store rejected an operation
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Validation failures over normalized model output
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Output is not JSON at all.
    ///
    /// Carries bounded head/tail slices for diagnosis, never the full text.
    #[error("model output is not valid JSON ({length} chars): {message}")]
    MalformedOutput {
        /// Total length of the offending text
        length: usize,
        /// First slice of the text
        head: String,
        /// Last slice of the text
        tail: String,
        /// Underlying parse error
        message: String,
    },

    /// Valid JSON, wrong top-level shape
    #[error("invalid output structure: {0}")]
    InvalidStructure(String),

    /// Right shape, wrong field types or enum values
    #[error("output violates the generation schema: {0}")]
    SchemaViolation(String),
}

/// What a caller should do with a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAdvice {
    /// Retry the same call after a delay
    RetryAfterDelay,
    /// Issue a fresh generation attempt (same input, new model call)
    RegenerateFresh,
    /// Surface to the end user as-is
    DoNotRetry,
}

impl PipelineError {
    /// Classify this failure for the caller's retry decision.
    ///
    /// The pipeline itself never retries; model output is non-deterministic,
    /// so validation failures are worth a fresh attempt while lookup and
    /// persistence failures are not.
    #[must_use]
    pub fn retry_advice(&self) -> RetryAdvice {
        match self {
            Self::UpstreamRateLimited => RetryAdvice::RetryAfterDelay,
            Self::GenerationFailed(_) => RetryAdvice::RegenerateFresh,
            Self::Completion(_) | Self::NotFound(_) | Self::Persistence(_) => {
                RetryAdvice::DoNotRetry
            }
        }
    }
}

impl From<CompletionError> for PipelineError {
    fn from(error: CompletionError) -> Self {
        match error {
            CompletionError::RateLimited => Self::UpstreamRateLimited,
            other => Self::Completion(other),
        }
    }
}

impl From<StoreError> for PipelineError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::SubtopicNotFound(id) => Self::NotFound(id),
            StoreError::CurriculumNotFound(id) => {
                Self::Persistence(format!("curriculum not found: {id}"))
            }
            StoreError::Persistence(message) => Self::Persistence(message),
        }
    }
}
