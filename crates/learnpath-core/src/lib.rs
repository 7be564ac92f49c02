//! Learnpath core pipeline
//!
//! Turns a validated learning request into a persisted hierarchical
//! curriculum, and later expands individual subtopics into lesson content:
//! - Structured-output contract (schema + prompt templates)
//! - Response normalizer (fence stripping, content-block flattening)
//! - Validator/coercer (three failure tiers)
//! - Generation orchestrator (one model call, classified errors)
//! - Chapter agent (single-tool orchestration, two response shapes)
//! - Curriculum store (cross-document locator, doubly filtered update)
//!
//! # Example
//!
//! ```rust,ignore
//! use learnpath_core::{CurriculumService, GeneratorConfig, MemoryCurriculumStore};
//! use learnpath_llm::{CompletionConfig, HttpCompletionService};
//! use learnpath_model::{CurriculumRequest, ProficiencyLevel, UserId};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let completion = Arc::new(HttpCompletionService::new(
//!     CompletionConfig::new("https://api.example.com/v1").with_api_key("secret"),
//! ));
//! let store = Arc::new(MemoryCurriculumStore::new());
//! let service = CurriculumService::new(completion, store, GeneratorConfig::default());
//!
//! let request = CurriculumRequest::new("Intro to Rust", "Rust", ProficiencyLevel::Beginner);
//! let curriculum = service.create_curriculum(UserId::new(), request).await?;
//! println!("{} topics", curriculum.topics.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod chapter;
pub mod contract;
pub mod error;
pub mod generate;
pub mod normalize;
pub mod service;
pub mod store;
pub mod validate;

// Re-exports for convenience
pub use chapter::ChapterAgent;
pub use error::{PipelineError, RetryAdvice, ValidationError};
pub use generate::{CurriculumGenerator, GeneratorConfig};
pub use normalize::strip_code_fences;
pub use service::CurriculumService;
pub use store::{CurriculumStore, MemoryCurriculumStore, StoreError, SubtopicLocation};
pub use validate::parse_generated_topics;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the learnpath pipeline
    pub use crate::{
        ChapterAgent, CurriculumGenerator, CurriculumService, CurriculumStore, GeneratorConfig,
        MemoryCurriculumStore, PipelineError, RetryAdvice, SubtopicLocation,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
