//! Learnpath data model
//!
//! Entities and input types for the curriculum pipeline:
//! - Identifier newtypes (ULID-backed)
//! - Curriculum request (validated pipeline input)
//! - Contract-shape payload types (what the model returns)
//! - Persisted entities (curriculum, topic, subtopic, resource)

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod curriculum;
pub mod generated;
pub mod ids;
pub mod request;

// Re-exports for convenience
pub use curriculum::{Curriculum, Resource, Subtopic, Topic};
pub use generated::{
    Difficulty, GeneratedResource, GeneratedSubtopic, GeneratedTopic, GenerationPayload,
    ResourceKind,
};
pub use ids::{CurriculumId, SubtopicId, UserId};
pub use request::{CurriculumRequest, ProficiencyLevel, TimeCommitment};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
