//! Curriculum store
//!
//! The document store is an external collaborator; this trait is the seam.
//! Besides plain CRUD it requires two capabilities the enrichment path
//! depends on:
//! - a cross-document flatten/match/project search (subtopic locator)
//! - a doubly filtered nested update that writes exactly one subtopic's
//!   chapter without rewriting siblings (nested mutation applier)

pub mod memory;

pub use memory::MemoryCurriculumStore;

use async_trait::async_trait;
use learnpath_model::{Curriculum, CurriculumId, Subtopic, SubtopicId, UserId};

/// Store-level failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No subtopic matches the identifier anywhere in the collection
    #[error("subtopic not found: {0}")]
    SubtopicNotFound(SubtopicId),

    /// No curriculum matches the identifier
    #[error("curriculum not found: {0}")]
    CurriculumNotFound(CurriculumId),

    /// Backend rejected the operation
    #[error("persistence failure: {0}")]
    Persistence(String),
}

/// A located subtopic projected with its owning curriculum
#[derive(Debug, Clone, PartialEq)]
pub struct SubtopicLocation {
    /// Owning curriculum id
    pub curriculum_id: CurriculumId,
    /// Owning curriculum title
    pub curriculum_title: String,
    /// The matched subtopic
    pub subtopic: Subtopic,
}

/// Document-store interface for curricula
#[async_trait]
pub trait CurriculumStore: Send + Sync {
    /// Persist a new curriculum. Written exactly once, atomically, with its
    /// full topics array; partial curricula are never stored.
    async fn insert(&self, curriculum: Curriculum) -> Result<(), StoreError>;

    /// All curricula owned by the user, newest first
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Curriculum>, StoreError>;

    /// One curriculum by id
    async fn find_by_id(&self, id: CurriculumId) -> Result<Option<Curriculum>, StoreError>;

    /// Delete a curriculum wholesale. Removing an absent id is not an error.
    async fn delete(&self, id: CurriculumId) -> Result<(), StoreError>;

    /// Find the one subtopic matching `id` across the entire collection,
    /// not scoped to a user.
    ///
    /// Identifier collisions across curricula should not happen given ULID
    /// assignment; if one does occur, an arbitrary single match is returned.
    async fn locate_subtopic(&self, id: SubtopicId) -> Result<SubtopicLocation, StoreError>;

    /// Write generated chapter text into exactly the one subtopic matching
    /// `id`, leaving sibling subtopics and topics untouched. Overwriting an
    /// existing chapter is allowed; concurrent writers race and the last
    /// write wins.
    async fn apply_chapter(&self, id: SubtopicId, chapter: &str) -> Result<(), StoreError>;
}
