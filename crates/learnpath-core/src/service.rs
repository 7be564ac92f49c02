//! Curriculum service
//!
//! The core logic behind the request-handling surface: create (generate +
//! assemble + persist), enumerate, read, delete, and the subtopic
//! enrichment path (locate + draft + apply). HTTP routing and the
//! authorization gate live outside; callers hand in a verified user
//! identity and a validated request.

use crate::chapter::ChapterAgent;
use crate::error::PipelineError;
use crate::generate::{CurriculumGenerator, GeneratorConfig};
use crate::store::{CurriculumStore, StoreError, SubtopicLocation};
use learnpath_llm::CompletionService;
use learnpath_model::{Curriculum, CurriculumId, CurriculumRequest, SubtopicId, UserId};
use std::sync::Arc;

/// Curriculum service facade
pub struct CurriculumService {
    generator: CurriculumGenerator,
    chapters: ChapterAgent,
    store: Arc<dyn CurriculumStore>,
}

impl CurriculumService {
    /// Create new service over a completion service and a store
    #[must_use]
    pub fn new(
        completion: Arc<dyn CompletionService>,
        store: Arc<dyn CurriculumStore>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            generator: CurriculumGenerator::new(completion.clone(), config.clone()),
            chapters: ChapterAgent::new(completion, config),
            store,
        }
    }

    /// Generate and persist a curriculum for one request.
    ///
    /// The curriculum is written only after its full topics array passed
    /// validation; a failed generation persists nothing.
    pub async fn create_curriculum(
        &self,
        owner: UserId,
        request: CurriculumRequest,
    ) -> Result<Curriculum, PipelineError> {
        let topics = self.generator.generate(&request).await?;
        let curriculum = Curriculum::assemble(owner, &request, topics);

        self.store.insert(curriculum.clone()).await?;
        tracing::info!(
            id = %curriculum.id,
            owner = %owner,
            topics = curriculum.topics.len(),
            "curriculum persisted"
        );
        Ok(curriculum)
    }

    /// All curricula owned by the user, newest first
    pub async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Curriculum>, PipelineError> {
        Ok(self.store.find_by_owner(owner).await?)
    }

    /// One curriculum by id
    pub async fn get(&self, id: CurriculumId) -> Result<Curriculum, PipelineError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(StoreError::CurriculumNotFound(id))
            .map_err(PipelineError::from)
    }

    /// Delete a curriculum wholesale
    pub async fn delete(&self, id: CurriculumId) -> Result<(), PipelineError> {
        self.store.delete(id).await?;
        tracing::info!(id = %id, "curriculum deleted");
        Ok(())
    }

    /// Generate lesson content for one subtopic and persist it.
    ///
    /// Locate, draft, apply, then re-read: the returned projection is
    /// recomputed from storage rather than trusted from memory. A failure
    /// at any step aborts without mutating the target.
    pub async fn explain_subtopic(
        &self,
        id: SubtopicId,
    ) -> Result<SubtopicLocation, PipelineError> {
        let location = self.store.locate_subtopic(id).await?;
        tracing::info!(
            subtopic = %id,
            curriculum = %location.curriculum_id,
            "enriching subtopic"
        );

        let chapter = self
            .chapters
            .draft_chapter(
                &location.subtopic.name,
                location.subtopic.description.as_deref().unwrap_or(""),
            )
            .await?;

        self.store.apply_chapter(id, &chapter).await?;
        Ok(self.store.locate_subtopic(id).await?)
    }

    /// Read one subtopic with its owning curriculum projected
    pub async fn get_subtopic(&self, id: SubtopicId) -> Result<SubtopicLocation, PipelineError> {
        Ok(self.store.locate_subtopic(id).await?)
    }
}
