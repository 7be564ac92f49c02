//! In-memory curriculum store
//!
//! DashMap-backed implementation used by tests and as the default backing
//! store. The locator and the chapter update mirror the contracts a
//! document database would honor: flatten-and-filter across all documents
//! for lookup, and an outer-topic/inner-subtopic double filter for the
//! write.

use crate::store::{CurriculumStore, StoreError, SubtopicLocation};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use learnpath_model::{Curriculum, CurriculumId, SubtopicId, UserId};

/// DashMap-backed curriculum store
#[derive(Debug, Default)]
pub struct MemoryCurriculumStore {
    curricula: DashMap<CurriculumId, Curriculum>,
}

impl MemoryCurriculumStore {
    /// Create new empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored curricula
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.curricula.len()
    }

    /// Whether the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curricula.is_empty()
    }
}

#[async_trait]
impl CurriculumStore for MemoryCurriculumStore {
    async fn insert(&self, curriculum: Curriculum) -> Result<(), StoreError> {
        self.curricula.insert(curriculum.id, curriculum);
        Ok(())
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Curriculum>, StoreError> {
        let mut owned: Vec<Curriculum> = self
            .curricula
            .iter()
            .filter(|entry| entry.owner == owner)
            .map(|entry| entry.value().clone())
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find_by_id(&self, id: CurriculumId) -> Result<Option<Curriculum>, StoreError> {
        Ok(self.curricula.get(&id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: CurriculumId) -> Result<(), StoreError> {
        self.curricula.remove(&id);
        Ok(())
    }

    async fn locate_subtopic(&self, id: SubtopicId) -> Result<SubtopicLocation, StoreError> {
        // Flatten every curriculum's topics and every topic's subtopics
        // into one candidate stream and keep the first id match.
        let location = self.curricula.iter().find_map(|entry| {
            entry
                .topics
                .iter()
                .flat_map(|topic| topic.subtopics.iter())
                .find(|subtopic| subtopic.id == id)
                .map(|subtopic| SubtopicLocation {
                    curriculum_id: entry.id,
                    curriculum_title: entry.title.clone(),
                    subtopic: subtopic.clone(),
                })
        });

        location.ok_or(StoreError::SubtopicNotFound(id))
    }

    async fn apply_chapter(&self, id: SubtopicId, chapter: &str) -> Result<(), StoreError> {
        for mut entry in self.curricula.iter_mut() {
            // Outer filter: the one topic whose subtopics contain the id.
            let Some(topic) = entry
                .topics
                .iter_mut()
                .find(|topic| topic.contains_subtopic(id))
            else {
                continue;
            };
            // Inner filter: the one subtopic by the same id.
            let Some(subtopic) = topic.subtopics.iter_mut().find(|s| s.id == id) else {
                continue;
            };

            subtopic.generated_chapter = Some(chapter.to_string());
            entry.updated_at = Utc::now();
            return Ok(());
        }

        Err(StoreError::SubtopicNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnpath_model::{
        CurriculumRequest, GeneratedSubtopic, GeneratedTopic, ProficiencyLevel,
    };

    fn curriculum_with_subtopics(owner: UserId, title: &str, per_topic: usize) -> Curriculum {
        let request = CurriculumRequest::new(title, "X", ProficiencyLevel::Beginner);
        let topics = (1..=2)
            .map(|n| GeneratedTopic {
                topic_id: format!("topic_{n}"),
                name: format!("Topic {n}"),
                description: None,
                order: Some(n),
                estimated_hours: None,
                difficulty: None,
                prerequisites: Vec::new(),
                subtopics: (0..per_topic)
                    .map(|i| GeneratedSubtopic {
                        name: Some(format!("Subtopic {n}.{i}")),
                        description: Some("desc".to_string()),
                        estimated_minutes: Some(30),
                    })
                    .collect(),
                resources: Vec::new(),
                key_takeaways: Vec::new(),
                practice_exercises: Vec::new(),
            })
            .collect();
        Curriculum::assemble(owner, &request, topics)
    }

    #[tokio::test]
    async fn locate_finds_subtopic_across_curricula() {
        let store = MemoryCurriculumStore::new();
        let owner = UserId::new();
        let first = curriculum_with_subtopics(owner, "First", 2);
        let second = curriculum_with_subtopics(owner, "Second", 2);
        let target = second.topics[1].subtopics[1].id;
        store.insert(first).await.unwrap();
        store.insert(second.clone()).await.unwrap();

        let location = store.locate_subtopic(target).await.unwrap();
        assert_eq!(location.curriculum_id, second.id);
        assert_eq!(location.curriculum_title, "Second");
        assert_eq!(location.subtopic.id, target);
    }

    #[tokio::test]
    async fn locate_absent_id_is_not_found() {
        let store = MemoryCurriculumStore::new();
        store
            .insert(curriculum_with_subtopics(UserId::new(), "Only", 1))
            .await
            .unwrap();

        let err = store.locate_subtopic(SubtopicId::new()).await.unwrap_err();
        assert!(matches!(err, StoreError::SubtopicNotFound(_)));
    }

    #[tokio::test]
    async fn apply_chapter_writes_only_the_target() {
        let store = MemoryCurriculumStore::new();
        let curriculum = curriculum_with_subtopics(UserId::new(), "Plan", 3);
        let target = curriculum.topics[0].subtopics[1].id;
        store.insert(curriculum.clone()).await.unwrap();

        store.apply_chapter(target, "chapter text").await.unwrap();

        let stored = store.find_by_id(curriculum.id).await.unwrap().unwrap();
        for topic in &stored.topics {
            for subtopic in &topic.subtopics {
                if subtopic.id == target {
                    assert_eq!(subtopic.generated_chapter.as_deref(), Some("chapter text"));
                } else {
                    assert!(subtopic.generated_chapter.is_none());
                }
            }
        }
        assert!(stored.updated_at > curriculum.updated_at);
    }

    #[tokio::test]
    async fn apply_chapter_is_idempotent_overwrite() {
        let store = MemoryCurriculumStore::new();
        let curriculum = curriculum_with_subtopics(UserId::new(), "Plan", 1);
        let target = curriculum.topics[0].subtopics[0].id;
        store.insert(curriculum).await.unwrap();

        store.apply_chapter(target, "first draft").await.unwrap();
        store.apply_chapter(target, "second draft").await.unwrap();

        let location = store.locate_subtopic(target).await.unwrap();
        assert_eq!(
            location.subtopic.generated_chapter.as_deref(),
            Some("second draft")
        );
    }

    #[tokio::test]
    async fn apply_chapter_on_absent_id_mutates_nothing() {
        let store = MemoryCurriculumStore::new();
        let curriculum = curriculum_with_subtopics(UserId::new(), "Plan", 1);
        store.insert(curriculum.clone()).await.unwrap();

        let err = store
            .apply_chapter(SubtopicId::new(), "orphan chapter")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::SubtopicNotFound(_)));

        let stored = store.find_by_id(curriculum.id).await.unwrap().unwrap();
        assert_eq!(stored, curriculum);
    }

    #[tokio::test]
    async fn find_by_owner_is_scoped_and_newest_first() {
        let store = MemoryCurriculumStore::new();
        let owner = UserId::new();
        let other = UserId::new();

        let older = curriculum_with_subtopics(owner, "Older", 1);
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let newer = curriculum_with_subtopics(owner, "Newer", 1);
        store.insert(older).await.unwrap();
        store.insert(newer).await.unwrap();
        store
            .insert(curriculum_with_subtopics(other, "Foreign", 1))
            .await
            .unwrap();

        let owned = store.find_by_owner(owner).await.unwrap();
        assert_eq!(owned.len(), 2);
        assert_eq!(owned[0].title, "Newer");
        assert_eq!(owned[1].title, "Older");
    }

    #[tokio::test]
    async fn delete_removes_subtopics_from_the_candidate_stream() {
        let store = MemoryCurriculumStore::new();
        let curriculum = curriculum_with_subtopics(UserId::new(), "Plan", 1);
        let target = curriculum.topics[0].subtopics[0].id;
        store.insert(curriculum.clone()).await.unwrap();

        store.delete(curriculum.id).await.unwrap();
        assert!(store.is_empty());

        let err = store.locate_subtopic(target).await.unwrap_err();
        assert!(matches!(err, StoreError::SubtopicNotFound(_)));

        // deleting again is not an error
        store.delete(curriculum.id).await.unwrap();
    }
}
