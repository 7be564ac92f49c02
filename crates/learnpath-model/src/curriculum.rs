//! Persisted curriculum entities
//!
//! A curriculum exclusively owns its topics; a topic exclusively owns its
//! subtopics and resources. No back-references are stored - locating a
//! subtopic's parents is a search over the owning documents.

use crate::generated::{Difficulty, GeneratedResource, GeneratedSubtopic, GeneratedTopic, ResourceKind};
use crate::ids::{CurriculumId, SubtopicId, UserId};
use crate::request::{CurriculumRequest, ProficiencyLevel, TimeCommitment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root learning-path document produced by one generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    /// Storage-assigned identifier
    pub id: CurriculumId,
    /// Owning user
    pub owner: UserId,
    /// Curriculum title
    pub title: String,
    /// Subject area
    pub subject: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Learner proficiency level the plan was generated for
    pub level: ProficiencyLevel,
    /// Learning goals projected from the request
    #[serde(default)]
    pub learning_goals: Vec<String>,
    /// Time commitment projected from the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_commitment: Option<TimeCommitment>,
    /// Prerequisites projected from the request
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Ordered topics (the `order` field is authoritative)
    pub topics: Vec<Topic>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Curriculum {
    /// Assemble a curriculum from a validated request and generated topics.
    ///
    /// Every subtopic receives a fresh ULID here. Lookup and the nested
    /// chapter update key on that id alone, across all curricula, so the
    /// assignment must be collision-resistant globally.
    #[must_use]
    pub fn assemble(owner: UserId, request: &CurriculumRequest, topics: Vec<GeneratedTopic>) -> Self {
        let now = Utc::now();
        Self {
            id: CurriculumId::new(),
            owner,
            title: request.title.clone(),
            subject: request.subject.clone(),
            description: request.description.clone(),
            level: request.level,
            learning_goals: request.learning_goals.clone(),
            time_commitment: request.time_commitment,
            prerequisites: request.prerequisites.clone(),
            topics: topics.into_iter().map(Topic::from_generated).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Total number of subtopics across all topics
    #[inline]
    #[must_use]
    pub fn subtopic_count(&self) -> usize {
        self.topics.iter().map(|t| t.subtopics.len()).sum()
    }
}

/// Top-level ordered unit of a curriculum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// App-level identifier (e.g. "topic_1"), distinct from storage ids
    pub topic_id: String,
    /// Topic name
    pub name: String,
    /// Topic description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Authoritative ordering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Estimated hours to complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    /// Difficulty rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// `topicId` references to earlier topics in the same curriculum
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Owned subtopics
    #[serde(default)]
    pub subtopics: Vec<Subtopic>,
    /// Owned resources
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Key takeaway strings
    #[serde(default)]
    pub key_takeaways: Vec<String>,
    /// Practice exercise strings
    #[serde(default)]
    pub practice_exercises: Vec<String>,
}

impl Topic {
    /// Promote a contract-shape topic to a persisted topic, assigning
    /// storage ids to its subtopics.
    #[must_use]
    pub fn from_generated(generated: GeneratedTopic) -> Self {
        Self {
            topic_id: generated.topic_id,
            name: generated.name,
            description: generated.description,
            order: generated.order,
            estimated_hours: generated.estimated_hours,
            difficulty: generated.difficulty,
            prerequisites: generated.prerequisites,
            subtopics: generated
                .subtopics
                .into_iter()
                .map(Subtopic::from_generated)
                .collect(),
            resources: generated.resources.into_iter().map(Resource::from_generated).collect(),
            key_takeaways: generated.key_takeaways,
            practice_exercises: generated.practice_exercises,
        }
    }

    /// Whether any subtopic in this topic matches the given id
    #[inline]
    #[must_use]
    pub fn contains_subtopic(&self, id: SubtopicId) -> bool {
        self.subtopics.iter().any(|s| s.id == id)
    }
}

/// Leaf unit of a topic, eventually enriched with generated lesson text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
    /// Storage-assigned identifier, globally unique
    pub id: SubtopicId,
    /// Subtopic name
    pub name: String,
    /// Subtopic description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Estimated duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    /// Generated lesson text; empty until the enrichment path fills it.
    /// Re-generation overwrites it (idempotent, last write wins).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_chapter: Option<String>,
}

impl Subtopic {
    fn from_generated(generated: GeneratedSubtopic) -> Self {
        Self {
            id: SubtopicId::new(),
            name: generated.name.unwrap_or_default(),
            description: generated.description,
            estimated_minutes: generated.estimated_minutes,
            generated_chapter: None,
        }
    }
}

/// Learning resource owned by a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Resource kind
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Resource title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Resource URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Resource {
    fn from_generated(generated: GeneratedResource) -> Self {
        Self {
            kind: generated.kind,
            title: generated.title,
            url: generated.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn generated_topic(topic_id: &str, subtopics: usize) -> GeneratedTopic {
        GeneratedTopic {
            topic_id: topic_id.to_string(),
            name: format!("Topic {topic_id}"),
            description: None,
            order: Some(1),
            estimated_hours: Some(4.0),
            difficulty: Some(Difficulty::Easy),
            prerequisites: Vec::new(),
            subtopics: (0..subtopics)
                .map(|i| GeneratedSubtopic {
                    name: Some(format!("Subtopic {i}")),
                    description: None,
                    estimated_minutes: Some(30),
                })
                .collect(),
            resources: Vec::new(),
            key_takeaways: Vec::new(),
            practice_exercises: Vec::new(),
        }
    }

    #[test]
    fn assemble_projects_request_fields() {
        let owner = UserId::new();
        let request = CurriculumRequest::new("Intro to X", "X", ProficiencyLevel::Beginner);
        let curriculum = Curriculum::assemble(owner, &request, vec![generated_topic("topic_1", 2)]);

        assert_eq!(curriculum.owner, owner);
        assert_eq!(curriculum.title, "Intro to X");
        assert!(curriculum.learning_goals.is_empty());
        assert!(curriculum.prerequisites.is_empty());
        assert_eq!(curriculum.topics.len(), 1);
        assert_eq!(curriculum.subtopic_count(), 2);
        assert_eq!(curriculum.created_at, curriculum.updated_at);
    }

    #[test]
    fn assemble_assigns_distinct_subtopic_ids() {
        let request = CurriculumRequest::new("Intro", "X", ProficiencyLevel::Beginner);
        let curriculum = Curriculum::assemble(
            UserId::new(),
            &request,
            vec![generated_topic("topic_1", 3), generated_topic("topic_2", 3)],
        );

        let mut ids: Vec<_> = curriculum
            .topics
            .iter()
            .flat_map(|t| t.subtopics.iter().map(|s| s.id))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn fresh_subtopics_have_no_chapter() {
        let request = CurriculumRequest::new("Intro", "X", ProficiencyLevel::Beginner);
        let curriculum =
            Curriculum::assemble(UserId::new(), &request, vec![generated_topic("topic_1", 1)]);
        assert!(curriculum.topics[0].subtopics[0].generated_chapter.is_none());
    }

    #[test]
    fn contains_subtopic_matches_only_own_ids() {
        let request = CurriculumRequest::new("Intro", "X", ProficiencyLevel::Beginner);
        let curriculum =
            Curriculum::assemble(UserId::new(), &request, vec![generated_topic("topic_1", 1)]);
        let topic = &curriculum.topics[0];

        assert!(topic.contains_subtopic(topic.subtopics[0].id));
        assert!(!topic.contains_subtopic(SubtopicId::new()));
    }
}
