//! Contract-shape payload types
//!
//! The exact shape the model is asked to return: a `topics` array whose
//! items mirror the persisted entities minus storage-assigned identifiers.
//! `JsonSchema` derives feed the schema that is embedded verbatim in the
//! generation prompt. Most fields are deliberately optional - a topic with
//! a missing estimate is salvageable, a topic without a name is not.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Topic difficulty as reported by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Learning resource kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Video,
    Book,
    Course,
    Documentation,
}

/// Root payload the model must return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationPayload {
    /// Ordered topics of the generated curriculum
    pub topics: Vec<GeneratedTopic>,
}

/// One generated topic, contract shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTopic {
    /// App-level identifier, e.g. "topic_1" (not a storage id)
    pub topic_id: String,
    /// Topic name
    pub name: String,
    /// Topic description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Authoritative ordering (array position is not)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Estimated hours to complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    /// Difficulty rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// References to earlier topics' `topicId` values
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Generated subtopics
    #[serde(default)]
    pub subtopics: Vec<GeneratedSubtopic>,
    /// Generated resources
    #[serde(default)]
    pub resources: Vec<GeneratedResource>,
    /// Key takeaway strings
    #[serde(default)]
    pub key_takeaways: Vec<String>,
    /// Practice exercise strings
    #[serde(default)]
    pub practice_exercises: Vec<String>,
}

/// One generated subtopic, contract shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSubtopic {
    /// Subtopic name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Subtopic description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Estimated duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
}

/// One generated resource, contract shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResource {
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn topic_deserializes_from_wire_shape() {
        let json = r#"{
            "topicId": "topic_1",
            "name": "Ownership",
            "order": 1,
            "estimatedHours": 6,
            "difficulty": "medium",
            "subtopics": [
                { "name": "Borrowing", "estimatedMinutes": 45 }
            ],
            "resources": [
                { "type": "documentation", "title": "The Book", "url": "https://doc.rust-lang.org/book/" }
            ],
            "keyTakeaways": ["Every value has one owner"],
            "practiceExercises": ["Implement a stack"]
        }"#;

        let topic: GeneratedTopic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.topic_id, "topic_1");
        assert_eq!(topic.difficulty, Some(Difficulty::Medium));
        assert_eq!(topic.subtopics[0].estimated_minutes, Some(45));
        assert_eq!(topic.resources[0].kind, ResourceKind::Documentation);
        assert!(topic.prerequisites.is_empty());
    }

    #[test]
    fn topic_rejects_missing_topic_id() {
        let json = r#"{ "name": "Ownership" }"#;
        assert!(serde_json::from_str::<GeneratedTopic>(json).is_err());
    }

    #[test]
    fn resource_rejects_unknown_kind() {
        let json = r#"{ "type": "podcast", "title": "x" }"#;
        assert!(serde_json::from_str::<GeneratedResource>(json).is_err());
    }

    #[test]
    fn payload_schema_names_topics_field() {
        let schema = schemars::schema_for!(GenerationPayload);
        let rendered = serde_json::to_string(&schema).unwrap();
        assert!(rendered.contains("\"topics\""));
        assert!(rendered.contains("topicId"));
    }
}
