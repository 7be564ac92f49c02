//! Curriculum request types
//!
//! The validated input object handed to the generation pipeline by the
//! request-authorization gate. Immutable once submitted; never persisted
//! directly - only its projection onto the resulting curriculum is stored.

use serde::{Deserialize, Serialize};

/// Learner proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    /// No prior exposure
    Beginner,
    /// Working familiarity
    Intermediate,
    /// Deep familiarity
    Advanced,
    /// Professional mastery
    Expert,
}

impl ProficiencyLevel {
    /// Wire-format string (lowercase)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Advanced => "advanced",
            ProficiencyLevel::Expert => "expert",
        }
    }
}

/// Weekly time commitment declared by the learner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeCommitment {
    /// Hours available per week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<f64>,
    /// Total weeks available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_weeks: Option<u32>,
}

impl TimeCommitment {
    /// Create new time commitment
    #[inline]
    #[must_use]
    pub fn new(hours_per_week: f64, total_weeks: u32) -> Self {
        Self {
            hours_per_week: Some(hours_per_week),
            total_weeks: Some(total_weeks),
        }
    }
}

/// A user's natural-language learning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumRequest {
    /// Curriculum title
    pub title: String,
    /// Subject area
    pub subject: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Learner proficiency level
    pub level: ProficiencyLevel,
    /// Learning goal strings
    #[serde(default)]
    pub learning_goals: Vec<String>,
    /// Optional time commitment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_commitment: Option<TimeCommitment>,
    /// Prerequisite strings (free text, not topic references)
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl CurriculumRequest {
    /// Create new request with the required fields
    #[inline]
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        level: ProficiencyLevel,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            description: None,
            level,
            learning_goals: Vec::new(),
            time_commitment: None,
            prerequisites: Vec::new(),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With learning goals
    #[inline]
    #[must_use]
    pub fn with_goals(mut self, goals: Vec<String>) -> Self {
        self.learning_goals = goals;
        self
    }

    /// With time commitment
    #[inline]
    #[must_use]
    pub fn with_time_commitment(mut self, commitment: TimeCommitment) -> Self {
        self.time_commitment = Some(commitment);
        self
    }

    /// With prerequisites
    #[inline]
    #[must_use]
    pub fn with_prerequisites(mut self, prerequisites: Vec<String>) -> Self {
        self.prerequisites = prerequisites;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn level_serializes_lowercase() {
        let json = serde_json::to_string(&ProficiencyLevel::Beginner).unwrap();
        assert_eq!(json, "\"beginner\"");
    }

    #[test]
    fn request_builder() {
        let request = CurriculumRequest::new("Intro to X", "X", ProficiencyLevel::Beginner)
            .with_goals(vec!["Build a project".to_string()])
            .with_time_commitment(TimeCommitment::new(5.0, 8));

        assert_eq!(request.title, "Intro to X");
        assert_eq!(request.learning_goals.len(), 1);
        assert!(request.time_commitment.is_some());
        assert!(request.prerequisites.is_empty());
    }

    #[test]
    fn request_deserializes_camel_case() {
        let json = r#"{
            "title": "Intro to Rust",
            "subject": "Rust",
            "level": "intermediate",
            "learningGoals": ["Ownership"],
            "timeCommitment": { "hoursPerWeek": 4, "totalWeeks": 6 }
        }"#;

        let request: CurriculumRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.level, ProficiencyLevel::Intermediate);
        assert_eq!(request.learning_goals, vec!["Ownership".to_string()]);
        assert_eq!(
            request.time_commitment.unwrap().hours_per_week,
            Some(4.0)
        );
        assert!(request.description.is_none());
    }
}
