//! Testing utilities for the learnpath workspace
//!
//! Scripted completion stubs and curriculum fixtures shared across crates.

#![allow(missing_docs)]

use async_trait::async_trait;
use learnpath_llm::{
    CompletionError, CompletionRequest, CompletionResponse, CompletionService,
};
use learnpath_model::{
    Curriculum, CurriculumRequest, GeneratedSubtopic, GeneratedTopic, ProficiencyLevel, UserId,
};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Completion stub that plays back a scripted sequence of turns and records
/// every request it receives.
#[derive(Debug, Default)]
pub struct ScriptedCompletion {
    turns: Mutex<VecDeque<Result<CompletionResponse, CompletionError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a plain-text response
    #[must_use]
    pub fn then_text(self, text: impl Into<String>) -> Self {
        self.then_response(CompletionResponse::text(text))
    }

    /// Queue a full response
    #[must_use]
    pub fn then_response(self, response: CompletionResponse) -> Self {
        self.turns.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a rate-limit failure
    #[must_use]
    pub fn then_rate_limited(self) -> Self {
        self.turns
            .lock()
            .unwrap()
            .push_back(Err(CompletionError::RateLimited));
        self
    }

    /// All requests seen so far, in call order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.requests.lock().unwrap().push(request);
        self.turns
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyResponse))
    }
}

/// A minimal valid request with no optional fields set
pub fn sample_request() -> CurriculumRequest {
    CurriculumRequest::new("Intro to X", "X", ProficiencyLevel::Beginner)
}

/// Contract-shape JSON for `count` well-formed topics, 2 subtopics each
pub fn sample_topics_json(count: usize) -> String {
    let topics: Vec<_> = (1..=count)
        .map(|n| {
            let prerequisites: Vec<String> = if n > 1 {
                vec![format!("topic_{}", n - 1)]
            } else {
                Vec::new()
            };
            json!({
                "topicId": format!("topic_{n}"),
                "name": format!("Topic {n}"),
                "description": format!("Covers area {n}"),
                "order": n,
                "estimatedHours": 4,
                "difficulty": "medium",
                "prerequisites": prerequisites,
                "subtopics": [
                    { "name": format!("Subtopic {n}.1"), "description": "First part", "estimatedMinutes": 30 },
                    { "name": format!("Subtopic {n}.2"), "description": "Second part", "estimatedMinutes": 45 }
                ],
                "resources": [
                    { "type": "article", "title": format!("Reading {n}"), "url": "https://example.com" }
                ],
                "keyTakeaways": [format!("Takeaway {n}")],
                "practiceExercises": [format!("Exercise {n}")]
            })
        })
        .collect();
    json!({ "topics": topics }).to_string()
}

/// Contract-shape topics for direct assembly
pub fn sample_generated_topics(count: usize) -> Vec<GeneratedTopic> {
    serde_json::from_str::<serde_json::Value>(&sample_topics_json(count))
        .ok()
        .and_then(|v| serde_json::from_value(v["topics"].clone()).ok())
        .unwrap_or_else(|| {
            (1..=count)
                .map(|n| GeneratedTopic {
                    topic_id: format!("topic_{n}"),
                    name: format!("Topic {n}"),
                    description: None,
                    order: Some(n as u32),
                    estimated_hours: None,
                    difficulty: None,
                    prerequisites: Vec::new(),
                    subtopics: vec![GeneratedSubtopic {
                        name: Some(format!("Subtopic {n}.1")),
                        description: None,
                        estimated_minutes: Some(30),
                    }],
                    resources: Vec::new(),
                    key_takeaways: Vec::new(),
                    practice_exercises: Vec::new(),
                })
                .collect()
        })
}

/// An assembled curriculum owned by `owner` with `count` topics
pub fn sample_curriculum(owner: UserId, count: usize) -> Curriculum {
    Curriculum::assemble(owner, &sample_request(), sample_generated_topics(count))
}
