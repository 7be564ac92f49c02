//! Structured-output contract
//!
//! The schema and prompt templates describing what a valid curriculum looks
//! like, plus the single tool offered to the chapter agent. Generation policy
//! (topic counts, id pattern, ordering) is communicated to the model as
//! instructions here; it is not enforced by code. Pure data, no failure
//! modes.

use learnpath_llm::ToolSpec;
use learnpath_model::{CurriculumRequest, GenerationPayload, TimeCommitment};
use serde_json::{json, Value};

/// Minimum topics the model is asked for
pub const MIN_TOPICS: usize = 5;
/// Maximum topics the model is asked for
pub const MAX_TOPICS: usize = 10;

/// Name of the single tool bound for chapter drafting
pub const CHAPTER_TOOL_NAME: &str = "create_chapter";

/// Fallback phrase for absent learning goals
const FALLBACK_GOALS: &str = "General understanding";
/// Fallback phrase for an absent time commitment
const FALLBACK_TIME: &str = "Flexible";
/// Fallback phrase for absent prerequisites
const FALLBACK_PREREQUISITES: &str = "None";

/// JSON schema of the expected generation payload
#[must_use]
pub fn generation_schema() -> Value {
    let schema = schemars::schema_for!(GenerationPayload);
    serde_json::to_value(schema).unwrap_or(Value::Null)
}

fn render_goals(goals: &[String]) -> String {
    if goals.is_empty() {
        FALLBACK_GOALS.to_string()
    } else {
        goals.join(", ")
    }
}

fn render_time_commitment(commitment: Option<&TimeCommitment>) -> String {
    match commitment {
        Some(tc) => format!(
            "{} hours/week for {} weeks",
            tc.hours_per_week.unwrap_or(0.0),
            tc.total_weeks.unwrap_or(0)
        ),
        None => FALLBACK_TIME.to_string(),
    }
}

fn render_prerequisites(prerequisites: &[String]) -> String {
    if prerequisites.is_empty() {
        FALLBACK_PREREQUISITES.to_string()
    } else {
        prerequisites.join(", ")
    }
}

/// Render the generation prompt for one curriculum request.
///
/// Every request field is embedded; absent optionals get explicit fallback
/// phrases so the model never receives an ambiguous gap.
#[must_use]
pub fn render_generation_prompt(request: &CurriculumRequest) -> String {
    let description = request
        .description
        .as_deref()
        .unwrap_or("No further description provided");
    let schema = serde_json::to_string_pretty(&generation_schema()).unwrap_or_default();

    format!(
        "You are an expert learning path designer. Generate a comprehensive, structured learning curriculum.\n\
        \n\
        **Requirements:**\n\
        - Title: {title}\n\
        - Subject: {subject}\n\
        - Description: {description}\n\
        - Level: {level}\n\
        - Learning Goals: {goals}\n\
        - Time Commitment: {time}\n\
        - Prerequisites: {prerequisites}\n\
        \n\
        **Instructions:**\n\
        1. Create {min_topics}-{max_topics} topics that progressively build knowledge from {level} level\n\
        2. Each topic should have a unique topicId (format: \"topic_1\", \"topic_2\", etc.)\n\
        3. Order topics logically (order: 1, 2, 3...) with monotonically increasing order values\n\
        4. Set realistic estimatedHours for each topic\n\
        5. Assign appropriate difficulty (easy/medium/hard)\n\
        6. Define prerequisites using topicId references from earlier topics only\n\
        7. Include 3-5 subtopics per topic with estimated minutes\n\
        8. Provide 3-5 high-quality, real resources (mix of articles, videos, books, courses, documentation)\n\
        9. List 3-5 key takeaways per topic\n\
        10. Suggest 2-4 practical exercises per topic\n\
        \n\
        **CRITICAL: Return ONLY valid JSON. No markdown, no explanation, no code blocks. Start directly with {{ and end with }}**\n\
        \n\
        **IMPORTANT: The response MUST be a JSON object with a \"topics\" array at the root level.**\n\
        \n\
        JSON Schema:\n\
        {schema}\n\
        \n\
        Generate the curriculum now. Remember: wrap the topics array in an object with a \"topics\" key:",
        title = request.title,
        subject = request.subject,
        description = description,
        level = request.level.as_str(),
        goals = render_goals(&request.learning_goals),
        time = render_time_commitment(request.time_commitment.as_ref()),
        prerequisites = render_prerequisites(&request.prerequisites),
        min_topics = MIN_TOPICS,
        max_topics = MAX_TOPICS,
        schema = schema,
    )
}

/// Render the first-turn prompt for the chapter agent
#[must_use]
pub fn render_chapter_agent_prompt(name: &str, description: &str) -> String {
    let subtopic = json!({ "name": name, "description": description });
    format!(
        "Generate a chapter for this subtopic:\n\n{}",
        serde_json::to_string_pretty(&subtopic).unwrap_or_default()
    )
}

/// Render the structured chapter prompt executed by the tool
#[must_use]
pub fn render_chapter_prompt(topic_name: &str, description: &str) -> String {
    format!(
        "Generate a complete chapter for \"{topic_name}\".\n\
        \n\
        Description: {description}\n\
        \n\
        Include:\n\
        - Definition\n\
        - Explanation\n\
        - Examples\n\
        - Practice questions\n"
    )
}

/// The single callable capability offered to the chapter agent
#[must_use]
pub fn chapter_tool_spec() -> ToolSpec {
    ToolSpec::new(
        CHAPTER_TOOL_NAME,
        "Generate a chapter for a topic. Return the chapter text directly, \
         without conversational preamble.",
        json!({
            "type": "object",
            "properties": {
                "topicName": { "type": "string" },
                "description": { "type": "string" }
            },
            "required": ["topicName", "description"]
        }),
    )
}
