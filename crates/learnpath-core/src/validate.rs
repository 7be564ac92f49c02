//! Curriculum validator/coercer
//!
//! Turns normalized model text into validated contract-shape topics in
//! three independently reportable tiers:
//! 1. is it JSON at all (`MalformedOutput`)
//! 2. is it shaped right at the top level (`InvalidStructure`)
//! 3. are the field types right (`SchemaViolation`)
//!
//! One deliberate leniency: a bare top-level array is coerced into
//! `{ "topics": [...] }` rather than rejected, since salvaging that shape
//! deviation is always safe.

use crate::error::ValidationError;
use learnpath_model::{GeneratedTopic, GenerationPayload};
use serde_json::Value;

/// Longest head slice carried in a `MalformedOutput` error
const HEAD_SLICE_CHARS: usize = 1000;
/// Longest tail slice carried in a `MalformedOutput` error
const TAIL_SLICE_CHARS: usize = 500;

/// Parse, shape-correct, and validate normalized model text.
pub fn parse_generated_topics(normalized: &str) -> Result<Vec<GeneratedTopic>, ValidationError> {
    let parsed: Value =
        serde_json::from_str(normalized).map_err(|e| malformed(normalized, &e.to_string()))?;

    // The model sometimes ignores the "wrap in an object" instruction and
    // returns the topics array directly.
    let parsed = match parsed {
        Value::Array(items) => {
            tracing::debug!("model returned a bare array, coercing into a topics object");
            let mut object = serde_json::Map::new();
            object.insert("topics".to_string(), Value::Array(items));
            Value::Object(object)
        }
        other => other,
    };

    match parsed.get("topics") {
        None => {
            return Err(ValidationError::InvalidStructure(
                "response does not contain a `topics` field".to_string(),
            ))
        }
        Some(topics) if !topics.is_array() => {
            return Err(ValidationError::InvalidStructure(
                "`topics` field is not an array".to_string(),
            ))
        }
        Some(_) => {}
    }

    let payload: GenerationPayload = serde_json::from_value(parsed)
        .map_err(|e| ValidationError::SchemaViolation(e.to_string()))?;

    tracing::debug!(count = payload.topics.len(), "validated generated topics");
    Ok(payload.topics)
}

fn malformed(content: &str, message: &str) -> ValidationError {
    ValidationError::MalformedOutput {
        length: content.len(),
        head: head_slice(content, HEAD_SLICE_CHARS),
        tail: tail_slice(content, TAIL_SLICE_CHARS),
        message: message.to_string(),
    }
}

// Slices are taken on char boundaries; model output is arbitrary UTF-8.

fn head_slice(s: &str, chars: usize) -> String {
    s.chars().take(chars).collect()
}

fn tail_slice(s: &str, chars: usize) -> String {
    let total = s.chars().count();
    s.chars().skip(total.saturating_sub(chars)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn well_formed_object_parses() {
        let text = r#"{ "topics": [ { "topicId": "topic_1", "name": "Basics" } ] }"#;
        let topics = parse_generated_topics(text).unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].topic_id, "topic_1");
    }

    #[test]
    fn bare_array_is_coerced_into_topics_object() {
        let text = r#"[ { "topicId": "topic_1", "name": "Basics" } ]"#;
        let topics = parse_generated_topics(text).unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].topic_id, "topic_1");
    }

    #[test]
    fn non_json_text_is_malformed_output() {
        let err = parse_generated_topics("Sure! Here is your roadmap...").unwrap_err();
        match err {
            ValidationError::MalformedOutput { length, head, .. } => {
                assert_eq!(length, 29);
                assert!(head.starts_with("Sure!"));
            }
            other => panic!("expected MalformedOutput, got {other:?}"),
        }
    }

    #[test]
    fn wrong_top_level_shape_is_invalid_structure() {
        let err = parse_generated_topics(r#"{ "notTopics": [] }"#).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidStructure(_)));
    }

    #[test]
    fn non_array_topics_is_invalid_structure() {
        let err = parse_generated_topics(r#"{ "topics": "oops" }"#).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidStructure(_)));
    }

    #[test]
    fn bad_field_types_are_schema_violations() {
        // difficulty outside the enum
        let text = r#"{ "topics": [ { "topicId": "topic_1", "name": "Basics", "difficulty": "brutal" } ] }"#;
        let err = parse_generated_topics(text).unwrap_err();
        assert!(matches!(err, ValidationError::SchemaViolation(_)));
    }

    #[test]
    fn missing_required_topic_fields_are_schema_violations() {
        let text = r#"{ "topics": [ { "name": "No id" } ] }"#;
        let err = parse_generated_topics(text).unwrap_err();
        assert!(matches!(err, ValidationError::SchemaViolation(_)));
    }

    #[test]
    fn malformed_slices_are_bounded_and_char_safe() {
        // long non-JSON text full of multibyte chars
        let text = "é".repeat(3000);
        let err = parse_generated_topics(&text).unwrap_err();
        match err {
            ValidationError::MalformedOutput { head, tail, .. } => {
                assert_eq!(head.chars().count(), 1000);
                assert_eq!(tail.chars().count(), 500);
            }
            other => panic!("expected MalformedOutput, got {other:?}"),
        }
    }

    #[test]
    fn empty_string_is_malformed_output() {
        let err = parse_generated_topics("").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedOutput { .. }));
    }
}
