//! JSON import — raw text from a file upload or a paste box becomes a
//! typed snapshot, or a user-visible rejection. On rejection the caller
//! keeps its prior snapshot unchanged; nothing is partially applied.

use crate::errors::AppError;
use crate::models::resume::ResumeData;

/// Parses raw text as a ResumeData JSON document.
///
/// Typed deserialization doubles as shape validation: missing collections
/// fall back to their defaults, unknown fields are ignored, wrong-typed
/// fields are rejected with the parser's message.
pub fn parse_resume_json(raw: &str) -> Result<ResumeData, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::UnprocessableEntity(format!("Invalid resume JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_shape_imports_cleanly() {
        let raw = r#"{
            "personalInfo": {
                "name": "Ada Lovelace",
                "linkedin": "linkedin.com/in/ada",
                "location": "London",
                "email": "ada@example.com",
                "mobile": "+44 1234"
            },
            "summary": "Analyst.",
            "education": [
                { "school": "UCL", "degree": "Maths", "location": "London", "date": "1840", "gpa": "4.0" }
            ],
            "skills": { "Technical Skills": ["Rust", "SQL"] },
            "projects": [
                { "title": "Notes", "description": "Algorithms", "tech": "Maths", "inProgress": true }
            ],
            "certifications": [],
            "publications": [],
            "extraSections": [
                { "title": "Awards", "items": [ { "title": "Medal", "description": "For maths" } ] }
            ]
        }"#;
        let data = parse_resume_json(raw).unwrap();
        assert_eq!(data.personal_info.name, "Ada Lovelace");
        assert_eq!(data.education.len(), 1);
        assert_eq!(data.projects[0].in_progress, Some(true));
        assert_eq!(data.extra_sections[0].items.len(), 1);
    }

    #[test]
    fn test_missing_collections_default_empty() {
        let data = parse_resume_json(r#"{ "summary": "Just a summary" }"#).unwrap();
        assert_eq!(data.summary, "Just a summary");
        assert!(data.education.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.extra_sections.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let data = parse_resume_json(r##"{ "summary": "ok", "themeColor": "#1976d2" }"##).unwrap();
        assert_eq!(data.summary, "ok");
    }

    #[test]
    fn test_malformed_json_rejected_with_message() {
        let err = parse_resume_json("{ not json").unwrap_err();
        match err {
            AppError::UnprocessableEntity(msg) => {
                assert!(msg.contains("Invalid resume JSON"));
            }
            other => panic!("expected UnprocessableEntity, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_typed_field_rejected() {
        // education must be an array, not a string
        let err = parse_resume_json(r#"{ "education": "none" }"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_empty_object_is_empty_snapshot() {
        let data = parse_resume_json("{}").unwrap();
        assert_eq!(data, ResumeData::default());
    }
}
