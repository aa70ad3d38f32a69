//! JSON export — the snapshot serialized as indented JSON, handed to the
//! UI together with the fixed download file name.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::ResumeData;

/// Download name the UI attaches to the exported file.
pub const EXPORT_FILE_NAME: &str = "resume-data.json";

/// An export ready for the UI to offer as a file download.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub file_name: &'static str,
    /// Indented JSON text of the snapshot.
    pub contents: String,
}

/// Serializes a snapshot as indented JSON under the fixed download name.
pub fn export_resume_json(data: &ResumeData) -> Result<ExportPayload, AppError> {
    let contents = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to serialize snapshot: {e}")))?;
    Ok(ExportPayload {
        file_name: EXPORT_FILE_NAME,
        contents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::PersonalInfo;
    use crate::transfer::import::parse_resume_json;

    fn make_snapshot() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                ..PersonalInfo::default()
            },
            summary: "Analyst and programmer.".to_string(),
            ..ResumeData::default()
        }
    }

    #[test]
    fn test_export_uses_fixed_file_name() {
        let payload = export_resume_json(&make_snapshot()).unwrap();
        assert_eq!(payload.file_name, "resume-data.json");
    }

    #[test]
    fn test_export_is_indented() {
        let payload = export_resume_json(&make_snapshot()).unwrap();
        assert!(payload.contents.contains("\n  \"personalInfo\""));
    }

    #[test]
    fn test_export_import_round_trip() {
        let data = make_snapshot();
        let payload = export_resume_json(&data).unwrap();
        let back = parse_resume_json(&payload.contents).unwrap();
        assert_eq!(data, back);
    }
}
