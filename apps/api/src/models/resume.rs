//! The ResumeData snapshot — the single value object every computation
//! consumes. Produced by the form UI (or imported from JSON), never mutated
//! in place; scoring and layout derive fresh results from a `&ResumeData`.
//!
//! Wire names are camelCase to match the JSON the editor exchanges
//! (`personalInfo`, `extraSections`, `inProgress`). Every collection
//! defaults to empty so any subset of the shape deserializes cleanly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub linkedin: String,
    pub location: String,
    pub email: String,
    pub mobile: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub location: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tech: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub name: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationEntry {
    pub title: String,
    pub details: String,
    pub technologies: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraItem {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraSection {
    pub title: String,
    pub items: Vec<ExtraItem>,
}

/// One snapshot of everything the user has entered.
///
/// `skills` maps a category name to its ordered skill list; duplicate
/// skills across categories are allowed (deduplication is the score
/// engine's concern). `extra_sections` is omitted from output when empty,
/// matching editors that never emit the key until a section is added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub skills: BTreeMap<String, Vec<String>>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub publications: Vec<PublicationEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_sections: Vec<ExtraSection>,
}

impl ResumeData {
    /// Total number of skills across all categories, duplicates included.
    pub fn total_skill_count(&self) -> usize {
        self.skills.values().map(|items| items.len()).sum()
    }

    /// True if at least one category holds at least one skill.
    pub fn has_skills(&self) -> bool {
        self.skills.values().any(|items| !items.is_empty())
    }
}
