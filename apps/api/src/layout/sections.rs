//! Section units for pagination.
//!
//! A section is one independently renderable block of the résumé. Sections
//! carry a fixed display priority (the order below) and a content weight
//! used by the weighted distribution strategy. The header is always a
//! unit; every other section only becomes one when it has content.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

// ────────────────────────────────────────────────────────────────────────────
// Section identity
// ────────────────────────────────────────────────────────────────────────────

/// One distributable section. `Extra` indexes into `data.extra_sections`;
/// each extra section is its own unit so a long "Volunteering" block can
/// land on a different page than a short "Awards" block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "id", rename_all = "snake_case")]
pub enum SectionId {
    Header,
    Summary,
    Education,
    Skills,
    Projects,
    Certifications,
    Publications,
    Extra { index: usize },
}

impl SectionId {
    /// Fixed display priority. Lower renders first; extra sections keep
    /// their input order after publications.
    pub fn priority(&self) -> usize {
        match self {
            SectionId::Header => 0,
            SectionId::Summary => 1,
            SectionId::Education => 2,
            SectionId::Skills => 3,
            SectionId::Projects => 4,
            SectionId::Certifications => 5,
            SectionId::Publications => 6,
            SectionId::Extra { index } => 7 + index,
        }
    }

    /// Approximate rendered size of this section for the given snapshot.
    ///
    /// Entry counts dominate; the summary and project descriptions also
    /// contribute proportionally to their character length.
    pub fn weight(&self, data: &ResumeData) -> f64 {
        match self {
            SectionId::Header => 5.0,
            SectionId::Summary => data.summary.chars().count() as f64 / 100.0,
            SectionId::Education => data.education.len() as f64 * 10.0,
            SectionId::Skills => data.total_skill_count() as f64 * 2.0,
            SectionId::Projects => {
                let description_chars: f64 = data
                    .projects
                    .iter()
                    .map(|p| p.description.chars().count() as f64 / 50.0)
                    .sum();
                data.projects.len() as f64 * 10.0 + description_chars
            }
            SectionId::Certifications => data.certifications.len() as f64 * 8.0,
            SectionId::Publications => data.publications.len() as f64 * 10.0,
            SectionId::Extra { index } => data
                .extra_sections
                .get(*index)
                .map(|section| section.items.len() as f64 * 5.0)
                .unwrap_or(0.0),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Presence
// ────────────────────────────────────────────────────────────────────────────

/// The sections present in a snapshot, in priority order.
///
/// The header is unconditional. The summary counts as present only when it
/// has non-whitespace content; list-backed sections when they hold at
/// least one entry; each extra section when it exists in the snapshot.
pub fn present_sections(data: &ResumeData) -> Vec<SectionId> {
    let mut sections = vec![SectionId::Header];

    if !data.summary.trim().is_empty() {
        sections.push(SectionId::Summary);
    }
    if !data.education.is_empty() {
        sections.push(SectionId::Education);
    }
    if data.has_skills() {
        sections.push(SectionId::Skills);
    }
    if !data.projects.is_empty() {
        sections.push(SectionId::Projects);
    }
    if !data.certifications.is_empty() {
        sections.push(SectionId::Certifications);
    }
    if !data.publications.is_empty() {
        sections.push(SectionId::Publications);
    }
    for index in 0..data.extra_sections.len() {
        sections.push(SectionId::Extra { index });
    }

    sections
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        EducationEntry, ExtraItem, ExtraSection, ProjectEntry, PublicationEntry, ResumeData,
    };
    use std::collections::BTreeMap;

    fn make_full_snapshot() -> ResumeData {
        ResumeData {
            summary: "A short professional summary.".to_string(),
            education: vec![EducationEntry::default()],
            skills: BTreeMap::from([(
                "Technical Skills".to_string(),
                vec!["Rust".to_string(), "SQL".to_string()],
            )]),
            projects: vec![ProjectEntry {
                description: "x".repeat(100),
                ..ProjectEntry::default()
            }],
            certifications: vec![Default::default(), Default::default()],
            publications: vec![PublicationEntry::default()],
            extra_sections: vec![ExtraSection {
                title: "Volunteering".to_string(),
                items: vec![ExtraItem::default(), ExtraItem::default()],
            }],
            ..ResumeData::default()
        }
    }

    #[test]
    fn test_empty_snapshot_has_only_header() {
        assert_eq!(
            present_sections(&ResumeData::default()),
            vec![SectionId::Header]
        );
    }

    #[test]
    fn test_blank_summary_is_absent() {
        let data = ResumeData {
            summary: "   \n ".to_string(),
            ..ResumeData::default()
        };
        assert_eq!(present_sections(&data), vec![SectionId::Header]);
    }

    #[test]
    fn test_full_snapshot_lists_all_in_priority_order() {
        let sections = present_sections(&make_full_snapshot());
        assert_eq!(
            sections,
            vec![
                SectionId::Header,
                SectionId::Summary,
                SectionId::Education,
                SectionId::Skills,
                SectionId::Projects,
                SectionId::Certifications,
                SectionId::Publications,
                SectionId::Extra { index: 0 },
            ]
        );
        // Already sorted by priority, strictly increasing.
        let priorities: Vec<usize> = sections.iter().map(SectionId::priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort_unstable();
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn test_weights_track_content() {
        let data = make_full_snapshot();
        assert_eq!(SectionId::Header.weight(&data), 5.0);
        assert_eq!(SectionId::Education.weight(&data), 10.0);
        assert_eq!(SectionId::Skills.weight(&data), 4.0);
        // 1 project × 10 + 100 description chars / 50
        assert_eq!(SectionId::Projects.weight(&data), 12.0);
        assert_eq!(SectionId::Certifications.weight(&data), 16.0);
        assert_eq!(SectionId::Publications.weight(&data), 10.0);
        assert_eq!(SectionId::Extra { index: 0 }.weight(&data), 10.0);
    }

    #[test]
    fn test_extra_weight_out_of_bounds_is_zero() {
        let data = ResumeData::default();
        assert_eq!(SectionId::Extra { index: 3 }.weight(&data), 0.0);
    }
}
