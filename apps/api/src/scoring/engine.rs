//! ATS score engine — a deterministic weighted-factor score over one
//! ResumeData snapshot. Total function: every field defaults to a safe
//! empty value, so there are no error paths and no state to invalidate;
//! callers simply recompute on every snapshot change.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

/// Factor weights for the overall score. Must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skills: f64,
    pub education: f64,
    pub projects: f64,
    pub certifications: f64,
    pub summary: f64,
    pub contact: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skills: 0.35,
            education: 0.15,
            projects: 0.20,
            certifications: 0.10,
            summary: 0.10,
            contact: 0.10,
        }
    }
}

/// Saturation targets: hitting the target caps the sub-score at 100.
const SKILL_TARGET: f64 = 15.0;
const PROJECT_TARGET: f64 = 3.0;
const CERTIFICATION_TARGET: f64 = 2.0;
const SUMMARY_TARGET_CHARS: f64 = 100.0;
const CONTACT_FIELD_POINTS: f64 = 20.0;

/// Per-factor sub-scores, each independently in [0, 100]. Display-only —
/// the weighted total is the number that gates the "finished" state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub education: f64,
    pub projects: f64,
    pub certifications: f64,
    pub summary: f64,
    pub contact_info: f64,
}

/// Display band for a total score: > 70 strong, > 40 moderate, else weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_total(total: u8) -> Self {
        if total > 70 {
            ScoreBand::Strong
        } else if total > 40 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}

/// The full scoring result for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScore {
    /// Weighted total, rounded to an integer in [0, 100].
    pub total: u8,
    pub band: ScoreBand,
    pub breakdown: ScoreBreakdown,
}

/// Number of distinct skill strings across all categories.
///
/// Exact string equality — "SQL" and "sql" are two skills, while the same
/// string listed under two categories counts once.
pub fn unique_skill_count(data: &ResumeData) -> usize {
    data.skills
        .values()
        .flatten()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .len()
}

/// Computes all six sub-scores for a snapshot.
pub fn compute_breakdown(data: &ResumeData) -> ScoreBreakdown {
    let skills = ((unique_skill_count(data) as f64 / SKILL_TARGET) * 100.0).min(100.0);
    let education = if data.education.is_empty() { 0.0 } else { 100.0 };
    let projects = ((data.projects.len() as f64 / PROJECT_TARGET) * 100.0).min(100.0);
    let certifications =
        ((data.certifications.len() as f64 / CERTIFICATION_TARGET) * 100.0).min(100.0);

    let summary_chars = data.summary.chars().count() as f64;
    let summary = if summary_chars > SUMMARY_TARGET_CHARS {
        100.0
    } else {
        (summary_chars / SUMMARY_TARGET_CHARS) * 100.0
    };

    let info = &data.personal_info;
    let contact_info = [
        &info.name,
        &info.email,
        &info.mobile,
        &info.location,
        &info.linkedin,
    ]
    .iter()
    .filter(|field| !field.is_empty())
    .count() as f64
        * CONTACT_FIELD_POINTS;

    ScoreBreakdown {
        skills,
        education,
        projects,
        certifications,
        summary,
        contact_info,
    }
}

/// Weighted total for a snapshot under explicit weights.
pub fn compute_ats_score_with(data: &ResumeData, weights: &ScoreWeights) -> AtsScore {
    let breakdown = compute_breakdown(data);
    let total = (breakdown.skills * weights.skills
        + breakdown.education * weights.education
        + breakdown.projects * weights.projects
        + breakdown.certifications * weights.certifications
        + breakdown.summary * weights.summary
        + breakdown.contact_info * weights.contact)
        .round()
        .clamp(0.0, 100.0) as u8;

    AtsScore {
        total,
        band: ScoreBand::from_total(total),
        breakdown,
    }
}

/// Weighted total under the default weights. The one entry point the
/// handlers use; recomputed from the snapshot alone on every call.
pub fn compute_ats_score(data: &ResumeData) -> AtsScore {
    compute_ats_score_with(data, &ScoreWeights::default())
}
