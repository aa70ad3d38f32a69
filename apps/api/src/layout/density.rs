//! Rendering density — font size, line height, and margin scale for a
//! requested page budget.
//!
//! The base triple depends on the page count alone: one page renders
//! tight, four or more render roomy. On top of that, a content-density
//! factor shrinks the triple when the snapshot carries a lot of material,
//! so the same page budget absorbs more content before overflowing.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

// ────────────────────────────────────────────────────────────────────────────
// Density descriptor
// ────────────────────────────────────────────────────────────────────────────

/// The three knobs the renderer applies to every section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDensity {
    pub font_size_pt: f64,
    pub line_height: f64,
    pub margin_scale: f64,
}

/// Base density by page count, before any content adjustment.
pub fn base_density(page_count: u8) -> RenderDensity {
    match page_count {
        1 => RenderDensity {
            font_size_pt: 10.0,
            line_height: 1.3,
            margin_scale: 0.7,
        },
        2 => RenderDensity {
            font_size_pt: 10.5,
            line_height: 1.4,
            margin_scale: 0.85,
        },
        3 => RenderDensity {
            font_size_pt: 11.0,
            line_height: 1.5,
            margin_scale: 1.0,
        },
        _ => RenderDensity {
            font_size_pt: 11.5,
            line_height: 1.5,
            margin_scale: 1.2,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content-density factor
// ────────────────────────────────────────────────────────────────────────────

/// Approximate content size as a weighted sum over field lengths/counts.
/// Entry counts are scaled by a rough per-entry rendered size; extra
/// sections are deliberately excluded from the estimate.
pub fn content_volume(data: &ResumeData) -> usize {
    data.summary.chars().count()
        + data.education.len() * 100
        + data.total_skill_count() * 20
        + data.projects.len() * 200
        + data.certifications.len() * 100
        + data.publications.len() * 150
}

/// Shrink factor for a given content volume. 1.0 means no adjustment.
pub fn density_factor(volume: usize) -> f64 {
    if volume > 5000 {
        0.90
    } else if volume > 3000 {
        0.95
    } else if volume > 1500 {
        0.97
    } else {
        1.0
    }
}

/// The density the renderer should apply for (snapshot, page count).
///
/// When the factor bites, line height and margins tighten by fixed ratios
/// rather than by the factor itself — shrinking them in lockstep with the
/// font reads cramped.
pub fn select_density(data: &ResumeData, page_count: u8) -> RenderDensity {
    let base = base_density(page_count);
    let factor = density_factor(content_volume(data));

    if factor < 1.0 {
        RenderDensity {
            font_size_pt: base.font_size_pt * factor,
            line_height: base.line_height * 0.95,
            margin_scale: base.margin_scale * 0.9,
        }
    } else {
        base
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ProjectEntry, ResumeData};

    fn make_snapshot_with_projects(count: usize) -> ResumeData {
        ResumeData {
            projects: (0..count)
                .map(|i| ProjectEntry {
                    title: format!("Project {i}"),
                    ..ProjectEntry::default()
                })
                .collect(),
            ..ResumeData::default()
        }
    }

    #[test]
    fn test_single_page_is_tightest() {
        let data = ResumeData::default();
        let one = select_density(&data, 1);
        for pages in 2..=5 {
            let other = select_density(&data, pages);
            assert!(one.font_size_pt <= other.font_size_pt);
            assert!(one.line_height <= other.line_height);
            assert!(one.margin_scale <= other.margin_scale);
        }
    }

    #[test]
    fn test_base_density_constants() {
        assert_eq!(
            base_density(1),
            RenderDensity {
                font_size_pt: 10.0,
                line_height: 1.3,
                margin_scale: 0.7
            }
        );
        assert_eq!(base_density(2).font_size_pt, 10.5);
        assert_eq!(base_density(3).margin_scale, 1.0);
        // 4 and 5 pages share the roomiest triple.
        assert_eq!(base_density(4), base_density(5));
        assert_eq!(base_density(4).font_size_pt, 11.5);
    }

    #[test]
    fn test_density_factor_thresholds() {
        assert_eq!(density_factor(0), 1.0);
        assert_eq!(density_factor(1500), 1.0);
        assert_eq!(density_factor(1501), 0.97);
        assert_eq!(density_factor(3000), 0.97);
        assert_eq!(density_factor(3001), 0.95);
        assert_eq!(density_factor(5000), 0.95);
        assert_eq!(density_factor(5001), 0.90);
    }

    #[test]
    fn test_content_volume_weighted_sum() {
        let data = ResumeData {
            summary: "x".repeat(120),
            projects: make_snapshot_with_projects(2).projects,
            ..ResumeData::default()
        };
        // 120 summary chars + 2 projects × 200
        assert_eq!(content_volume(&data), 520);
    }

    #[test]
    fn test_heavy_content_shrinks_density() {
        // 10 projects → volume 2000 → factor 0.97
        let data = make_snapshot_with_projects(10);
        let density = select_density(&data, 2);
        let base = base_density(2);
        assert!(density.font_size_pt < base.font_size_pt);
        assert!((density.font_size_pt - 10.5 * 0.97).abs() < 1e-9);
        assert!((density.line_height - 1.4 * 0.95).abs() < 1e-9);
        assert!((density.margin_scale - 0.85 * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_light_content_keeps_base() {
        let data = make_snapshot_with_projects(1);
        assert_eq!(select_density(&data, 3), base_density(3));
    }
}
