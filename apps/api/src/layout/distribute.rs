//! Section-to-page distribution strategies.
//!
//! Two strategies have shipped over the project's history and both remain
//! valid: uniform contiguous chunking, and weighted greedy filling. The
//! `SectionDistributor` trait keeps them swappable behind `AppState`
//! without touching the handlers; config picks one at startup.
//!
//! Shared guarantees, whichever strategy is active:
//! - every present section is placed exactly once;
//! - concatenating the pages reproduces the priority order;
//! - exactly `page_count` pages come back, 0-based and contiguous
//!   (trailing pages may be empty — the renderer paints every page the
//!   user asked for);
//! - every page after the first repeats the name banner.

use serde::{Deserialize, Serialize};

use crate::layout::sections::{present_sections, SectionId};
use crate::models::resume::ResumeData;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// The sections assigned to one rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAssignment {
    /// 0-based page index.
    pub page: usize,
    pub sections: Vec<SectionId>,
    /// Pages after the first repeat a compact name banner above their
    /// sections so a printed page is attributable on its own.
    pub repeat_header_banner: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait
// ────────────────────────────────────────────────────────────────────────────

/// A page-distribution strategy. Implementations are pure: same snapshot
/// and page count, same assignment.
pub trait SectionDistributor: Send + Sync {
    /// Short name reported in plan responses ("weighted" | "uniform").
    fn name(&self) -> &'static str;

    /// Distributes the snapshot's present sections over `page_count`
    /// pages. `page_count` has already been range-checked by the caller.
    fn distribute(&self, data: &ResumeData, page_count: u8) -> Vec<PageAssignment>;
}

fn into_assignments(pages: Vec<Vec<SectionId>>) -> Vec<PageAssignment> {
    pages
        .into_iter()
        .enumerate()
        .map(|(page, sections)| PageAssignment {
            page,
            sections,
            repeat_header_banner: page > 0,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Weighted greedy strategy (default)
// ────────────────────────────────────────────────────────────────────────────

/// How far past the per-page weight target a page may fill before the
/// walk advances. Below 1.0 the first section of a page could never land;
/// values much above 1.5 collapse everything onto early pages.
const OVERFILL_TOLERANCE: f64 = 1.3;

/// Fills pages in priority order until the running weight would exceed
/// `OVERFILL_TOLERANCE ×` the per-page target, then moves on. The last
/// page absorbs whatever remains.
pub struct WeightedDistributor;

impl SectionDistributor for WeightedDistributor {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn distribute(&self, data: &ResumeData, page_count: u8) -> Vec<PageAssignment> {
        let mut sections = present_sections(data);
        // Priority order is the render order; the walk below assumes it.
        sections.sort_by_key(SectionId::priority);
        let total_weight: f64 = sections.iter().map(|s| s.weight(data)).sum();
        let target_per_page = total_weight / page_count as f64;

        let mut pages: Vec<Vec<SectionId>> = vec![Vec::new(); page_count as usize];
        let mut current_page = 0usize;
        let mut current_weight = 0.0f64;

        for section in sections {
            let weight = section.weight(data);
            if current_weight + weight > target_per_page * OVERFILL_TOLERANCE
                && current_page < page_count as usize - 1
            {
                current_page += 1;
                current_weight = 0.0;
            }
            pages[current_page].push(section);
            current_weight += weight;
        }

        into_assignments(pages)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Uniform chunking strategy
// ────────────────────────────────────────────────────────────────────────────

/// Splits the priority-ordered section list into contiguous chunks of
/// `ceil(section_count / page_count)`, one chunk per page.
pub struct UniformDistributor;

impl SectionDistributor for UniformDistributor {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn distribute(&self, data: &ResumeData, page_count: u8) -> Vec<PageAssignment> {
        let sections = present_sections(data);
        let chunk_size = sections.len().div_ceil(page_count as usize).max(1);

        let mut pages: Vec<Vec<SectionId>> = vec![Vec::new(); page_count as usize];
        for (i, section) in sections.into_iter().enumerate() {
            pages[i / chunk_size].push(section);
        }

        into_assignments(pages)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
