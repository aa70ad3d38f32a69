//! Layout plan assembly — the full answer the renderer needs for one
//! (snapshot, page count) pair: density plus page assignment. Recomputed
//! on every change, never stored.

use serde::{Deserialize, Serialize};

use crate::layout::density::{select_density, RenderDensity};
use crate::layout::distribute::{PageAssignment, SectionDistributor};
use crate::models::resume::ResumeData;

/// Requested page counts are 1 through 5 inclusive.
pub const MIN_PAGE_COUNT: u8 = 1;
pub const MAX_PAGE_COUNT: u8 = 5;

pub fn page_count_in_range(page_count: u8) -> bool {
    (MIN_PAGE_COUNT..=MAX_PAGE_COUNT).contains(&page_count)
}

/// The rendering instructions for one snapshot at one page budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    pub page_count: u8,
    pub density: RenderDensity,
    pub pages: Vec<PageAssignment>,
    /// Which distribution strategy produced `pages`.
    pub strategy: String,
}

/// Builds the plan for (snapshot, page count) with the given strategy.
///
/// For a single page the assignment degenerates to one page holding every
/// present section — the same flat order the single-page renderer uses.
pub fn build_plan(
    data: &ResumeData,
    page_count: u8,
    distributor: &dyn SectionDistributor,
) -> LayoutPlan {
    LayoutPlan {
        page_count,
        density: select_density(data, page_count),
        pages: distributor.distribute(data, page_count),
        strategy: distributor.name().to_string(),
    }
}
