//! Overflow detection — the planner's half of its contract with the
//! renderer: "tell me the measured height, I tell you whether it fits."
//!
//! The renderer owns real layout, so the measured pixel height arrives
//! from outside; nothing here inspects the snapshot. Overflow is a normal
//! recoverable signal, not an error.
//!
//! `OverflowLatch` is held by the embedding UI, not by a handler — the
//! service keeps no state between requests.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// One page at 96 DPI, in pixels.
pub const PAGE_HEIGHT_PX: f64 = 1056.0;

/// Verdict for one measurement against a page budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverflowCheck {
    /// True iff the measured height strictly exceeds the budget. Landing
    /// exactly on the boundary counts as fitting.
    pub overflowing: bool,
    pub measured_height_px: f64,
    pub max_height_px: f64,
}

/// Checks a measured content height against `page_count` pages.
pub fn check_overflow(measured_height_px: f64, page_count: u8) -> OverflowCheck {
    let max_height_px = PAGE_HEIGHT_PX * page_count as f64;
    OverflowCheck {
        overflowing: measured_height_px > max_height_px,
        measured_height_px,
        max_height_px,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Auto-optimize latch
// ────────────────────────────────────────────────────────────────────────────

/// What the UI should do with one overflow observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverflowSignal {
    pub overflowing: bool,
    /// True only for the first overflow at the current page count —
    /// repeated notifications must not re-trigger a re-plan.
    pub replan_recommended: bool,
}

/// Debounce for overflow-triggered re-planning, held by the embedding UI
/// as transient state. The first overflow at a given page count recommends
/// a re-plan with a denser layout and latches; the latch resets whenever
/// the requested page count changes.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowLatch {
    page_count: u8,
    auto_optimized: bool,
}

impl OverflowLatch {
    pub fn new(page_count: u8) -> Self {
        Self {
            page_count,
            auto_optimized: false,
        }
    }

    pub fn page_count(&self) -> u8 {
        self.page_count
    }

    /// Feeds one measured height through the latch.
    pub fn observe(&mut self, measured_height_px: f64) -> OverflowSignal {
        let check = check_overflow(measured_height_px, self.page_count);
        let replan_recommended = check.overflowing && !self.auto_optimized;
        if replan_recommended {
            self.auto_optimized = true;
        }
        OverflowSignal {
            overflowing: check.overflowing,
            replan_recommended,
        }
    }

    /// Switches the requested page count, resetting the latch.
    pub fn set_page_count(&mut self, page_count: u8) {
        if self.page_count != page_count {
            self.page_count = page_count;
            self.auto_optimized = false;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
