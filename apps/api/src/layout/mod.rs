// Pagination planner: density selection, section-to-page distribution,
// and overflow detection against measured render height.

pub mod density;
pub mod distribute;
pub mod handlers;
pub mod overflow;
pub mod plan;
pub mod sections;

// Re-export the public API consumed by other modules (state, main, tests).
pub use distribute::{SectionDistributor, UniformDistributor, WeightedDistributor};
