use std::sync::Arc;

use crate::config::Config;
use crate::layout::distribute::SectionDistributor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable distribution strategy. Default: WeightedDistributor.
    /// Swap via the SECTION_DISTRIBUTION env var.
    pub distributor: Arc<dyn SectionDistributor>,
}
