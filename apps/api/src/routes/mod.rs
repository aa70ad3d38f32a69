pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::layout::handlers as layout_handlers;
use crate::scoring::handlers as scoring_handlers;
use crate::state::AppState;
use crate::transfer::handlers as transfer_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Score API
        .route("/api/v1/score", post(scoring_handlers::handle_score))
        // Layout API
        .route("/api/v1/layout/plan", post(layout_handlers::handle_plan))
        .route(
            "/api/v1/layout/overflow",
            post(layout_handlers::handle_overflow),
        )
        // Snapshot transfer API
        .route(
            "/api/v1/resume/import",
            post(transfer_handlers::handle_import),
        )
        .route(
            "/api/v1/resume/export",
            post(transfer_handlers::handle_export),
        )
        .with_state(state)
}
