use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::layout::overflow::{check_overflow, OverflowCheck};
use crate::layout::plan::{build_plan, page_count_in_range, LayoutPlan, MAX_PAGE_COUNT, MIN_PAGE_COUNT};
use crate::models::resume::ResumeData;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub resume: ResumeData,
    pub page_count: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverflowRequest {
    pub page_count: u8,
    pub measured_height_px: f64,
}

fn validate_page_count(page_count: u8) -> Result<(), AppError> {
    if !page_count_in_range(page_count) {
        return Err(AppError::Validation(format!(
            "pageCount must be between {MIN_PAGE_COUNT} and {MAX_PAGE_COUNT}, got {page_count}"
        )));
    }
    Ok(())
}

/// POST /api/v1/layout/plan
pub async fn handle_plan(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<LayoutPlan>, AppError> {
    validate_page_count(req.page_count)?;
    Ok(Json(build_plan(
        &req.resume,
        req.page_count,
        state.distributor.as_ref(),
    )))
}

/// POST /api/v1/layout/overflow
///
/// The renderer reports the pixel height it actually painted; the response
/// says whether that fits the requested page budget. Overflow is a normal
/// signal — this endpoint only errors on an out-of-range page count.
pub async fn handle_overflow(
    Json(req): Json<OverflowRequest>,
) -> Result<Json<OverflowCheck>, AppError> {
    validate_page_count(req.page_count)?;
    Ok(Json(check_overflow(req.measured_height_px, req.page_count)))
}
