use axum::Json;

use crate::models::resume::ResumeData;
use crate::scoring::engine::{compute_ats_score, AtsScore};

/// POST /api/v1/score
///
/// Body: a ResumeData snapshot. Scoring is total over any snapshot, so
/// this handler cannot fail.
pub async fn handle_score(Json(resume): Json<ResumeData>) -> Json<AtsScore> {
    Json(compute_ats_score(&resume))
}
