use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::scoring::engine::{compute_ats_score, AtsScore};
use crate::transfer::export::{export_resume_json, ExportPayload};
use crate::transfer::import::parse_resume_json;

#[derive(Deserialize)]
pub struct ImportRequest {
    /// Raw text as uploaded or pasted — parsed here, not by the UI.
    pub raw: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub resume: ResumeData,
    /// Score recomputed for the imported snapshot, so the UI can refresh
    /// its display in the same round trip.
    pub score: AtsScore,
}

/// POST /api/v1/resume/import
pub async fn handle_import(Json(req): Json<ImportRequest>) -> Result<Json<ImportResponse>, AppError> {
    let resume = parse_resume_json(&req.raw)?;
    let score = compute_ats_score(&resume);
    Ok(Json(ImportResponse { resume, score }))
}

/// POST /api/v1/resume/export
pub async fn handle_export(
    Json(resume): Json<ResumeData>,
) -> Result<Json<ExportPayload>, AppError> {
    Ok(Json(export_resume_json(&resume)?))
}
