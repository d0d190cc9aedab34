//! Axum route handlers for the Coach API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::audit::{MatchReport, ScoreBand};
use crate::coach::career_paths::{
    career_paths, coach_advice, is_group_header, CoachAdvice, DEFAULT_PATH,
};
use crate::coach::prompts::{build_coach_prompt, coach_system};
use crate::coach::CoachState;
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct CareerPathsResponse {
    /// Display order, group headers included.
    pub paths: Vec<String>,
    /// Paths a user can actually pick.
    pub selectable: Vec<String>,
    pub default_path: String,
}

#[derive(Debug, Deserialize)]
pub struct AdviceQuery {
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_text: String,
    pub role: Option<String>,
    /// Per-request Gemini key; falls back to the server's configured key.
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub feedback: String,
    pub scan: MatchReport,
    pub band: ScoreBand,
    pub advice: CoachAdvice,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/coach/paths
pub async fn handle_career_paths() -> Json<CareerPathsResponse> {
    Json(CareerPathsResponse {
        paths: career_paths().iter().map(|p| p.to_string()).collect(),
        selectable: career_paths()
            .iter()
            .filter(|p| !is_group_header(p))
            .map(|p| p.to_string())
            .collect(),
        default_path: DEFAULT_PATH.to_string(),
    })
}

/// GET /api/v1/coach/advice?role=
pub async fn handle_coach_advice(Query(query): Query<AdviceQuery>) -> Json<CoachAdvice> {
    Json(coach_advice(query.role.as_deref().unwrap_or(DEFAULT_PATH)))
}

/// POST /api/v1/coach/analyze
///
/// Runs the keyword scan, then asks the model for a critique anchored on it.
/// Model failures surface as a retryable 503; the scan itself never fails.
pub async fn handle_analyze(
    State(state): State<CoachState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.resume_text.trim().is_empty() || request.job_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Both resume_text and job_text are required to compare".to_string(),
        ));
    }

    let role = request
        .role
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_PATH);

    let scan = state.audit.job_match(&request.resume_text, &request.job_text);
    let prompt = build_coach_prompt(role, &request.resume_text, &request.job_text, &scan);

    info!(role, match_score = scan.match_score, "Requesting coach feedback");
    let feedback = state
        .backend
        .feedback(&prompt, &coach_system(), request.api_key.as_deref())
        .await?;

    Ok(Json(AnalyzeResponse {
        feedback,
        band: ScoreBand::from_score(scan.match_score),
        scan,
        advice: coach_advice(role),
    }))
}
