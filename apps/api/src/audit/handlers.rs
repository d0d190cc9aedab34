//! Axum route handlers for the Audit API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::audit::classifier::{classify_all, KeywordClass, KeywordToken};
use crate::audit::health::HealthReport;
use crate::audit::tokenizer::tokenize_ordered;
use crate::audit::{AuditEngine, MatchReport, ScoreBand};

/// Default number of missing keywords returned when the caller gives no limit.
pub const DEFAULT_MISSING_LIMIT: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobMatchRequest {
    pub resume_text: String,
    pub job_text: String,
    /// Truncates `missing_keywords` for display. Defaults to 10.
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobMatchResponse {
    pub report: MatchReport,
    pub band: ScoreBand,
    /// Size of the full gap list before truncation.
    pub total_missing: usize,
}

#[derive(Debug, Deserialize)]
pub struct HealthAuditRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthAuditResponse {
    pub report: HealthReport,
    pub band: ScoreBand,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
    #[serde(default)]
    pub include_generic: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub tokens: Vec<KeywordToken>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/audit/job-match
///
/// Scores a resume against a job description and lists the skills it is missing.
/// Empty text is valid input and yields a degenerate but well-formed report.
pub async fn handle_job_match(
    State(engine): State<AuditEngine>,
    Json(request): Json<JobMatchRequest>,
) -> Json<JobMatchResponse> {
    let mut report = engine.job_match(&request.resume_text, &request.job_text);
    let total_missing = report.missing_keywords.len();
    report
        .missing_keywords
        .truncate(request.limit.unwrap_or(DEFAULT_MISSING_LIMIT));

    Json(JobMatchResponse {
        band: ScoreBand::from_score(report.match_score),
        report,
        total_missing,
    })
}

/// POST /api/v1/audit/health
///
/// Audits a resume on its own: contact details, phrasing, verbs, length, metrics.
pub async fn handle_health_audit(
    State(engine): State<AuditEngine>,
    Json(request): Json<HealthAuditRequest>,
) -> Json<HealthAuditResponse> {
    let report = engine.health(&request.resume_text);
    Json(HealthAuditResponse {
        band: ScoreBand::from_score(report.score),
        report,
    })
}

/// POST /api/v1/audit/classify
///
/// Previews how the engine tokenizes and labels a piece of text.
pub async fn handle_classify(
    State(engine): State<AuditEngine>,
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let vocab = engine.vocabulary();
    let tokens = classify_all(tokenize_ordered(&request.text, vocab), vocab)
        .into_iter()
        .filter(|t| request.include_generic || t.class != KeywordClass::Generic)
        .collect();
    Json(ClassifyResponse { tokens })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::post,
        Router,
    };
    use serde::de::DeserializeOwned;
    use serde_json::json;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/job-match", post(handle_job_match))
            .route("/health", post(handle_health_audit))
            .route("/classify", post(handle_classify))
            .with_state(AuditEngine::default())
    }

    async fn post_json<T: DeserializeOwned>(uri: &str, body: serde_json::Value) -> (StatusCode, T) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_job_match_endpoint_scores_and_bands() {
        let (status, body): (_, JobMatchResponse) = post_json(
            "/job-match",
            json!({
                "resume_text": "python sql communication",
                "job_text": "python docker communication"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.report.match_score, 67);
        assert_eq!(body.band, ScoreBand::Moderate);
        assert_eq!(body.report.missing_keywords, vec!["docker"]);
        assert_eq!(body.total_missing, 1);
    }

    #[tokio::test]
    async fn test_job_match_endpoint_applies_limit() {
        let (_, body): (_, JobMatchResponse) = post_json(
            "/job-match",
            json!({
                "resume_text": "",
                "job_text": "python sql docker kubernetes leadership",
                "limit": 2
            }),
        )
        .await;
        assert_eq!(body.report.missing_keywords, vec!["python", "sql"]);
        assert_eq!(body.total_missing, 5);
        assert_eq!(body.band, ScoreBand::Critical);
    }

    #[tokio::test]
    async fn test_health_endpoint_flags_empty_resume() {
        let (status, body): (_, HealthAuditResponse) =
            post_json("/health", json!({ "resume_text": "" })).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.report.issues.iter().any(|i| i.contains("incomplete")));
        assert_eq!(body.band, ScoreBand::Critical);
    }

    #[tokio::test]
    async fn test_classify_endpoint_hides_generic_by_default() {
        let (_, body): (_, ClassifyResponse) =
            post_json("/classify", json!({ "text": "Led the Python team" })).await;
        let classes: Vec<_> = body.tokens.iter().map(|t| (t.term.as_str(), t.class)).collect();
        assert_eq!(
            classes,
            vec![
                ("led", KeywordClass::ActionVerb),
                ("python", KeywordClass::HardSkill)
            ]
        );
    }

    #[tokio::test]
    async fn test_classify_endpoint_can_include_generic() {
        let (_, body): (_, ClassifyResponse) = post_json(
            "/classify",
            json!({ "text": "Led the team", "include_generic": true }),
        )
        .await;
        assert_eq!(body.tokens.len(), 3);
    }
}
