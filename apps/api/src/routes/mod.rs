pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::audit::handlers as audit;
use crate::coach::handlers as coach;
use crate::documents::handlers as documents;
use crate::drafts::handlers as drafts;
use crate::state::AppState;

/// Uploads above this are rejected before extraction.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Audit API
        .route("/api/v1/audit/job-match", post(audit::handle_job_match))
        .route("/api/v1/audit/health", post(audit::handle_health_audit))
        .route("/api/v1/audit/classify", post(audit::handle_classify))
        // Coach API
        .route("/api/v1/coach/paths", get(coach::handle_career_paths))
        .route("/api/v1/coach/advice", get(coach::handle_coach_advice))
        .route("/api/v1/coach/analyze", post(coach::handle_analyze))
        // Documents API
        .route(
            "/api/v1/documents/extract",
            post(documents::handle_extract).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/documents/parse", post(documents::handle_parse))
        // Drafts API
        .route(
            "/api/v1/drafts",
            get(drafts::handle_get_draft).put(drafts::handle_save_draft),
        )
        .route(
            "/api/v1/stories",
            get(drafts::handle_list_stories).post(drafts::handle_create_story),
        )
        .route("/api/v1/stories/:id", delete(drafts::handle_delete_story))
        .route(
            "/api/v1/resumes",
            get(drafts::handle_list_resumes).post(drafts::handle_save_resume),
        )
        .with_state(state)
}
