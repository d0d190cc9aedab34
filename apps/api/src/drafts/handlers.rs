use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::coach::career_paths::DEFAULT_PATH;
use crate::documents::parser::ResumeFields;
use crate::drafts::models::{
    snapshot, validate_version_name, DraftRow, NewStory, SavedResumeRow, StarStoryRow,
};
use crate::drafts::store;
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct SaveDraftRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub fields: ResumeFields,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateStoryRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub story: NewStory,
}

#[derive(Deserialize)]
pub struct SaveResumeRequest {
    pub user_id: Uuid,
    pub version_name: String,
    /// Snapshot these fields; when absent the stored draft is snapshotted.
    pub fields: Option<ResumeFields>,
    pub role: Option<String>,
}

fn role_or_default(role: Option<&str>) -> &str {
    role.map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_PATH)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/drafts?user_id=
pub async fn handle_get_draft(
    State(pool): State<PgPool>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DraftRow>, AppError> {
    let draft = store::get_draft(&pool, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No draft saved for user {}", params.user_id)))?;
    Ok(Json(draft))
}

/// PUT /api/v1/drafts
pub async fn handle_save_draft(
    State(pool): State<PgPool>,
    Json(req): Json<SaveDraftRequest>,
) -> Result<Json<DraftRow>, AppError> {
    let role = role_or_default(req.role.as_deref());
    let draft = store::save_draft(&pool, req.user_id, &req.fields, role).await?;
    Ok(Json(draft))
}

/// GET /api/v1/stories?user_id=
pub async fn handle_list_stories(
    State(pool): State<PgPool>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<StarStoryRow>>, AppError> {
    Ok(Json(store::list_stories(&pool, params.user_id).await?))
}

/// POST /api/v1/stories
pub async fn handle_create_story(
    State(pool): State<PgPool>,
    Json(req): Json<CreateStoryRequest>,
) -> Result<(StatusCode, Json<StarStoryRow>), AppError> {
    let story = req.story.validated().map_err(AppError::Validation)?;
    let row = store::create_story(&pool, req.user_id, &story).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/v1/stories/:id?user_id=
pub async fn handle_delete_story(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if !store::delete_story(&pool, params.user_id, id).await? {
        return Err(AppError::NotFound(format!("Story {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/resumes?user_id=
pub async fn handle_list_resumes(
    State(pool): State<PgPool>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<SavedResumeRow>>, AppError> {
    Ok(Json(store::list_resume_versions(&pool, params.user_id).await?))
}

/// POST /api/v1/resumes
pub async fn handle_save_resume(
    State(pool): State<PgPool>,
    Json(req): Json<SaveResumeRequest>,
) -> Result<(StatusCode, Json<SavedResumeRow>), AppError> {
    let version_name = validate_version_name(&req.version_name).map_err(AppError::Validation)?;

    let data = match req.fields {
        Some(fields) => snapshot(&fields, role_or_default(req.role.as_deref())),
        None => {
            let draft = store::get_draft(&pool, req.user_id).await?.ok_or_else(|| {
                AppError::NotFound("Nothing to save: no fields given and no draft stored".into())
            })?;
            snapshot(&draft.fields(), &draft.role)
        }
    };

    let row = store::save_resume_version(&pool, req.user_id, &version_name, &data).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
