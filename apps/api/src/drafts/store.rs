//! SQL for drafts, STAR stories and saved resume versions.

use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::documents::parser::ResumeFields;
use crate::drafts::models::{DraftRow, NewStory, SavedResumeRow, StarStoryRow};

/// Upserts the user's draft. Last write wins.
pub async fn save_draft(
    pool: &PgPool,
    user_id: Uuid,
    fields: &ResumeFields,
    role: &str,
) -> sqlx::Result<DraftRow> {
    let row = sqlx::query_as::<_, DraftRow>(
        r#"
        INSERT INTO drafts
            (user_id, name, email, phone, linkedin, summary, experience, skills, "references", role)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (user_id) DO UPDATE SET
            name = EXCLUDED.name,
            email = EXCLUDED.email,
            phone = EXCLUDED.phone,
            linkedin = EXCLUDED.linkedin,
            summary = EXCLUDED.summary,
            experience = EXCLUDED.experience,
            skills = EXCLUDED.skills,
            "references" = EXCLUDED."references",
            role = EXCLUDED.role,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&fields.name)
    .bind(&fields.email)
    .bind(&fields.phone)
    .bind(&fields.linkedin)
    .bind(&fields.summary)
    .bind(&fields.experience)
    .bind(&fields.skills)
    .bind(&fields.references)
    .bind(role)
    .fetch_one(pool)
    .await?;

    info!("Saved draft for user {user_id}");
    Ok(row)
}

pub async fn get_draft(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Option<DraftRow>> {
    sqlx::query_as::<_, DraftRow>("SELECT * FROM drafts WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Expects a story that already passed `NewStory::validated`.
pub async fn create_story(
    pool: &PgPool,
    user_id: Uuid,
    story: &NewStory,
) -> sqlx::Result<StarStoryRow> {
    let row = sqlx::query_as::<_, StarStoryRow>(
        r#"
        INSERT INTO star_stories
            (id, user_id, title, industry, situation, task, action, result, evidence_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&story.title)
    .bind(&story.industry)
    .bind(&story.situation)
    .bind(&story.task)
    .bind(&story.action)
    .bind(&story.result)
    .bind(&story.evidence_url)
    .fetch_one(pool)
    .await?;

    info!("Created story {} for user {user_id}", row.id);
    Ok(row)
}

pub async fn list_stories(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<StarStoryRow>> {
    sqlx::query_as::<_, StarStoryRow>(
        "SELECT * FROM star_stories WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Returns false when no story with that id belongs to the user.
pub async fn delete_story(pool: &PgPool, user_id: Uuid, story_id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM star_stories WHERE id = $1 AND user_id = $2")
        .bind(story_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn save_resume_version(
    pool: &PgPool,
    user_id: Uuid,
    version_name: &str,
    data: &Value,
) -> sqlx::Result<SavedResumeRow> {
    let row = sqlx::query_as::<_, SavedResumeRow>(
        r#"
        INSERT INTO saved_resumes (id, user_id, version_name, data)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(version_name)
    .bind(data)
    .fetch_one(pool)
    .await?;

    info!("Saved resume version '{version_name}' for user {user_id}");
    Ok(row)
}

pub async fn list_resume_versions(
    pool: &PgPool,
    user_id: Uuid,
) -> sqlx::Result<Vec<SavedResumeRow>> {
    sqlx::query_as::<_, SavedResumeRow>(
        "SELECT * FROM saved_resumes WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
