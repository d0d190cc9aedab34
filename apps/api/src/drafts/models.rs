use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::documents::parser::ResumeFields;

const MAX_VERSION_NAME_CHARS: usize = 100;

/// The editor's working copy, one row per user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DraftRow {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub summary: String,
    pub experience: String,
    pub skills: String,
    pub references: String,
    pub role: String,
    pub updated_at: DateTime<Utc>,
}

impl DraftRow {
    pub fn fields(&self) -> ResumeFields {
        ResumeFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            linkedin: self.linkedin.clone(),
            summary: self.summary.clone(),
            experience: self.experience.clone(),
            skills: self.skills.clone(),
            references: self.references.clone(),
        }
    }
}

/// A Situation / Task / Action / Result story the user can reuse across resumes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StarStoryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub industry: String,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
    pub evidence_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A named snapshot of a draft. `data` holds the serialized `ResumeFields` plus role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub version_name: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStory {
    pub title: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub situation: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub result: String,
    pub evidence_url: Option<String>,
}

impl NewStory {
    /// Trims every field and checks the story is worth storing.
    pub fn validated(mut self) -> Result<Self, String> {
        for field in [
            &mut self.title,
            &mut self.industry,
            &mut self.situation,
            &mut self.task,
            &mut self.action,
            &mut self.result,
        ] {
            *field = field.trim().to_string();
        }
        self.evidence_url = self
            .evidence_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        if self.title.is_empty() {
            return Err("Story title is required".to_string());
        }
        if self.action.is_empty() && self.result.is_empty() {
            return Err("A story needs at least an action or a result".to_string());
        }
        if let Some(url) = &self.evidence_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err("Evidence URL must start with http:// or https://".to_string());
            }
        }
        Ok(self)
    }
}

/// Trims a version name and enforces a length limit.
pub fn validate_version_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Version name is required".to_string());
    }
    if name.chars().count() > MAX_VERSION_NAME_CHARS {
        return Err(format!(
            "Version name must be at most {MAX_VERSION_NAME_CHARS} characters"
        ));
    }
    Ok(name.to_string())
}

/// JSON snapshot stored with a saved resume version.
pub fn snapshot(fields: &ResumeFields, role: &str) -> Value {
    let mut value = serde_json::to_value(fields).unwrap_or_else(|_| Value::Object(Default::default()));
    if let Value::Object(map) = &mut value {
        map.insert("role".to_string(), Value::String(role.to_string()));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story() -> NewStory {
        NewStory {
            title: "  Cut checkout latency ".to_string(),
            action: "Profiled and cached the pricing call".to_string(),
            result: "p95 dropped 40%".to_string(),
            ..NewStory::default()
        }
    }

    #[test]
    fn test_story_fields_are_trimmed() {
        let story = story().validated().unwrap();
        assert_eq!(story.title, "Cut checkout latency");
    }

    #[test]
    fn test_story_requires_title() {
        let err = NewStory { title: " ".into(), ..story() }.validated().unwrap_err();
        assert!(err.contains("title"));
    }

    #[test]
    fn test_story_requires_action_or_result() {
        let bare = NewStory {
            action: String::new(),
            result: "  ".into(),
            ..story()
        };
        assert!(bare.validated().is_err());
    }

    #[test]
    fn test_blank_evidence_url_is_dropped() {
        let story = NewStory { evidence_url: Some("  ".into()), ..story() }.validated().unwrap();
        assert!(story.evidence_url.is_none());
    }

    #[test]
    fn test_evidence_url_must_be_http() {
        let err = NewStory { evidence_url: Some("ftp://x".into()), ..story() }
            .validated()
            .unwrap_err();
        assert!(err.contains("Evidence URL"));
        assert!(NewStory { evidence_url: Some("https://github.com/me".into()), ..story() }
            .validated()
            .is_ok());
    }

    #[test]
    fn test_version_name_rules() {
        assert_eq!(validate_version_name("  Software V1 ").unwrap(), "Software V1");
        assert!(validate_version_name("   ").is_err());
        assert!(validate_version_name(&"x".repeat(101)).is_err());
        assert!(validate_version_name(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn test_snapshot_includes_role() {
        let fields = ResumeFields {
            name: "Jane".into(),
            ..ResumeFields::default()
        };
        let value = snapshot(&fields, "Project Management");
        assert_eq!(value["name"], "Jane");
        assert_eq!(value["role"], "Project Management");
        assert_eq!(value["skills"], "");
    }
}
