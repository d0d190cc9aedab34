//! AI Coach — career-path advice plus model-written critique of a resume against a job.
//!
//! The model call sits behind `CoachBackend` so handlers and tests never depend on the
//! network. `AppState` carries an `Arc<dyn CoachBackend>`; the default is `GeminiCoach`.

pub mod career_paths;
pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRef;

use crate::audit::AuditEngine;
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};

/// Produces free-text coaching feedback for a fully built prompt.
#[async_trait]
pub trait CoachBackend: Send + Sync {
    async fn feedback(
        &self,
        prompt: &str,
        system: &str,
        api_key: Option<&str>,
    ) -> Result<String, AppError>;
}

/// Gemini-backed coach. The only production backend.
pub struct GeminiCoach(pub LlmClient);

#[async_trait]
impl CoachBackend for GeminiCoach {
    async fn feedback(
        &self,
        prompt: &str,
        system: &str,
        api_key: Option<&str>,
    ) -> Result<String, AppError> {
        self.0
            .call(prompt, system, api_key)
            .await
            .map_err(map_llm_error)
    }
}

/// Missing or rejected keys are the caller's problem; transient failures are
/// reported as a retryable outage.
fn map_llm_error(error: LlmError) -> AppError {
    match error {
        LlmError::MissingApiKey => AppError::Validation(
            "No Gemini API key configured; pass api_key with the request".to_string(),
        ),
        other if other.is_retryable() => AppError::AiUnavailable(other.to_string()),
        other => AppError::Validation(format!("Gemini rejected the request: {other}")),
    }
}

/// Everything the coach handlers need.
#[derive(Clone, FromRef)]
pub struct CoachState {
    pub audit: AuditEngine,
    pub backend: Arc<dyn CoachBackend>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_maps_to_validation() {
        assert!(matches!(
            map_llm_error(LlmError::MissingApiKey),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn test_upstream_failures_map_to_ai_unavailable() {
        let err = map_llm_error(LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        });
        match err {
            AppError::AiUnavailable(msg) => assert!(msg.contains("overloaded")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            map_llm_error(LlmError::EmptyContent),
            AppError::AiUnavailable(_)
        ));
    }

    #[test]
    fn test_client_errors_map_to_validation() {
        let err = map_llm_error(LlmError::Api {
            status: 400,
            message: "API key not valid".to_string(),
        });
        match err {
            AppError::Validation(msg) => assert!(msg.contains("API key not valid")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
