use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::audit::AuditEngine;
use crate::coach::{CoachBackend, CoachState};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Handlers take only the slice they need through `FromRef`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Keyword vocabulary and scoring rules, loaded once at startup.
    pub audit: AuditEngine,
    pub coach: CoachState,
}

impl AppState {
    pub fn new(
        db: PgPool,
        config: Config,
        audit: AuditEngine,
        backend: Arc<dyn CoachBackend>,
    ) -> Self {
        let coach = CoachState {
            audit: audit.clone(),
            backend,
        };
        Self {
            db,
            config,
            audit,
            coach,
        }
    }
}
