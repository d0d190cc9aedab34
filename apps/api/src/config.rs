use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Server-side Gemini key. Requests may bring their own instead.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Replaces the built-in keyword vocabulary when set.
    pub audit_vocabulary_path: Option<PathBuf>,
    /// Overrides health penalties and match weights when set.
    pub audit_rules_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            audit_vocabulary_path: optional_env("AUDIT_VOCABULARY_PATH").map(PathBuf::from),
            audit_rules_path: optional_env("AUDIT_RULES_PATH").map(PathBuf::from),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank are the same thing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    raw.unwrap_or("8080")
        .trim()
        .parse::<u16>()
        .context("PORT must be a valid port number")
}
