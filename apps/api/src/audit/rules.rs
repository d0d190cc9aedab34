//! Tunable scoring rules for the audit engine.
//!
//! Every field has a default, so a rules file only needs the values it overrides.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// All tunables for both audit modes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditRules {
    pub match_weights: MatchWeights,
    pub health: HealthRules,
}

impl AuditRules {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Audit rules file is not valid JSON")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read audit rules file '{}'", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse audit rules file '{}'", path.display()))
    }
}

/// Relative weight of hard vs soft skills in the job-match score.
/// Equal weights reduce the score to a plain overlap percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    pub hard_skill: f64,
    pub soft_skill: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            hard_skill: 1.0,
            soft_skill: 1.0,
        }
    }
}

/// Penalties and thresholds for the resume health audit. Penalties are in score points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthRules {
    pub missing_email_penalty: u32,
    pub missing_phone_penalty: u32,
    pub weak_phrases: Vec<String>,
    pub weak_phrase_penalty: u32,
    /// Caps both the number of weak-phrase issues reported and their total penalty.
    pub max_weak_phrase_issues: usize,
    pub no_action_verbs_penalty: u32,
    /// How many distinct action verbs the strength line quotes.
    pub max_listed_action_verbs: usize,
    pub min_words: usize,
    pub short_penalty: u32,
    pub max_words: usize,
    pub long_penalty: u32,
    pub no_metrics_penalty: u32,
}

impl Default for HealthRules {
    fn default() -> Self {
        Self {
            missing_email_penalty: 10,
            missing_phone_penalty: 10,
            weak_phrases: [
                "responsible for",
                "duties included",
                "duties include",
                "worked on",
                "helped with",
                "assisted with",
                "in charge of",
                "tasked with",
                "involved in",
                "participated in",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            weak_phrase_penalty: 5,
            max_weak_phrase_issues: 4,
            no_action_verbs_penalty: 15,
            max_listed_action_verbs: 5,
            min_words: 150,
            short_penalty: 30,
            max_words: 1000,
            long_penalty: 10,
            no_metrics_penalty: 10,
        }
    }
}
