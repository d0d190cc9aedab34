// Resume audit engine.
// Implements: tokenization, keyword classification, job-match scoring, gap reporting,
// and resume health checks. Pure computation: no I/O, no shared mutable state.

pub mod classifier;
pub mod gap_reporter;
pub mod handlers;
pub mod health;
pub mod match_scorer;
pub mod rules;
pub mod tokenizer;
pub mod vocabulary;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::audit::classifier::classify_all;
use crate::audit::health::HealthReport;
use crate::audit::rules::AuditRules;
use crate::audit::tokenizer::{tokenize, tokenize_ordered};
use crate::audit::vocabulary::ReferenceVocabulary;

/// Result of a resume vs job-description audit. Created fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_score: u8,
    /// Job hard/soft skills the resume lacks, hard skills first, then by appearance.
    pub missing_keywords: Vec<String>,
}

/// Presentation band for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 0–40
    Critical,
    /// 41–75
    Moderate,
    /// 76–100
    Strong,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=40 => ScoreBand::Critical,
            41..=75 => ScoreBand::Moderate,
            _ => ScoreBand::Strong,
        }
    }
}

/// Audit engine bound to a vocabulary and rule set. Cheap to clone; shared across
/// requests without locking since nothing in it mutates.
#[derive(Debug, Clone)]
pub struct AuditEngine {
    vocabulary: Arc<ReferenceVocabulary>,
    rules: Arc<AuditRules>,
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new(ReferenceVocabulary::builtin().clone(), AuditRules::default())
    }
}

impl AuditEngine {
    pub fn new(vocabulary: ReferenceVocabulary, rules: AuditRules) -> Self {
        Self {
            vocabulary: Arc::new(vocabulary),
            rules: Arc::new(rules),
        }
    }

    /// Loads reference data from the given files, using the built-ins for any path
    /// that is `None`. A file that exists but fails to parse is an error.
    pub fn load(vocabulary_path: Option<&Path>, rules_path: Option<&Path>) -> Result<Self> {
        let vocabulary = match vocabulary_path {
            Some(path) => {
                info!("Loading keyword vocabulary from {}", path.display());
                ReferenceVocabulary::from_path(path)?
            }
            None => ReferenceVocabulary::builtin().clone(),
        };
        let rules = match rules_path {
            Some(path) => {
                info!("Loading audit rules from {}", path.display());
                AuditRules::from_path(path)?
            }
            None => AuditRules::default(),
        };
        info!(terms = vocabulary.len(), "Audit engine ready");
        Ok(Self::new(vocabulary, rules))
    }

    pub fn vocabulary(&self) -> &ReferenceVocabulary {
        &self.vocabulary
    }

    pub fn rules(&self) -> &AuditRules {
        &self.rules
    }

    /// Scores `resume_text` against the skills named in `job_text`.
    pub fn job_match(&self, resume_text: &str, job_text: &str) -> MatchReport {
        job_match_with(resume_text, job_text, &self.vocabulary, &self.rules)
    }

    /// Audits `resume_text` on its own.
    pub fn health(&self, resume_text: &str) -> HealthReport {
        health::audit(resume_text, &self.vocabulary, &self.rules.health)
    }
}

/// Job-match audit with the built-in vocabulary and default rules.
pub fn run_job_match_audit(resume_text: &str, job_text: &str) -> MatchReport {
    job_match_with(
        resume_text,
        job_text,
        ReferenceVocabulary::builtin(),
        &AuditRules::default(),
    )
}

/// Health audit with the built-in vocabulary and default rules.
pub fn run_health_audit(resume_text: &str) -> HealthReport {
    health::audit(
        resume_text,
        ReferenceVocabulary::builtin(),
        &AuditRules::default().health,
    )
}

fn job_match_with(
    resume_text: &str,
    job_text: &str,
    vocab: &ReferenceVocabulary,
    rules: &AuditRules,
) -> MatchReport {
    let resume_tokens = tokenize(resume_text, vocab);
    let job_tokens = classify_all(tokenize_ordered(job_text, vocab), vocab);

    let match_score = match_scorer::score(&resume_tokens, &job_tokens, &rules.match_weights);
    let missing_keywords = gap_reporter::missing_keywords(&resume_tokens, &job_tokens);

    debug!(
        resume_tokens = resume_tokens.len(),
        job_tokens = job_tokens.len(),
        match_score,
        missing = missing_keywords.len(),
        "Job match audit complete"
    );

    MatchReport {
        match_score,
        missing_keywords,
    }
}
