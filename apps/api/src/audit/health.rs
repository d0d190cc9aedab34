//! Health auditor — inspects a resume on its own for structural weaknesses.
//!
//! Score starts at 100 and only goes down. Strengths are reported for the user's
//! benefit but never add points: the score reflects risk.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::audit::classifier::{classify, KeywordClass};
use crate::audit::rules::HealthRules;
use crate::audit::tokenizer::{find_all_phrases, normalize, tokenize_ordered, word_count};
use crate::audit::vocabulary::ReferenceVocabulary;

const BASELINE_SCORE: u32 = 100;

/// Result of a resume-only audit. Created fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub score: u8,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
    })
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid phone regex")
    })
}

/// Percentages, currency amounts, or a small count followed by a word ("12 engineers",
/// "10,000 users"). Four-digit runs without separators (years) do not count.
fn metric_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\d+(?:\.\d+)?\s*%|[$€£]\s?\d|\b\d{1,3}(?:,\d{3})*(?:\.\d+)?[km]?\+?\s+[a-z]",
        )
        .expect("valid metric regex")
    })
}

pub fn has_email(text: &str) -> bool {
    email_regex().is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    phone_regex().is_match(text)
}

/// First email-shaped substring, if any.
pub fn find_email(text: &str) -> Option<&str> {
    email_regex().find(text).map(|m| m.as_str())
}

/// First phone-shaped substring, if any.
pub fn find_phone(text: &str) -> Option<&str> {
    phone_regex().find(text).map(|m| m.as_str())
}

/// True when the text quantifies something beyond contact numbers.
pub fn has_metrics(text: &str) -> bool {
    let without_email = email_regex().replace_all(text, " ");
    let without_contact = phone_regex().replace_all(&without_email, " ");
    metric_regex().is_match(&without_contact.to_lowercase())
}

/// Audits `text` against `rules`. Total over all strings and deterministic.
pub fn audit(text: &str, vocab: &ReferenceVocabulary, rules: &HealthRules) -> HealthReport {
    let normalized = normalize(text);
    let mut issues = Vec::new();
    let mut strengths = Vec::new();
    let mut penalty: u32 = 0;

    // Contact fields
    let email = has_email(text);
    let phone = has_phone(text);
    if !email {
        issues.push("No email address found; add one to your contact details".to_string());
        penalty = penalty.saturating_add(rules.missing_email_penalty);
    }
    if !phone {
        issues.push("No phone number found; add one to your contact details".to_string());
        penalty = penalty.saturating_add(rules.missing_phone_penalty);
    }
    if email && phone {
        strengths.push("Contact details include email and phone".to_string());
    }

    // Weak phrasing, one issue per occurrence in text order
    // Rules may carry any casing or spacing; match them in the same form as the text.
    let mut weak_hits: Vec<(usize, String)> = rules
        .weak_phrases
        .iter()
        .map(|p| normalize(p))
        .filter(|p| !p.is_empty())
        .flat_map(|phrase| {
            find_all_phrases(&normalized, &phrase)
                .map(|offset| (offset, phrase.clone()))
                .collect::<Vec<_>>()
        })
        .collect();
    weak_hits.sort();
    for (offset, phrase) in weak_hits.iter().take(rules.max_weak_phrase_issues) {
        let word = word_count(&normalized[..*offset]) + 1;
        issues.push(format!(
            "Weak phrase \"{phrase}\" (word {word}); lead with an action verb instead"
        ));
        penalty = penalty.saturating_add(rules.weak_phrase_penalty);
    }

    // Action verbs
    let verbs: Vec<String> = tokenize_ordered(text, vocab)
        .into_iter()
        .filter(|t| classify(t, vocab) == KeywordClass::ActionVerb)
        .collect();
    if verbs.is_empty() {
        issues.push(
            "No strong action verbs found; start each bullet with one such as \"led\"".to_string(),
        );
        penalty = penalty.saturating_add(rules.no_action_verbs_penalty);
    } else {
        let listed: Vec<&str> = verbs
            .iter()
            .take(rules.max_listed_action_verbs.max(1))
            .map(String::as_str)
            .collect();
        strengths.push(format!("Uses strong action verbs: {}", listed.join(", ")));
    }

    // Length
    let words = word_count(&normalized);
    if words < rules.min_words {
        issues.push(format!(
            "Resume appears incomplete ({words} words; aim for at least {})",
            rules.min_words
        ));
        penalty = penalty.saturating_add(rules.short_penalty);
    } else if words > rules.max_words {
        issues.push(format!(
            "Resume is long ({words} words); trim it below {}",
            rules.max_words
        ));
        penalty = penalty.saturating_add(rules.long_penalty);
    } else {
        strengths.push(format!("Healthy length ({words} words)"));
    }

    // Quantified achievements
    if has_metrics(text) {
        strengths.push("Includes quantified achievements".to_string());
    } else {
        issues.push(
            "No quantified achievements found; add numbers, percentages or amounts".to_string(),
        );
        penalty = penalty.saturating_add(rules.no_metrics_penalty);
    }

    let score = BASELINE_SCORE.saturating_sub(penalty) as u8;
    debug!(score, issues = issues.len(), words, "Computed resume health");

    HealthReport {
        score,
        issues,
        strengths,
    }
}
