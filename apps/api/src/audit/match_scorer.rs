//! Match scorer — overlap percentage between resume tokens and job "target skills".
//!
//! Target skills are job tokens classified HardSkill or SoftSkill. Generic words and
//! action verbs in a posting carry little signal and are not scored.

use std::collections::HashSet;

use tracing::debug;

use crate::audit::classifier::{KeywordClass, KeywordToken};
use crate::audit::rules::MatchWeights;

/// Scores `resume_tokens` against the target skills in `job_tokens`.
///
/// `round(100 * Σ weight(matched) / Σ weight(target))`, clamped to 0–100.
/// No target skills means nothing can be missing, so the score is 100.
pub fn score(
    resume_tokens: &HashSet<String>,
    job_tokens: &[KeywordToken],
    weights: &MatchWeights,
) -> u8 {
    let mut seen = HashSet::new();
    let targets: Vec<&KeywordToken> = job_tokens
        .iter()
        .filter(|t| t.class.is_target_skill())
        .filter(|t| seen.insert(t.term.to_lowercase()))
        .collect();

    if targets.is_empty() {
        return 100;
    }

    let matched: Vec<bool> = targets
        .iter()
        .map(|t| resume_tokens.contains(&t.term.to_lowercase()))
        .collect();

    let weight_of = |class: KeywordClass| -> f64 {
        let w = match class {
            KeywordClass::HardSkill => weights.hard_skill,
            KeywordClass::SoftSkill => weights.soft_skill,
            KeywordClass::ActionVerb | KeywordClass::Generic => 0.0,
        };
        if w.is_finite() {
            w.max(0.0)
        } else {
            0.0
        }
    };

    let total: f64 = targets.iter().map(|t| weight_of(t.class)).sum();
    let hit: f64 = targets
        .iter()
        .zip(&matched)
        .filter(|(_, m)| **m)
        .map(|(t, _)| weight_of(t.class))
        .sum();

    // Degenerate weights (all zero) fall back to an unweighted ratio.
    let ratio = if total > 0.0 {
        hit / total
    } else {
        matched.iter().filter(|&&m| m).count() as f64 / targets.len() as f64
    };

    let result = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;
    debug!(
        targets = targets.len(),
        matched = matched.iter().filter(|&&m| m).count(),
        score = result,
        "Computed job match score"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(term: &str, class: KeywordClass) -> KeywordToken {
        KeywordToken {
            term: term.to_string(),
            class,
        }
    }

    fn set(terms: &[&str]) -> HashSet<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_two_of_three_targets_scores_67() {
        let resume = set(&["python", "sql", "communication"]);
        let job = vec![
            token("python", KeywordClass::HardSkill),
            token("docker", KeywordClass::HardSkill),
            token("communication", KeywordClass::SoftSkill),
        ];
        assert_eq!(score(&resume, &job, &MatchWeights::default()), 67);
    }

    #[test]
    fn test_no_targets_scores_100() {
        let job = vec![
            token("team", KeywordClass::Generic),
            token("led", KeywordClass::ActionVerb),
        ];
        assert_eq!(score(&set(&[]), &job, &MatchWeights::default()), 100);
        assert_eq!(score(&set(&[]), &[], &MatchWeights::default()), 100);
    }

    #[test]
    fn test_empty_resume_with_targets_scores_zero() {
        let job = vec![token("rust", KeywordClass::HardSkill)];
        assert_eq!(score(&set(&[]), &job, &MatchWeights::default()), 0);
    }

    #[test]
    fn test_full_coverage_scores_100() {
        let job = vec![
            token("rust", KeywordClass::HardSkill),
            token("leadership", KeywordClass::SoftSkill),
        ];
        let resume = set(&["rust", "leadership", "extra"]);
        assert_eq!(score(&resume, &job, &MatchWeights::default()), 100);
    }

    #[test]
    fn test_non_target_classes_are_ignored() {
        let job = vec![
            token("rust", KeywordClass::HardSkill),
            token("managed", KeywordClass::ActionVerb),
            token("company", KeywordClass::Generic),
        ];
        assert_eq!(score(&set(&["rust"]), &job, &MatchWeights::default()), 100);
    }

    #[test]
    fn test_hard_skill_weighting() {
        let job = vec![
            token("rust", KeywordClass::HardSkill),
            token("empathy", KeywordClass::SoftSkill),
        ];
        let weights = MatchWeights {
            hard_skill: 0.7,
            soft_skill: 0.3,
        };
        assert_eq!(score(&set(&["rust"]), &job, &weights), 70);
        assert_eq!(score(&set(&["empathy"]), &job, &weights), 30);
    }

    #[test]
    fn test_zero_weights_fall_back_to_ratio() {
        let job = vec![
            token("rust", KeywordClass::HardSkill),
            token("sql", KeywordClass::HardSkill),
        ];
        let weights = MatchWeights {
            hard_skill: 0.0,
            soft_skill: 0.0,
        };
        assert_eq!(score(&set(&["rust"]), &job, &weights), 50);
    }

    #[test]
    fn test_duplicate_targets_count_once() {
        let job = vec![
            token("rust", KeywordClass::HardSkill),
            token("Rust", KeywordClass::HardSkill),
            token("sql", KeywordClass::HardSkill),
        ];
        assert_eq!(score(&set(&["rust"]), &job, &MatchWeights::default()), 50);
    }

    #[test]
    fn test_non_finite_weights_stay_in_range() {
        let job = vec![
            token("rust", KeywordClass::HardSkill),
            token("empathy", KeywordClass::SoftSkill),
        ];
        let weights = MatchWeights {
            hard_skill: f64::NAN,
            soft_skill: f64::INFINITY,
        };
        let s = score(&set(&["rust"]), &job, &weights);
        assert!(s <= 100);
    }
}
