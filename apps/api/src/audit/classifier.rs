//! Keyword classifier — labels tokens against the reference vocabularies.

use serde::{Deserialize, Serialize};

use crate::audit::vocabulary::ReferenceVocabulary;

/// Classification tag for a token. Ordered by scoring priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordClass {
    HardSkill,
    SoftSkill,
    ActionVerb,
    Generic,
}

impl KeywordClass {
    /// Hard and soft skills are the only classes that count toward a job match.
    pub fn is_target_skill(self) -> bool {
        matches!(self, KeywordClass::HardSkill | KeywordClass::SoftSkill)
    }
}

/// A normalized term with its classification. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordToken {
    pub term: String,
    pub class: KeywordClass,
}

/// Classifies a single token. Precedence: HardSkill > SoftSkill > ActionVerb > Generic.
pub fn classify(token: &str, vocab: &ReferenceVocabulary) -> KeywordClass {
    let term = token.trim().to_lowercase();
    if vocab.is_hard_skill(&term) {
        KeywordClass::HardSkill
    } else if vocab.is_soft_skill(&term) {
        KeywordClass::SoftSkill
    } else if vocab.is_action_verb(&term) {
        KeywordClass::ActionVerb
    } else {
        KeywordClass::Generic
    }
}

/// Classifies a token sequence, preserving its order.
pub fn classify_all<I, S>(tokens: I, vocab: &ReferenceVocabulary) -> Vec<KeywordToken>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| {
            let term = t.as_ref().to_lowercase();
            let class = classify(&term, vocab);
            KeywordToken { term, class }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> ReferenceVocabulary {
        ReferenceVocabulary::from_lists(["python", "docker"], ["communication"], ["led"])
    }

    #[test]
    fn test_classify_each_class() {
        let v = vocab();
        assert_eq!(classify("python", &v), KeywordClass::HardSkill);
        assert_eq!(classify("communication", &v), KeywordClass::SoftSkill);
        assert_eq!(classify("led", &v), KeywordClass::ActionVerb);
        assert_eq!(classify("banana", &v), KeywordClass::Generic);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("PyThOn", &vocab()), KeywordClass::HardSkill);
        assert_eq!(classify(" Docker ", &vocab()), KeywordClass::HardSkill);
    }

    #[test]
    fn test_classify_total_over_odd_strings() {
        let v = vocab();
        assert_eq!(classify("", &v), KeywordClass::Generic);
        assert_eq!(classify("\u{fffd}\u{0}", &v), KeywordClass::Generic);
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let tokens = classify_all(["docker", "team", "communication"], &vocab());
        let terms: Vec<_> = tokens.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["docker", "team", "communication"]);
        assert_eq!(tokens[1].class, KeywordClass::Generic);
    }

    #[test]
    fn test_target_skill_classes() {
        assert!(KeywordClass::HardSkill.is_target_skill());
        assert!(KeywordClass::SoftSkill.is_target_skill());
        assert!(!KeywordClass::ActionVerb.is_target_skill());
        assert!(!KeywordClass::Generic.is_target_skill());
    }

    #[test]
    fn test_class_serializes_snake_case() {
        let json = serde_json::to_string(&KeywordClass::HardSkill).unwrap();
        assert_eq!(json, r#""hard_skill""#);
    }
}
