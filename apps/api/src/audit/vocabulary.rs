//! Reference vocabularies — the curated hard-skill, soft-skill, and action-verb term lists.
//!
//! The built-in lists live in `vocabulary.json` next to this file and are embedded at
//! compile time. Deployments can point `AUDIT_VOCABULARY_PATH` at their own file to
//! extend or replace them without a rebuild.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::audit::tokenizer::{is_plain_word, normalize, term_key};

const BUILTIN_VOCABULARY: &str = include_str!("vocabulary.json");

/// On-disk shape of a vocabulary file. Missing lists are treated as empty.
#[derive(Debug, Default, Deserialize)]
struct VocabularyFile {
    #[serde(default)]
    hard_skills: Vec<String>,
    #[serde(default)]
    soft_skills: Vec<String>,
    #[serde(default)]
    action_verbs: Vec<String>,
}

/// Three disjoint sets of lowercase terms. Read-only once built.
///
/// Sets are keyed by [`term_key`], so spelling variants such as "problem-solving" and
/// "problem solving" are one term. The first spelling listed is the one reported.
#[derive(Debug, Clone, Default)]
pub struct ReferenceVocabulary {
    hard_skills: HashSet<String>,
    soft_skills: HashSet<String>,
    action_verbs: HashSet<String>,
    /// Key -> reported spelling.
    spellings: HashMap<String, String>,
    /// Keys that are not a single plain word ("machine learning", "c++", "ci/cd").
    /// The tokenizer scans for these verbatim.
    phrases: Vec<String>,
}

impl ReferenceVocabulary {
    /// Builds a vocabulary from raw term lists.
    ///
    /// Terms are lower-cased and whitespace-collapsed; blanks are dropped. A term listed
    /// in more than one set is kept only in the highest-precedence one (hard > soft > verb).
    pub fn from_lists<I, J, K, S>(hard_skills: I, soft_skills: J, action_verbs: K) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spellings = HashMap::new();

        let mut hard = HashSet::new();
        for (key, spelling) in canonical_terms(hard_skills) {
            spellings.entry(key.clone()).or_insert(spelling);
            hard.insert(key);
        }

        let mut soft = HashSet::new();
        for (key, spelling) in canonical_terms(soft_skills) {
            if hard.contains(&key) {
                warn!(term = %spelling, "Term listed as both hard and soft skill; keeping hard skill");
                continue;
            }
            spellings.entry(key.clone()).or_insert(spelling);
            soft.insert(key);
        }

        let mut verbs = HashSet::new();
        for (key, spelling) in canonical_terms(action_verbs) {
            if hard.contains(&key) || soft.contains(&key) {
                warn!(term = %spelling, "Action verb also listed as a skill; keeping skill");
                continue;
            }
            spellings.entry(key.clone()).or_insert(spelling);
            verbs.insert(key);
        }

        let mut phrases: Vec<String> = hard
            .iter()
            .chain(soft.iter())
            .chain(verbs.iter())
            .filter(|t| !is_plain_word(t))
            .cloned()
            .collect();
        // Longest first so output is stable regardless of hash order.
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self {
            hard_skills: hard,
            soft_skills: soft,
            action_verbs: verbs,
            spellings,
            phrases,
        }
    }

    /// Parses a vocabulary from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: VocabularyFile =
            serde_json::from_str(json).context("Vocabulary file is not valid JSON")?;
        Ok(Self::from_lists(
            file.hard_skills,
            file.soft_skills,
            file.action_verbs,
        ))
    }

    /// Loads a vocabulary from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file '{}'", path.display()))?;
        let vocabulary = Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse vocabulary file '{}'", path.display()))?;
        info!(
            path = %path.display(),
            hard = vocabulary.hard_skills.len(),
            soft = vocabulary.soft_skills.len(),
            verbs = vocabulary.action_verbs.len(),
            "Loaded reference vocabulary"
        );
        Ok(vocabulary)
    }

    /// The embedded default vocabulary, parsed once per process.
    pub fn builtin() -> &'static ReferenceVocabulary {
        static BUILTIN: OnceLock<ReferenceVocabulary> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_json_str(BUILTIN_VOCABULARY).unwrap_or_else(|e| {
                // The embedded file is covered by tests; this only fires on a bad edit.
                warn!("Built-in vocabulary failed to parse: {e:#}");
                Self::default()
            })
        })
    }

    pub fn is_hard_skill(&self, term: &str) -> bool {
        self.hard_skills.contains(&term_key(term))
    }

    pub fn is_soft_skill(&self, term: &str) -> bool {
        self.soft_skills.contains(&term_key(term))
    }

    pub fn is_action_verb(&self, term: &str) -> bool {
        self.action_verbs.contains(&term_key(term))
    }

    /// The reported spelling of `term` if any spelling of it is in the vocabulary.
    pub fn canonical(&self, term: &str) -> Option<&str> {
        self.spellings.get(&term_key(term)).map(String::as_str)
    }

    /// Multi-word or punctuated term keys, longest first.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.hard_skills.len() + self.soft_skills.len() + self.action_verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Yields `(key, spelling)` for every non-blank term.
fn canonical_terms<I, S>(terms: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|t| (term_key(t.as_ref()), normalize(t.as_ref())))
        .filter(|(key, _)| !key.is_empty())
}
