//! Tokenizer — turns free text into normalized keyword candidates.
//!
//! Text is lower-cased and whitespace-collapsed before anything else, so byte offsets
//! for unigrams and vocabulary phrases refer to the same normalized string and can be
//! merged into a single first-appearance order.

use std::collections::HashSet;

use crate::audit::vocabulary::ReferenceVocabulary;

/// Returns the distinct tokens of `text`. No ordering guarantee.
pub fn tokenize(text: &str, vocab: &ReferenceVocabulary) -> HashSet<String> {
    tokenize_ordered(text, vocab).into_iter().collect()
}

/// Returns the distinct tokens of `text` in order of first appearance.
///
/// Tokens are the normalized whitespace-separated words plus every vocabulary phrase
/// found on word boundaries. A phrase sorts at the offset of its first match. Any
/// token that is a spelling variant of a vocabulary term ("problem solving" for
/// "problem-solving") is reported under the vocabulary's spelling.
pub fn tokenize_ordered(text: &str, vocab: &ReferenceVocabulary) -> Vec<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut positioned: Vec<(usize, String)> = words_with_offsets(&normalized)
        .map(|(offset, word)| match vocab.canonical(&word) {
            Some(spelling) => (offset, spelling.to_string()),
            None => (offset, word),
        })
        .collect();

    // Same length as `normalized`, so offsets carry over.
    let keyed = normalized.replace('-', " ");
    for phrase in vocab.phrases() {
        if let Some(offset) = find_phrase(&keyed, phrase) {
            let spelling = vocab.canonical(phrase).unwrap_or(phrase.as_str());
            positioned.push((offset, spelling.to_string()));
        }
    }

    // Stable: a unigram and a phrase starting at the same offset keep insertion order.
    positioned.sort_by_key(|(offset, _)| *offset);

    let mut seen = HashSet::new();
    positioned
        .into_iter()
        .filter_map(|(_, token)| seen.insert(token.clone()).then_some(token))
        .collect()
}

/// Lower-cases and collapses every whitespace run to a single space.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Vocabulary lookup key: normalized, with hyphens read as spaces.
pub fn term_key(term: &str) -> String {
    normalize(&term.replace('-', " "))
}

/// True when `term` survives word normalization unchanged, i.e. it is letters/digits
/// with optional internal hyphens. Anything else must be matched as a phrase.
pub fn is_plain_word(term: &str) -> bool {
    let mut words = words_with_offsets(term);
    matches!((words.next(), words.next()), (Some((0, w)), None) if w == term)
}

/// Number of words in already-normalized text.
pub fn word_count(normalized: &str) -> usize {
    words_with_offsets(normalized).count()
}

/// Byte offset of the first match of `phrase` in `haystack` that sits on word
/// boundaries (no alphanumeric character directly before or after).
pub fn find_phrase(haystack: &str, phrase: &str) -> Option<usize> {
    find_all_phrases(haystack, phrase).next()
}

/// Byte offsets of every boundary-respecting match of `phrase` in `haystack`.
pub fn find_all_phrases<'a>(
    haystack: &'a str,
    phrase: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    haystack
        .match_indices(phrase)
        .map(|(offset, _)| offset)
        .filter(move |&offset| {
            let before = haystack[..offset].chars().next_back();
            let after = haystack[offset + phrase.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
}

/// Splits text into normalized words with their byte offsets.
///
/// Letters, digits and hyphens form words; apostrophes are dropped ("don't" -> "dont");
/// every other character separates words ("python/sql" -> "python", "sql").
/// Leading and trailing hyphens are trimmed, so only internal hyphens survive.
fn words_with_offsets(text: &str) -> impl Iterator<Item = (usize, String)> + '_ {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if ch.is_alphanumeric() || ch == '-' {
            if current.is_empty() {
                start = idx;
            }
            current.push(ch);
        } else if ch == '\'' || ch == '\u{2019}' {
            continue;
        } else if !current.is_empty() {
            words.push((start, std::mem::take(&mut current)));
        }
    }
    if !current.is_empty() {
        words.push((start, current));
    }

    words.into_iter().filter_map(|(offset, word)| {
        let leading = word.len() - word.trim_start_matches('-').len();
        let trimmed = word.trim_matches('-');
        (!trimmed.is_empty()).then(|| (offset + leading, trimmed.to_string()))
    })
}
