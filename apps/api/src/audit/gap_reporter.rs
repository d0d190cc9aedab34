//! Gap reporter — ranked job skills the resume does not mention.

use std::collections::HashSet;

use crate::audit::classifier::{KeywordClass, KeywordToken};

/// Job target skills absent from `resume_tokens`, HardSkill tier first, then SoftSkill.
///
/// Within a tier the order is the order of `job_tokens`, which callers build in
/// first-appearance order from the posting. Not alphabetical: what a posting mentions
/// first tends to matter most. Returns the full list; callers truncate for display.
pub fn missing_keywords(resume_tokens: &HashSet<String>, job_tokens: &[KeywordToken]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut hard = Vec::new();
    let mut soft = Vec::new();

    for token in job_tokens {
        let term = token.term.to_lowercase();
        if resume_tokens.contains(&term) || !seen.insert(term.clone()) {
            continue;
        }
        match token.class {
            KeywordClass::HardSkill => hard.push(term),
            KeywordClass::SoftSkill => soft.push(term),
            KeywordClass::ActionVerb | KeywordClass::Generic => {}
        }
    }

    hard.extend(soft);
    hard
}
