// Prompt constants for the Coach module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::audit::MatchReport;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, MARKDOWN_ONLY_SYSTEM};

/// System prompt for resume critique.
pub fn coach_system() -> String {
    format!(
        "You are an encouraging but critical career coach who knows how Applicant \
         Tracking Systems filter resumes. {MARKDOWN_ONLY_SYSTEM} {GROUNDING_INSTRUCTION}"
    )
}

/// Coach prompt template. Replace `{role}`, `{resume}`, `{job}`, `{score}` and
/// `{missing}` before sending.
pub const COACH_PROMPT_TEMPLATE: &str = r#"Act as a career coach for someone targeting: {role}.

RESUME:
{resume}

JOB DESCRIPTION:
{job}

A keyword scan already scored this resume {score}/100 against the job.
Skills from the posting that the resume never mentions: {missing}.

Provide:
1. Match Score (0-100%), with one sentence explaining it.
2. The 3 most important missing keywords and where each belongs (skills section for
   tools, woven into a bullet for soft skills).
3. Rewrite ONE bullet point from the resume so it matches the job.

Format: Markdown. Be encouraging but critical."#;

/// Fills the coach template. The deterministic scan result anchors the model's answer.
pub fn build_coach_prompt(role: &str, resume: &str, job: &str, scan: &MatchReport) -> String {
    let missing = if scan.missing_keywords.is_empty() {
        "none".to_string()
    } else {
        scan.missing_keywords.join(", ")
    };
    let score = scan.match_score.to_string();

    fill_template(
        COACH_PROMPT_TEMPLATE,
        &[
            ("role", role),
            ("resume", resume),
            ("job", job),
            ("score", score.as_str()),
            ("missing", missing.as_str()),
        ],
    )
}

/// Single-pass `{key}` substitution. Inserted values are never rescanned, so user text
/// that happens to contain a placeholder is left as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        for (key, value) in values {
            let placeholder = format!("{{{key}}}");
            if tail.starts_with(&placeholder) {
                out.push_str(value);
                rest = &tail[placeholder.len()..];
                continue 'scan;
            }
        }
        out.push('{');
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(score: u8, missing: &[&str]) -> MatchReport {
        MatchReport {
            match_score: score,
            missing_keywords: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = build_coach_prompt(
            "Software Development & AI",
            "Built APIs in Python",
            "Need Python and Docker",
            &scan(50, &["docker"]),
        );
        assert!(prompt.contains("targeting: Software Development & AI"));
        assert!(prompt.contains("Built APIs in Python"));
        assert!(prompt.contains("Need Python and Docker"));
        assert!(prompt.contains("50/100"));
        assert!(prompt.contains("never mentions: docker."));
        for placeholder in ["{role}", "{resume}", "{job}", "{score}", "{missing}"] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }

    #[test]
    fn test_prompt_says_none_when_nothing_missing() {
        let prompt = build_coach_prompt("General / Undecided", "r", "j", &scan(100, &[]));
        assert!(prompt.contains("never mentions: none."));
    }

    #[test]
    fn test_user_text_with_braces_is_not_rewritten() {
        let prompt = build_coach_prompt("General", "I wrote {score} templates", "j", &scan(10, &[]));
        assert!(prompt.contains("I wrote {score} templates"));
    }

    #[test]
    fn test_job_text_with_resume_placeholder_is_kept() {
        let prompt = build_coach_prompt("General", "my resume", "Send {resume} to us", &scan(10, &[]));
        assert!(prompt.contains("Send {resume} to us"));
    }

    #[test]
    fn test_fill_template_leaves_unknown_braces() {
        assert_eq!(fill_template("{a} {b} {", &[("a", "x")]), "x {b} {");
    }

    #[test]
    fn test_system_prompt_includes_shared_fragments() {
        let system = coach_system();
        assert!(system.contains("Markdown"));
        assert!(system.contains("Do NOT invent"));
    }
}
