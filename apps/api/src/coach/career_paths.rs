//! Career paths and per-path coaching advice.
//!
//! Entries starting with `---` are group headers for the path picker, not selectable paths.

use serde::{Deserialize, Serialize};

/// Default path when the user has not picked one.
pub const DEFAULT_PATH: &str = "General / Undecided";

const CAREER_PATHS: &[&str] = &[
    DEFAULT_PATH,
    "--- ENTRY LEVEL & RETURNING ---",
    "First-Time Workforce (High School/Grad)",
    "Returning to Work (Parent/Caregiver)",
    "Career Pivot / Transition",
    "--- TECHNOLOGY & DATA ---",
    "Software Development & AI",
    "Cybersecurity & IT Support",
    "Data Analytics & Science",
    "--- HEALTHCARE ---",
    "Nursing & Patient Care",
    "Medical Administration & Billing",
    "Home Health & Personal Care",
    "--- TRADES & HANDS-ON ---",
    "Green Tech (Solar/Wind)",
    "Skilled Trades (Electrician/HVAC)",
    "Logistics & Supply Chain",
    "--- BUSINESS & SERVICE ---",
    "Digital Marketing & E-Commerce",
    "Project Management",
    "Customer Success & Sales",
    "Human Resources & Recruiting",
    "Finance & Accounting",
];

/// Coaching advice shown next to the editor for a chosen path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachAdvice {
    pub focus: String,
    pub tip: String,
    pub book_ref: String,
}

/// All paths, group headers included, in display order.
pub fn career_paths() -> &'static [&'static str] {
    CAREER_PATHS
}

pub fn is_group_header(path: &str) -> bool {
    path.starts_with("---")
}

/// Advice for `role`. Unknown roles get the general "results over duties" advice.
pub fn coach_advice(role: &str) -> CoachAdvice {
    let (focus, tip, book_ref) = match role.trim() {
        "First-Time Workforce (High School/Grad)" => (
            "Transferable Skills",
            "Without much work history, lead with attributes. Use examples from sports, \
             volunteering, or school projects to show you are reliable and eager to learn.",
            "Strategy: look for micro-internships and project work.",
        ),
        "Returning to Work (Parent/Caregiver)" => (
            "Gap Management",
            "Don't hide the gap. A functional resume works well here: highlight the \
             organizing, budgeting, and scheduling you did during your time away.",
            "The 2-Hour Job Search: networking is 3x more effective for you than applying online.",
        ),
        "Software Development & AI" => (
            "Portfolio & GitHub",
            "List your tech stack (Python, SQL, React) at the very top. Recruiters scan for \
             these keywords first.",
            "The 7 Second CV: if they don't see the language they need in 7 seconds, they move on.",
        ),
        "Green Tech (Solar/Wind)" => (
            "Certifications & Safety",
            "Highlight OSHA certifications and physically demanding work. This field values \
             reliability and safety above all.",
            "Trend 2026: the fastest-growing sector for entry-level work.",
        ),
        _ => (
            "Results over Duties",
            "Don't just say what you did. Say what you achieved: time saved, money saved, \
             customers made happy.",
            "Rule: every bullet point should carry a number (%, $, or a count).",
        ),
    };

    CoachAdvice {
        focus: focus.to_string(),
        tip: tip.to_string(),
        book_ref: book_ref.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_first() {
        assert_eq!(career_paths()[0], DEFAULT_PATH);
    }

    #[test]
    fn test_group_headers_detected() {
        let headers = career_paths().iter().filter(|p| is_group_header(p)).count();
        assert_eq!(headers, 5);
        assert!(!is_group_header("Project Management"));
    }

    #[test]
    fn test_known_role_has_specific_advice() {
        let advice = coach_advice("Software Development & AI");
        assert_eq!(advice.focus, "Portfolio & GitHub");
        assert!(advice.tip.contains("tech stack"));
    }

    #[test]
    fn test_unknown_role_falls_back_to_default() {
        let advice = coach_advice("Astronaut");
        assert_eq!(advice.focus, "Results over Duties");
        assert_eq!(coach_advice(""), advice);
    }

    #[test]
    fn test_role_lookup_ignores_surrounding_whitespace() {
        assert_eq!(coach_advice("  Green Tech (Solar/Wind) ").focus, "Certifications & Safety");
    }
}
