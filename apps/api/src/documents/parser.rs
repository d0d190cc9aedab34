//! Splits free-text resumes into the editor's draft fields.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::audit::health::{find_email, find_phone};

/// Draft fields recovered from a pasted or uploaded resume. Every field is
/// present; anything not found is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub summary: String,
    pub experience: String,
    /// Skills and education share one editor field.
    pub skills: String,
    pub references: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    Experience,
    Skills,
    Education,
    References,
}

fn link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+").expect("link regex is valid"))
}

/// A heading is a short line naming a section, e.g. "Work Experience:" or "SKILLS".
fn heading(line: &str) -> Option<Section> {
    let normalized = line.trim().trim_end_matches(':').trim().to_lowercase();
    if normalized.is_empty() || normalized.split_whitespace().count() > 4 {
        return None;
    }

    const HEADINGS: &[(&str, Section)] = &[
        ("summary", Section::Summary),
        ("profile", Section::Summary),
        ("objective", Section::Summary),
        ("experience", Section::Experience),
        ("work history", Section::Experience),
        ("employment", Section::Experience),
        ("skills", Section::Skills),
        ("education", Section::Education),
        ("references", Section::References),
    ];

    // "Skills & Education" is a skills heading; first match in line order wins.
    HEADINGS
        .iter()
        .filter_map(|(word, section)| normalized.find(word).map(|pos| (pos, *section)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, section)| section)
}

fn push_line(field: &mut String, line: &str) {
    if !field.is_empty() {
        field.push('\n');
    }
    field.push_str(line);
}

/// Parses resume text into draft fields.
///
/// Contact details come from the first match anywhere in the text. The name is the
/// first non-blank line unless that line is a title such as "Resume". Lines before
/// the first heading (minus name and contact details) form the summary.
pub fn parse_resume(text: &str) -> ResumeFields {
    let mut fields = ResumeFields {
        email: find_email(text).unwrap_or_default().to_string(),
        phone: find_phone(text).unwrap_or_default().to_string(),
        linkedin: link_regex()
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        ..ResumeFields::default()
    };

    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();

    if let Some(first) = lines.peek() {
        if !first.to_lowercase().contains("resume") && heading(first).is_none() {
            fields.name = first.to_string();
            lines.next();
        }
    }

    let mut current = Section::Summary;
    for line in lines {
        if let Some(section) = heading(line) {
            current = section;
            continue;
        }

        match current {
            Section::Summary => {
                let mut rest = line.to_string();
                for contact in [&fields.email, &fields.phone, &fields.linkedin] {
                    if !contact.is_empty() {
                        rest = rest.replace(contact.as_str(), "");
                    }
                }
                let rest = rest.trim_matches(|c: char| c.is_whitespace() || c == '|' || c == ',');
                if !rest.is_empty() {
                    push_line(&mut fields.summary, rest);
                }
            }
            Section::Experience => push_line(&mut fields.experience, line),
            Section::Skills | Section::Education => push_line(&mut fields.skills, line),
            Section::References => push_line(&mut fields.references, line),
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
Jane Doe
jane.doe@example.com | (555) 123-4567 | https://linkedin.com/in/janedoe
Backend engineer who enjoys building reliable data systems.

Work Experience
Acme Corp - Senior Engineer
Led migration to PostgreSQL, cutting costs 30%.

Skills
Python, SQL, Docker

Education
BSc Computer Science

References
Available on request
";

    #[test]
    fn test_parses_contact_details() {
        let fields = parse_resume(RESUME);
        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.email, "jane.doe@example.com");
        assert_eq!(fields.phone, "(555) 123-4567");
        assert_eq!(fields.linkedin, "https://linkedin.com/in/janedoe");
    }

    #[test]
    fn test_summary_excludes_name_and_contacts() {
        let fields = parse_resume(RESUME);
        assert_eq!(
            fields.summary,
            "Backend engineer who enjoys building reliable data systems."
        );
    }

    #[test]
    fn test_sections_split_on_headings() {
        let fields = parse_resume(RESUME);
        assert_eq!(
            fields.experience,
            "Acme Corp - Senior Engineer\nLed migration to PostgreSQL, cutting costs 30%."
        );
        assert_eq!(fields.skills, "Python, SQL, Docker\nBSc Computer Science");
        assert_eq!(fields.references, "Available on request");
    }

    #[test]
    fn test_section_word_inside_sentence_is_not_a_heading() {
        let text = "Sam Lee\nI have experience with teams and strong skills in sales.\nSkills:\nNegotiation";
        let fields = parse_resume(text);
        assert_eq!(
            fields.summary,
            "I have experience with teams and strong skills in sales."
        );
        assert_eq!(fields.skills, "Negotiation");
        assert!(fields.experience.is_empty());
    }

    #[test]
    fn test_resume_title_is_not_a_name() {
        let fields = parse_resume("My Resume\nPython developer");
        assert!(fields.name.is_empty());
        assert_eq!(fields.summary, "My Resume\nPython developer");
    }

    #[test]
    fn test_combined_skills_heading() {
        let fields = parse_resume("Ann\nSkills & Education\nExcel\nBA Economics");
        assert_eq!(fields.skills, "Excel\nBA Economics");
    }

    #[test]
    fn test_empty_input_gives_empty_fields() {
        assert_eq!(parse_resume(""), ResumeFields::default());
        assert_eq!(parse_resume("  \n \n"), ResumeFields::default());
    }

    #[test]
    fn test_heading_detection() {
        assert_eq!(heading("PROFESSIONAL EXPERIENCE:"), Some(Section::Experience));
        assert_eq!(heading("Technical Skills"), Some(Section::Skills));
        assert_eq!(heading("Professional Summary"), Some(Section::Summary));
        assert_eq!(heading("Skilled in many things across teams"), None);
        assert_eq!(heading("Python, SQL"), None);
    }
}
