//! Section segmentation — line-by-line classification of resume text into
//! named sections, plus bullet-point extraction within each section.

use std::sync::LazyLock;

use regex::Regex;

use super::{is_title, is_upper, to_title};
use crate::models::resume::ResumeSection;

/// Recognized section titles, matched case-insensitively against the start
/// of a stripped line. This fixed list is the detection contract: a line is
/// a header exactly when one of these matches or the length/case heuristic
/// below accepts it.
static SECTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(PROFESSIONAL\s+SUMMARY|SUMMARY|PROFILE|OBJECTIVE)",
        r"^(WORK\s+EXPERIENCE|EXPERIENCE|EMPLOYMENT\s+HISTORY|PROFESSIONAL\s+EXPERIENCE)",
        r"^(EDUCATION|ACADEMIC\s+BACKGROUND|ACADEMIC\s+QUALIFICATIONS)",
        r"^(SKILLS|TECHNICAL\s+SKILLS|CORE\s+COMPETENCIES|EXPERTISE)",
        r"^(CERTIFICATIONS|CERTIFICATES|PROFESSIONAL\s+CERTIFICATIONS)",
        r"^(PROJECTS|KEY\s+PROJECTS|NOTABLE\s+PROJECTS)",
        r"^(AWARDS|HONORS|ACHIEVEMENTS|ACCOMPLISHMENTS)",
        r"^(PUBLICATIONS|RESEARCH|PAPERS)",
        r"^(VOLUNTEER|VOLUNTEER\s+EXPERIENCE|COMMUNITY\s+SERVICE)",
        r"^(LANGUAGES|LANGUAGE\s+SKILLS)",
        r"^(INTERESTS|HOBBIES)",
        r"^(REFERENCES)",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).expect("valid regex pattern"))
    .collect()
});

/// Bullet line markers, tried in order; the first match wins so a line is
/// counted at most once.
static BULLET_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\s*[•●■▪▸►→-]\s+(.+)$",
        r"^\s*\*\s+(.+)$",
        r"^\s*\d+\.\s+(.+)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex pattern"))
    .collect()
});

/// Headers are short; anything at this length or beyond is content.
const MAX_HEADER_CHARS: usize = 50;

/// Splits resume text into ordered named sections.
///
/// Content lines accumulate in raw form under the open section; blank lines
/// are dropped from accumulation but do not close a section. A header whose
/// section gathered no content emits nothing. Content that appears before
/// the first header is kept as a leading "Preamble" section so no line is
/// ever dropped; text with no headers at all collapses to a single
/// "Full Resume" section holding the trimmed input.
pub fn split_into_sections(text: &str) -> Vec<ResumeSection> {
    let mut sections: Vec<ResumeSection> = Vec::new();
    let mut current_name: Option<String> = None;
    let mut current_content: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let stripped = line.trim();
        if let Some(name) = detect_header(stripped) {
            if !current_content.is_empty() {
                let prev = current_name
                    .take()
                    .unwrap_or_else(|| "Preamble".to_string());
                sections.push(build_section(prev, &current_content));
                current_content.clear();
            }
            current_name = Some(name);
        } else if !stripped.is_empty() {
            current_content.push(line);
        }
    }

    if let Some(name) = current_name {
        if !current_content.is_empty() {
            sections.push(build_section(name, &current_content));
        }
    }

    if sections.is_empty() {
        let trimmed = text.trim();
        return vec![ResumeSection {
            name: "Full Resume".to_string(),
            content: trimmed.to_string(),
            bullet_points: extract_bullet_points(trimmed),
        }];
    }

    sections
}

/// Classifies a stripped line as a section header and returns the section
/// name to open. Pattern hits are normalized onto the canonical vocabulary;
/// otherwise a short line in all-caps or title-case passes the fallback
/// heuristic and keeps its own text, colon-stripped and title-cased. The
/// heuristic knowingly accepts short non-header lines such as a bare
/// company name inside an experience entry.
fn detect_header(line: &str) -> Option<String> {
    if SECTION_PATTERNS.iter().any(|p| p.is_match(line)) {
        return Some(normalize_section_name(line));
    }

    if line.chars().count() < MAX_HEADER_CHARS && (is_upper(line) || is_title(line)) {
        let name = line.trim_end_matches(':').trim();
        if !name.is_empty() {
            return Some(to_title(name));
        }
    }

    None
}

/// Maps a header line onto the canonical section vocabulary via ordered
/// substring tests on the upper-cased, colon-stripped text.
fn normalize_section_name(header: &str) -> String {
    let upper = header.trim().trim_end_matches(':').to_uppercase();

    let name = if upper.contains("SUMMARY") || upper.contains("PROFILE") || upper.contains("OBJECTIVE")
    {
        "Professional Summary"
    } else if upper.contains("EXPERIENCE") || upper.contains("EMPLOYMENT") {
        "Work Experience"
    } else if upper.contains("EDUCATION") || upper.contains("ACADEMIC") {
        "Education"
    } else if upper.contains("SKILL") || upper.contains("COMPETENC") || upper.contains("EXPERTISE") {
        "Skills"
    } else if upper.contains("CERTIFICATION") || upper.contains("CERTIFICATE") {
        "Certifications"
    } else if upper.contains("PROJECT") {
        "Projects"
    } else if upper.contains("AWARD") || upper.contains("HONOR") || upper.contains("ACHIEVEMENT") {
        "Awards & Achievements"
    } else if upper.contains("PUBLICATION") || upper.contains("RESEARCH") {
        "Publications"
    } else if upper.contains("VOLUNTEER") || upper.contains("COMMUNITY") {
        "Volunteer Experience"
    } else if upper.contains("LANGUAGE") {
        "Languages"
    } else if upper.contains("INTEREST") || upper.contains("HOBBIES") {
        "Interests"
    } else if upper.contains("REFERENCE") {
        "References"
    } else {
        return to_title(&upper);
    };

    name.to_string()
}

fn build_section(name: String, content_lines: &[&str]) -> ResumeSection {
    let content = content_lines.join("\n");
    let bullet_points = extract_bullet_points(&content);
    ResumeSection {
        name,
        content,
        bullet_points,
    }
}

/// Pulls bullet lines out of text, stripping the leading marker and
/// trimming the remainder.
pub fn extract_bullet_points(text: &str) -> Vec<String> {
    let mut bullets = Vec::new();
    for line in text.split('\n') {
        for pattern in BULLET_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(line) {
                bullets.push(caps[1].trim().to_string());
                break;
            }
        }
    }
    bullets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_header_normalizes_to_canonical_name() {
        assert_eq!(detect_header("WORK EXPERIENCE").as_deref(), Some("Work Experience"));
        assert_eq!(detect_header("Core Competencies").as_deref(), Some("Skills"));
        assert_eq!(detect_header("EMPLOYMENT HISTORY").as_deref(), Some("Work Experience"));
        assert_eq!(detect_header("Academic Background").as_deref(), Some("Education"));
        assert_eq!(detect_header("HONORS").as_deref(), Some("Awards & Achievements"));
    }

    #[test]
    fn test_trailing_colon_is_stripped_from_headers() {
        assert_eq!(detect_header("SKILLS:").as_deref(), Some("Skills"));
        assert_eq!(detect_header("SIDE QUESTS:").as_deref(), Some("Side Quests"));
    }

    #[test]
    fn test_heuristic_header_keeps_own_text_title_cased() {
        assert_eq!(detect_header("LEADERSHIP ROLES").as_deref(), Some("Leadership Roles"));
        assert_eq!(detect_header("Speaking Engagements").as_deref(), Some("Speaking Engagements"));
    }

    #[test]
    fn test_long_or_lowercase_lines_are_not_headers() {
        assert_eq!(detect_header("worked on things"), None);
        assert_eq!(
            detect_header("A Heading Long Enough That It Cannot Possibly Be A Section Title Here"),
            None
        );
    }

    #[test]
    fn test_split_groups_content_under_headers() {
        let text = "SUMMARY\nseasoned engineer who has shipped large systems\n\nWORK EXPERIENCE\nbuilt the billing pipeline\nran the on-call rotation";
        let sections = split_into_sections(text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Professional Summary");
        assert_eq!(sections[0].content, "seasoned engineer who has shipped large systems");
        assert_eq!(sections[1].name, "Work Experience");
        assert_eq!(
            sections[1].content,
            "built the billing pipeline\nran the on-call rotation"
        );
    }

    #[test]
    fn test_adjacent_headers_emit_no_empty_section() {
        let text = "SUMMARY\nWORK EXPERIENCE\nbuilt the billing pipeline";
        let sections = split_into_sections(text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Work Experience");
    }

    #[test]
    fn test_content_before_first_header_becomes_preamble() {
        let text = "this opening line is deliberately too long to be mistaken for any header\nEDUCATION\nuniversity of somewhere, studied things";
        let sections = split_into_sections(text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Preamble");
        assert_eq!(
            sections[0].content,
            "this opening line is deliberately too long to be mistaken for any header"
        );
        assert_eq!(sections[1].name, "Education");
    }

    #[test]
    fn test_no_headers_yields_full_resume_fallback() {
        let text = "\n  just a plain block of lowercase text without any heading structure\nanother plain lowercase line that simply continues the paragraph\n";
        let sections = split_into_sections(text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Full Resume");
        assert_eq!(sections[0].content, text.trim());
    }

    #[test]
    fn test_reconstruction_keeps_every_content_line() {
        let text = "SUMMARY\nfirst line of the summary\nsecond line of the summary\n\nSKILLS\nrust, sql, and a bag of tricks";
        let sections = split_into_sections(text);

        let reconstructed: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.content.split('\n'))
            .collect();
        let expected: Vec<&str> = text
            .split('\n')
            .filter(|l| {
                let t = l.trim();
                !t.is_empty() && detect_header(t).is_none()
            })
            .collect();
        assert_eq!(reconstructed, expected);
    }

    #[test]
    fn test_resegmenting_reconstruction_is_stable() {
        let text = "SUMMARY\nfirst line of the summary\n\nWORK EXPERIENCE\nbuilt the billing pipeline\nran the on-call rotation";
        let first = split_into_sections(text);

        let mut rejoined = String::new();
        let headers = ["SUMMARY", "WORK EXPERIENCE"];
        for (section, header) in first.iter().zip(headers) {
            rejoined.push_str(header);
            rejoined.push('\n');
            rejoined.push_str(&section.content);
            rejoined.push('\n');
        }

        let second = split_into_sections(&rejoined);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bullet_markers_are_stripped() {
        assert_eq!(
            extract_bullet_points("- Led a team of 5 engineers"),
            vec!["Led a team of 5 engineers"]
        );
        assert_eq!(extract_bullet_points("• shipped the thing"), vec!["shipped the thing"]);
        assert_eq!(extract_bullet_points("* wrote the docs"), vec!["wrote the docs"]);
        assert_eq!(extract_bullet_points("3. closed the loop"), vec!["closed the loop"]);
    }

    #[test]
    fn test_bullet_lines_count_once_and_plain_lines_do_not() {
        let text = "- first\nplain prose line\n* second\n1. third";
        assert_eq!(extract_bullet_points(text), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_marker_without_trailing_space_is_not_a_bullet() {
        assert!(extract_bullet_points("-nospace").is_empty());
        assert!(extract_bullet_points("2.4 GHz band").is_empty());
    }

    #[test]
    fn test_sections_collect_their_bullets() {
        let text = "WORK EXPERIENCE\n- built the billing pipeline\n- ran the on-call rotation";
        let sections = split_into_sections(text);
        assert_eq!(
            sections[0].bullet_points,
            vec!["built the billing pipeline", "ran the on-call rotation"]
        );
    }

    #[test]
    fn test_short_titlecase_line_misfires_as_header() {
        // Known heuristic behavior: a short title-case company line opens a
        // section of its own instead of staying inside Work Experience.
        let text = "WORK EXPERIENCE\nAcme Corp\nbuilt the billing pipeline for four years";
        let sections = split_into_sections(text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Acme Corp");
        assert_eq!(sections[0].content, "built the billing pipeline for four years");
    }
}
