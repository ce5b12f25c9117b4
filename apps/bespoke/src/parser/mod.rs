// Resume parsing: section segmentation, bullet extraction, contact scanning.
// Pure text routines — no I/O and no LLM calls here.

pub mod contact;
pub mod sections;

use crate::models::resume::ParsedResume;

/// Parses raw resume text into ordered sections plus contact details.
/// Never fails: worst case is a single fallback section and empty contact.
pub fn parse_resume(text: &str) -> ParsedResume {
    let contact = contact::extract_contact_info(text);
    let sections = sections::split_into_sections(text);
    tracing::debug!(sections = sections.len(), "parsed resume");
    ParsedResume {
        raw_text: text.to_string(),
        sections,
        contact,
    }
}

/// True when the string has at least one cased character and every cased
/// character is upper-case. Digits and punctuation are ignored.
pub(crate) fn is_upper(s: &str) -> bool {
    let mut has_cased = false;
    for ch in s.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// True when every cased run starts upper-case and continues lower-case,
/// with at least one cased character. Uncased characters start a new run,
/// so "John's" fails on the lone lower-case s after the apostrophe.
pub(crate) fn is_title(s: &str) -> bool {
    let mut has_cased = false;
    let mut prev_cased = false;
    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_cased {
                return false;
            }
            has_cased = true;
            prev_cased = true;
        } else if ch.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
        } else {
            prev_cased = false;
        }
    }
    has_cased
}

/// Title-cases a string run by run: the first cased character of each run
/// is upper-cased and the rest are lower-cased.
pub(crate) fn to_title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for ch in s.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && !prev_cased {
            out.extend(ch.to_uppercase());
        } else if cased {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        prev_cased = cased;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_upper_ignores_uncased_chars() {
        assert!(is_upper("WORK EXPERIENCE"));
        assert!(is_upper("AWS 2024"));
        assert!(!is_upper("Work Experience"));
        assert!(!is_upper("12345"));
        assert!(!is_upper(""));
    }

    #[test]
    fn test_is_title_requires_upper_run_starts() {
        assert!(is_title("John Doe"));
        assert!(is_title("Core Competencies"));
        assert!(!is_title("JOHN DOE"));
        assert!(!is_title("john doe"));
        assert!(!is_title("John deVries"));
        assert!(!is_title(""));
    }

    #[test]
    fn test_is_title_resets_after_uncased() {
        // The apostrophe starts a new run, so the following s must be upper.
        assert!(!is_title("John's Resume"));
        assert!(is_title("John'S Resume"));
    }

    #[test]
    fn test_to_title_lowercases_run_tails() {
        assert_eq!(to_title("WORK EXPERIENCE"), "Work Experience");
        assert_eq!(to_title("my custom part"), "My Custom Part");
        assert_eq!(to_title("ACADEMIC BACKGROUND"), "Academic Background");
    }

    #[test]
    fn test_parse_resume_returns_sections_and_contact() {
        let text = "JANE DOE\njane@example.com\n\nSKILLS\nrust and systems programming";
        let parsed = parse_resume(text);
        assert_eq!(parsed.raw_text, text);
        assert_eq!(parsed.contact.email.as_deref(), Some("jane@example.com"));
        assert!(parsed.sections.iter().any(|s| s.name == "Skills"));
    }
}
