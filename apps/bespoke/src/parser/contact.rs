//! Contact extraction — whole-text regex scans for email, phone, and URLs,
//! plus a name heuristic over the first few lines.

use std::sync::LazyLock;

use regex::Regex;

use super::{is_title, is_upper};
use crate::models::resume::ContactInfo;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid regex pattern")
});

/// Optional country code, then 3-3-4 digit groups with flexible separators.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("valid regex pattern")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#).expect("valid regex pattern")
});

static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").expect("valid regex pattern"));

/// Phone shape without the country code, used to reject lines in the name scan.
static PHONE_FRAGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex pattern"));

/// How many leading lines the name heuristic inspects.
const NAME_SCAN_LINES: usize = 5;

/// Scans the whole text for contact details. The first match wins per
/// field; fields with no match stay empty and are never an error.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let contact = ContactInfo {
        name: extract_name(text),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
        linkedin: LINKEDIN_RE
            .find(text)
            .map(|m| format!("https://{}", m.as_str())),
        website: URL_RE
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|url| !url.to_lowercase().contains("linkedin.com"))
            .map(str::to_string),
    };

    tracing::debug!(
        name = contact.name.is_some(),
        email = contact.email.is_some(),
        phone = contact.phone.is_some(),
        "extracted contact info"
    );
    contact
}

/// Looks for a candidate name in the first lines: short, digit-free,
/// title-case or compact all-caps, and neither an email nor a phone line.
/// Stops at the first line that qualifies.
fn extract_name(text: &str) -> Option<String> {
    for line in text.split('\n').take(NAME_SCAN_LINES) {
        let line = line.trim();
        if line.is_empty()
            || line.chars().count() >= 50
            || line.chars().any(|c| c.is_ascii_digit())
        {
            continue;
        }

        let compact_caps = is_upper(line) && line.split_whitespace().count() <= 4;
        if (is_title(line) || compact_caps)
            && !line.contains('@')
            && !PHONE_FRAGMENT_RE.is_match(line)
        {
            return Some(line.to_string());
        }
    }
    None
}
