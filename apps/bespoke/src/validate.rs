//! Input guards shared by the CLI and the HTTP handlers. Each check
//! returns a user-facing message; nothing here touches file contents.

use std::path::Path;

use crate::errors::AppError;
use crate::models::tailoring::OutputFormat;

pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;
pub const MIN_RESUME_CHARS: usize = 100;

const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "pdf"];

pub fn validate_file_path(path: &Path) -> Result<(), AppError> {
    if !path.exists() {
        return Err(AppError::NotFound(format!(
            "file not found: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(AppError::Validation(format!(
            "not a regular file: {}",
            path.display()
        )));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::UnsupportedFormat(format!(
            "unsupported file type '.{ext}', expected one of: txt, md, pdf"
        )));
    }
    Ok(())
}

pub fn check_file_size(path: &Path, max_mb: u64) -> Result<(), AppError> {
    let size = std::fs::metadata(path)?.len();
    if size > max_mb * 1024 * 1024 {
        return Err(AppError::Validation(format!(
            "file exceeds the {max_mb} MB size limit: {}",
            path.display()
        )));
    }
    Ok(())
}

pub fn validate_job_description(text: &str) -> Result<(), AppError> {
    if text.trim().chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "job description is too short (minimum {MIN_JOB_DESCRIPTION_CHARS} characters)"
        )));
    }
    Ok(())
}

pub fn validate_resume_text(text: &str) -> Result<(), AppError> {
    if text.trim().chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(format!(
            "resume text is too short (minimum {MIN_RESUME_CHARS} characters)"
        )));
    }
    Ok(())
}

pub fn parse_output_format(value: &str) -> Result<OutputFormat, AppError> {
    match value.trim().to_lowercase().as_str() {
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "txt" | "text" => Ok(OutputFormat::Txt),
        other => Err(AppError::Validation(format!(
            "unknown output format '{other}', expected markdown or txt"
        ))),
    }
}

/// Reduces arbitrary text to a filename-safe slug: lowercase alphanumerics
/// plus hyphens, other character runs collapsed to single underscores,
/// capped at 50 characters.
pub fn sanitize_filename(text: &str) -> String {
    let mut slug = String::new();
    let mut last_was_sep = true;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if c == '-' {
            slug.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            slug.push('_');
            last_was_sep = true;
        }
        if slug.len() >= 50 {
            break;
        }
    }
    slug.trim_matches(|c| c == '_' || c == '-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_file_path_missing_file() {
        let err = validate_file_path(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_validate_file_path_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let err = validate_file_path(file.path()).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_validate_file_path_accepts_uppercase_extension() {
        let file = tempfile::Builder::new().suffix(".TXT").tempfile().unwrap();
        assert!(validate_file_path(file.path()).is_ok());
    }

    #[test]
    fn test_check_file_size_limit() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[0u8; 2048]).unwrap();
        file.flush().unwrap();
        assert!(check_file_size(file.path(), 1).is_ok());
        let err = check_file_size(file.path(), 0).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_job_description_minimum_length() {
        assert!(validate_job_description("too short").is_err());
        let long = "We are hiring a backend engineer to build services in Rust.";
        assert!(validate_job_description(long).is_ok());
    }

    #[test]
    fn test_resume_minimum_length() {
        assert!(validate_resume_text("Jane Doe").is_err());
        let long = "x".repeat(MIN_RESUME_CHARS);
        assert!(validate_resume_text(&long).is_ok());
    }

    #[test]
    fn test_parse_output_format_aliases() {
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("Markdown").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("TXT").unwrap(), OutputFormat::Txt);
        assert_eq!(parse_output_format("text").unwrap(), OutputFormat::Txt);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(
            sanitize_filename("Senior Engineer @ Acme, Inc."),
            "senior_engineer_acme_inc"
        );
        assert_eq!(sanitize_filename("Front-End Developer"), "front-end_developer");
        assert_eq!(sanitize_filename("___"), "");
        let long = sanitize_filename(&"word ".repeat(30));
        assert!(long.len() <= 50);
    }
}
