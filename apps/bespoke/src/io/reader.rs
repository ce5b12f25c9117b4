//! Document reading with an extension allow-list. Text files tolerate a
//! UTF-8 BOM and invalid byte sequences; PDFs go through text extraction.

use std::path::Path;

use crate::errors::AppError;
use crate::validate::{check_file_size, validate_file_path};

/// Reads a resume or job description file. Supported extensions are
/// `.txt`, `.md`, and `.pdf`; anything else is rejected before the file
/// is opened.
pub fn read_document(path: &Path, max_size_mb: u64) -> Result<String, AppError> {
    validate_file_path(path)?;
    check_file_size(path, max_size_mb)?;

    tracing::info!(path = %path.display(), "reading file");

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let content = match ext.as_str() {
        "pdf" => read_pdf(path)?,
        _ => read_text(path)?,
    };

    if content.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "file is empty or contains no readable text: {}",
            path.display()
        )));
    }

    tracing::debug!(chars = content.chars().count(), "file read");
    Ok(content)
}

fn read_text(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)?;
    // Tolerate a UTF-8 BOM and stray invalid sequences rather than failing
    // the whole read.
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(&bytes);
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

fn read_pdf(path: &Path) -> Result<String, AppError> {
    pdf_extract::extract_text(path)
        .map_err(|e| AppError::Validation(format!("failed to read PDF file: {e}")))
}
