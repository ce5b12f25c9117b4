//! Multipart handlers for the analyze and tailor endpoints. Uploaded
//! resumes are spooled to a temp file that keeps its original extension so
//! the reader can route on it; the file is removed when the handler returns.

use std::io::Write;
use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

use crate::analysis::{analyze_job_description, match_report};
use crate::errors::AppError;
use crate::io::read_document;
use crate::models::tailoring::{OutputFormat, TailorRequest};
use crate::pipeline;
use crate::state::AppState;
use crate::validate::parse_output_format;

const KEYWORD_RESPONSE_LIMIT: usize = 20;

struct AnalyzeForm {
    job_description: String,
    resume: NamedTempFile,
}

struct TailorForm {
    job_description: String,
    resume: NamedTempFile,
    output_format: OutputFormat,
    with_score: bool,
}

/// POST /api/v1/analyze
/// Scores an uploaded resume against a job description without rewriting
/// anything. Multipart fields: `job_description` (text), `resume` (file).
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let form = read_analyze_form(multipart).await?;

    let resume_text = read_document(form.resume.path(), state.config.max_resume_size_mb)?;
    let analysis = analyze_job_description(state.generator.as_ref(), &form.job_description).await?;
    let report = match_report(&resume_text, &analysis);

    let mut suggestions = Vec::new();
    if !report.missing.is_empty() {
        let preview: Vec<&str> = report
            .missing
            .iter()
            .take(10)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider adding these relevant skills: {}",
            preview.join(", ")
        ));
    }
    if report.score < 50.0 {
        suggestions.push(
            "Your resume match is below 50%. Consider emphasizing relevant experience."
                .to_string(),
        );
    }
    if !resume_text.chars().any(|c| c.is_ascii_digit()) {
        suggestions.push("Add quantifiable metrics to demonstrate your impact.".to_string());
    }

    Ok(Json(json!({
        "match_score": report.score,
        "job_title": analysis.job_title,
        "company_name": analysis.company_name,
        "matched_keywords": cap(&report.matched),
        "missing_keywords": cap(&report.missing),
        "suggestions": suggestions,
        "hard_skills_required": analysis.hard_skills,
        "soft_skills_required": analysis.soft_skills,
    })))
}

/// POST /api/v1/tailor
/// Runs the full tailoring pipeline on an uploaded resume. Multipart
/// fields: `job_description` (text), `resume` (file), optional
/// `output_format` (default markdown) and `with_score` (default true).
pub async fn handle_tailor(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let form = read_tailor_form(multipart).await?;

    let request = TailorRequest {
        job_description: form.job_description,
        resume_path: form.resume.path().to_path_buf(),
        output_format: form.output_format,
        output_path: None,
        with_comparison: false,
        with_match_score: form.with_score,
    };

    let outcome = pipeline::run(state.generator.as_ref(), &state.config, &request).await?;

    Ok(Json(json!({
        "tailored_resume": outcome.tailored_resume,
        "match_score": outcome.report.as_ref().map(|r| r.score),
        "keywords_matched": outcome.report.as_ref().map(|r| cap(&r.matched)).unwrap_or_default(),
        "suggestions": outcome.suggestions,
        "output_path": outcome.output_path.as_ref().map(|p| p.display().to_string()).unwrap_or_default(),
    })))
}

async fn read_analyze_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut job_description = None;
    let mut resume = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("job_description") => {
                job_description = Some(read_text_field(field).await?);
            }
            Some("resume") => {
                resume = Some(spool_upload(field).await?);
            }
            _ => {}
        }
    }

    Ok(AnalyzeForm {
        job_description: job_description
            .ok_or_else(|| AppError::Validation("missing field: job_description".into()))?,
        resume: resume.ok_or_else(|| AppError::Validation("missing field: resume".into()))?,
    })
}

async fn read_tailor_form(mut multipart: Multipart) -> Result<TailorForm, AppError> {
    let mut job_description = None;
    let mut resume = None;
    let mut output_format = OutputFormat::Markdown;
    let mut with_score = true;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("job_description") => {
                job_description = Some(read_text_field(field).await?);
            }
            Some("resume") => {
                resume = Some(spool_upload(field).await?);
            }
            Some("output_format") => {
                output_format = parse_output_format(&read_text_field(field).await?)?;
            }
            Some("with_score") => {
                let value = read_text_field(field).await?;
                with_score = !matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no");
            }
            _ => {}
        }
    }

    Ok(TailorForm {
        job_description: job_description
            .ok_or_else(|| AppError::Validation("missing field: job_description".into()))?,
        resume: resume.ok_or_else(|| AppError::Validation("missing field: resume".into()))?,
        output_format,
        with_score,
    })
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("could not read field: {e}")))
}

/// Writes an uploaded file to a temp file, preserving the upload's
/// extension so the reader knows how to parse it.
async fn spool_upload(field: axum::extract::multipart::Field<'_>) -> Result<NamedTempFile, AppError> {
    let suffix = field
        .file_name()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_else(|| ".txt".to_string());

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;

    let mut file = tempfile::Builder::new().suffix(&suffix).tempfile()?;
    file.write_all(&bytes)?;
    file.flush()?;
    Ok(file)
}

fn cap(items: &[String]) -> Vec<String> {
    items
        .iter()
        .take(KEYWORD_RESPONSE_LIMIT)
        .cloned()
        .collect()
}
