//! Output writing: tailored resumes and comparison documents, with
//! timestamped default filenames under a configured directory.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::errors::AppError;
use crate::models::tailoring::OutputFormat;
use crate::validate::sanitize_filename;

pub struct OutputWriter {
    output_directory: PathBuf,
}

impl OutputWriter {
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    /// Writes the tailored resume. With no explicit path the file lands in
    /// the output directory as
    /// `tailored_resume[_<job-title-slug>]_<YYYYmmdd_HHMMSS>.<ext>`.
    /// Markdown output gets a generated-by comment at the top.
    pub fn write_resume(
        &self,
        content: &str,
        format: OutputFormat,
        custom_path: Option<&Path>,
        job_title: Option<&str>,
    ) -> Result<PathBuf, AppError> {
        let output_path = match custom_path {
            Some(path) => path.to_path_buf(),
            None => self.default_output_path(format, job_title),
        };

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let full_content = match format {
            OutputFormat::Markdown => format!("{}\n\n{content}", metadata_header()),
            OutputFormat::Txt => content.to_string(),
        };
        std::fs::write(&output_path, full_content)?;

        tracing::info!(path = %output_path.display(), "tailored resume written");
        Ok(output_path)
    }

    /// Writes an original-vs-tailored comparison document as Markdown,
    /// named `comparison_<YYYYmmdd_HHMMSS>.md` unless a path is given.
    pub fn write_comparison(
        &self,
        original: &str,
        tailored: &str,
        custom_path: Option<&Path>,
    ) -> Result<PathBuf, AppError> {
        let output_path = match custom_path {
            Some(path) => path.to_path_buf(),
            None => {
                let timestamp = Local::now().format("%Y%m%d_%H%M%S");
                self.output_directory.join(format!("comparison_{timestamp}.md"))
            }
        };

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&output_path, format_comparison(original, tailored))?;
        tracing::info!(path = %output_path.display(), "comparison written");
        Ok(output_path)
    }

    fn default_output_path(&self, format: OutputFormat, job_title: Option<&str>) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let slug = job_title.map(sanitize_filename).filter(|s| !s.is_empty());
        let filename = match slug {
            Some(slug) => format!("tailored_resume_{slug}_{timestamp}.{}", format.extension()),
            None => format!("tailored_resume_{timestamp}.{}", format.extension()),
        };
        self.output_directory.join(filename)
    }
}

fn metadata_header() -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("<!-- Generated by bespoke on {timestamp} -->")
}

fn format_comparison(original: &str, tailored: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    [
        "# Resume Comparison",
        "",
        &format!("Generated: {timestamp}"),
        "",
        "---",
        "",
        "## Original Resume",
        "",
        original,
        "",
        "---",
        "",
        "## Tailored Resume",
        "",
        tailored,
        "",
    ]
    .join("\n")
}
