use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output formats the writer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Txt,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Txt => "txt",
        }
    }
}

/// Keyword coverage of a resume against a job analysis.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// Percentage in [0, 100], rounded to one decimal place.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Everything the pipeline needs to run one tailoring job.
#[derive(Debug, Clone)]
pub struct TailorRequest {
    /// Inline job description text, or a path to a file containing it.
    pub job_description: String,
    pub resume_path: PathBuf,
    pub output_format: OutputFormat,
    /// Explicit destination; when `None` the writer picks a timestamped
    /// name under the configured output directory.
    pub output_path: Option<PathBuf>,
    pub with_comparison: bool,
    pub with_match_score: bool,
}

/// Result of a full tailoring run.
#[derive(Debug, Clone, Serialize)]
pub struct TailorOutcome {
    pub original_resume: String,
    pub tailored_resume: String,
    pub report: Option<MatchReport>,
    pub suggestions: Vec<String>,
    pub output_path: Option<PathBuf>,
    pub comparison_path: Option<PathBuf>,
    pub job_title: Option<String>,
    pub generated_at: DateTime<Utc>,
}
