//! Job-description analysis and resume tailoring. The extractor turns a
//! posting into a [`JobAnalysis`](crate::models::job::JobAnalysis); the
//! tailor rewrites a resume against it; scoring measures keyword coverage.

mod extractor;
mod prompts;
mod scoring;
mod tailor;

pub use extractor::analyze_job_description;
pub use scoring::{calculate_match_score, match_report};
pub use tailor::{generate_suggestions, tailor_resume};
