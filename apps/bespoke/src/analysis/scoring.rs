//! Keyword coverage scoring. Matching is case-insensitive substring
//! containment over the whole resume text.

use crate::models::job::JobAnalysis;
use crate::models::tailoring::MatchReport;

/// Percentage of requirement items (hard skills, soft skills, keywords)
/// found in the resume, rounded to one decimal place. An analysis with no
/// requirement items scores 0.0.
pub fn calculate_match_score(resume_text: &str, analysis: &JobAnalysis) -> f64 {
    let items = analysis.requirement_items();
    if items.is_empty() {
        return 0.0;
    }

    let resume_lower = resume_text.to_lowercase();
    let matched = items
        .iter()
        .filter(|item| resume_lower.contains(&item.to_lowercase()))
        .count();

    let percentage = (matched as f64 / items.len() as f64) * 100.0;
    let score = (percentage * 10.0).round() / 10.0;

    tracing::info!(score, matched, total = items.len(), "match score computed");
    score
}

/// The score plus which keywords (across all categories) hit and missed.
pub fn match_report(resume_text: &str, analysis: &JobAnalysis) -> MatchReport {
    let resume_lower = resume_text.to_lowercase();
    let (matched, missing): (Vec<String>, Vec<String>) = analysis
        .all_keywords()
        .into_iter()
        .partition(|keyword| resume_lower.contains(&keyword.to_lowercase()));

    MatchReport {
        score: calculate_match_score(resume_text, analysis),
        matched,
        missing,
    }
}
