//! Job-description analysis: one low-temperature generation call that
//! returns structured JSON.

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::job::JobAnalysis;
use crate::validate::validate_job_description;

use super::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};

const EXTRACTION_TEMPERATURE: f32 = 0.3;
const EXTRACTION_MAX_TOKENS: u32 = 2000;

pub async fn analyze_job_description(
    generator: &dyn TextGenerator,
    job_description: &str,
) -> Result<JobAnalysis, AppError> {
    validate_job_description(job_description)?;

    tracing::info!(
        chars = job_description.chars().count(),
        "analyzing job description"
    );

    let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{job_description}", job_description);
    let response = generator
        .generate(
            EXTRACTION_SYSTEM,
            &prompt,
            EXTRACTION_TEMPERATURE,
            EXTRACTION_MAX_TOKENS,
        )
        .await?;

    let analysis: JobAnalysis = serde_json::from_str(strip_json_fences(&response))
        .map_err(crate::llm_client::LlmError::Parse)?;

    tracing::info!(
        hard_skills = analysis.hard_skills.len(),
        soft_skills = analysis.soft_skills.len(),
        responsibilities = analysis.key_responsibilities.len(),
        "job description analyzed"
    );
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::MockGenerator;

    const JOB_DESCRIPTION: &str = "We are hiring a senior backend engineer with Python, AWS, \
        and Docker experience to build scalable services in a collaborative team.";

    #[tokio::test]
    async fn test_analyze_returns_structured_analysis() {
        let analysis = analyze_job_description(&MockGenerator, JOB_DESCRIPTION)
            .await
            .unwrap();
        assert!(analysis.hard_skills.contains(&"Python".to_string()));
        assert_eq!(analysis.job_title.as_deref(), Some("Senior Software Engineer"));
    }

    #[tokio::test]
    async fn test_short_description_is_rejected_before_any_call() {
        let err = analyze_job_description(&MockGenerator, "too short")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
