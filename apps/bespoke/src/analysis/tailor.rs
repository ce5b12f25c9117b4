//! Resume rewriting against a job analysis, plus post-hoc improvement
//! suggestions. The tailoring call never receives instructions to invent
//! content; the system prompt forbids fabrication outright.

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::job::JobAnalysis;
use crate::validate::validate_resume_text;

use super::prompts::TAILOR_SYSTEM;

const TAILOR_TEMPERATURE: f32 = 0.7;
const TAILOR_MAX_TOKENS: u32 = 3000;

/// At most this many characters of the raw job description are embedded
/// in the prompt for context.
const JOB_DESCRIPTION_CONTEXT_CHARS: usize = 2000;

pub async fn tailor_resume(
    generator: &dyn TextGenerator,
    original_resume: &str,
    analysis: &JobAnalysis,
    job_description: Option<&str>,
) -> Result<String, AppError> {
    validate_resume_text(original_resume)?;

    tracing::info!(
        resume_chars = original_resume.chars().count(),
        hard_skills = analysis.hard_skills.len(),
        "tailoring resume"
    );

    let prompt = build_tailoring_prompt(original_resume, analysis, job_description);
    let tailored = generator
        .generate(TAILOR_SYSTEM, &prompt, TAILOR_TEMPERATURE, TAILOR_MAX_TOKENS)
        .await?;

    tracing::info!(tailored_chars = tailored.chars().count(), "resume tailored");
    Ok(tailored)
}

fn build_tailoring_prompt(
    original_resume: &str,
    analysis: &JobAnalysis,
    job_description: Option<&str>,
) -> String {
    let mut parts: Vec<String> = vec![
        "# TASK: Tailor the following resume for a specific job opportunity\n".to_string(),
        "## ORIGINAL RESUME (DO NOT CHANGE ANY FACTS):\n".to_string(),
        "```".to_string(),
        original_resume.to_string(),
        "```\n".to_string(),
        "## TARGET JOB ANALYSIS:\n".to_string(),
    ];

    if let Some(title) = &analysis.job_title {
        parts.push(format!("**Job Title**: {title}\n"));
    }
    if let Some(company) = &analysis.company_name {
        parts.push(format!("**Company**: {company}\n"));
    }

    parts.push(format!(
        "\n**Required Hard Skills**: {}",
        analysis.hard_skills.join(", ")
    ));
    parts.push(format!(
        "\n**Required Soft Skills**: {}",
        analysis.soft_skills.join(", ")
    ));
    parts.push(format!(
        "\n**Experience Level**: {}",
        analysis.experience_required
    ));
    parts.push(format!(
        "\n**Key Responsibilities**: {}",
        join_first(&analysis.key_responsibilities, 5)
    ));
    parts.push(format!(
        "\n**Important Keywords**: {}",
        join_first(&analysis.keywords, 15)
    ));
    parts.push(format!(
        "\n**Action Verbs to Use**: {}",
        join_first(&analysis.action_verbs, 10)
    ));

    if !analysis.qualifications.is_empty() {
        parts.push(format!(
            "\n**Required Qualifications**: {}",
            analysis.qualifications.join(", ")
        ));
    }
    if !analysis.culture_keywords.is_empty() {
        parts.push(format!(
            "\n**Company Culture**: {}",
            analysis.culture_keywords.join(", ")
        ));
    }

    if let Some(jd) = job_description {
        let truncated: String = jd.chars().take(JOB_DESCRIPTION_CONTEXT_CHARS).collect();
        parts.push("\n\n## FULL JOB DESCRIPTION (for context):\n".to_string());
        parts.push("```".to_string());
        parts.push(truncated);
        parts.push("```\n".to_string());
    }

    parts.push("\n## YOUR TASK:\n".to_string());
    parts.push(
        "Tailor the original resume to highlight experiences and skills that match the job requirements."
            .to_string(),
    );
    parts.push(
        "Remember: Only use information from the original resume. Do not fabricate anything."
            .to_string(),
    );
    parts.push(
        "Incorporate the target keywords naturally. Use the suggested action verbs where appropriate."
            .to_string(),
    );
    parts.push(
        "\nReturn ONLY the tailored resume in Markdown format with clear sections and bullet points."
            .to_string(),
    );
    parts.push("Do not include any explanations or comments - just the resume itself.\n".to_string());
    parts.push("\n**Tailored Resume:**\n".to_string());

    parts.join("\n")
}

fn join_first(items: &[String], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Post-hoc review of the tailored text. Each check adds at most one
/// suggestion; an empty list means nothing stood out.
pub fn generate_suggestions(tailored_resume: &str, analysis: &JobAnalysis) -> Vec<String> {
    let mut suggestions = Vec::new();
    let tailored_lower = tailored_resume.to_lowercase();

    let missing_skills: Vec<&str> = analysis
        .hard_skills
        .iter()
        .take(5)
        .filter(|skill| !tailored_lower.contains(&skill.to_lowercase()))
        .map(String::as_str)
        .collect();
    if !missing_skills.is_empty() {
        suggestions.push(format!(
            "Consider adding experience with: {} if applicable",
            missing_skills.join(", ")
        ));
    }

    if !tailored_resume.chars().any(|c| c.is_ascii_digit()) {
        suggestions.push(
            "Add quantifiable metrics and numbers to your achievements for greater impact"
                .to_string(),
        );
    }

    let verb_count = analysis
        .action_verbs
        .iter()
        .filter(|verb| tailored_lower.contains(&verb.to_lowercase()))
        .count();
    if verb_count < 3 {
        suggestions.push(format!(
            "Use more action verbs like: {}",
            join_first(&analysis.action_verbs, 5)
        ));
    }

    let wants_certification = analysis
        .qualifications
        .iter()
        .any(|q| q.to_lowercase().contains("certification"));
    if wants_certification && !tailored_lower.contains("certif") {
        suggestions.push("Highlight any relevant certifications prominently".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::MockGenerator;

    fn sample_analysis() -> JobAnalysis {
        JobAnalysis {
            hard_skills: vec!["Python".into(), "AWS".into(), "Docker".into()],
            soft_skills: vec!["Leadership".into()],
            qualifications: vec!["AWS certification preferred".into()],
            experience_required: "5+ years".into(),
            key_responsibilities: vec!["Build services".into()],
            keywords: vec!["microservices".into()],
            action_verbs: vec![
                "designed".into(),
                "built".into(),
                "led".into(),
                "shipped".into(),
            ],
            job_title: Some("Senior Engineer".into()),
            company_name: Some("Acme".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_tailor_rejects_short_resume() {
        let err = tailor_resume(&MockGenerator, "Jane", &sample_analysis(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_tailor_returns_markdown_resume() {
        let resume = "Jane Doe, engineer. ".repeat(10);
        let out = tailor_resume(&MockGenerator, &resume, &sample_analysis(), Some("the posting"))
            .await
            .unwrap();
        assert!(out.contains("##"));
    }

    #[test]
    fn test_prompt_includes_analysis_and_truncated_description() {
        let long_jd = "j".repeat(5000);
        let prompt = build_tailoring_prompt("my resume text", &sample_analysis(), Some(&long_jd));
        assert!(prompt.contains("**Job Title**: Senior Engineer"));
        assert!(prompt.contains("Python, AWS, Docker"));
        assert!(prompt.contains("## FULL JOB DESCRIPTION"));
        assert!(!prompt.contains(&"j".repeat(2001)));
        assert!(prompt.contains(&"j".repeat(2000)));
    }

    #[test]
    fn test_prompt_skips_absent_optional_fields() {
        let analysis = JobAnalysis::default();
        let prompt = build_tailoring_prompt("my resume text", &analysis, None);
        assert!(!prompt.contains("**Job Title**"));
        assert!(!prompt.contains("**Required Qualifications**"));
        assert!(!prompt.contains("## FULL JOB DESCRIPTION"));
    }

    #[test]
    fn test_suggestions_flag_missing_skills_and_metrics() {
        let analysis = sample_analysis();
        let suggestions = generate_suggestions("a resume about gardening", &analysis);
        assert!(suggestions
            .iter()
            .any(|s| s.contains("Python, AWS, Docker")));
        assert!(suggestions.iter().any(|s| s.contains("quantifiable metrics")));
        assert!(suggestions.iter().any(|s| s.contains("action verbs")));
        assert!(suggestions.iter().any(|s| s.contains("certifications")));
    }

    #[test]
    fn test_suggestions_empty_when_resume_covers_everything() {
        let analysis = sample_analysis();
        let resume = "Designed, built, and led Python services on AWS with Docker; \
            shipped microservices serving 10M users. AWS certified.";
        assert!(generate_suggestions(resume, &analysis).is_empty());
    }
}
