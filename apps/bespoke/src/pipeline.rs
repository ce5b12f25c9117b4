//! End-to-end tailoring pipeline: analyze the posting, rewrite the resume,
//! score the result, write the output files.

use std::path::Path;

use chrono::Utc;

use crate::analysis::{analyze_job_description, generate_suggestions, match_report, tailor_resume};
use crate::config::Config;
use crate::errors::AppError;
use crate::io::{read_document, OutputWriter};
use crate::llm_client::TextGenerator;
use crate::models::tailoring::{TailorOutcome, TailorRequest};

/// Runs one full tailoring job. The job description may be inline text or
/// a path to a file; a path is detected by the file actually existing.
pub async fn run(
    generator: &dyn TextGenerator,
    config: &Config,
    request: &TailorRequest,
) -> Result<TailorOutcome, AppError> {
    let job_description = load_job_description(&request.job_description, config)?;

    let analysis = analyze_job_description(generator, &job_description).await?;
    let original_resume = read_document(&request.resume_path, config.max_resume_size_mb)?;

    let tailored_resume = tailor_resume(
        generator,
        &original_resume,
        &analysis,
        Some(&job_description),
    )
    .await?;

    let report = request
        .with_match_score
        .then(|| match_report(&tailored_resume, &analysis));
    let suggestions = generate_suggestions(&tailored_resume, &analysis);

    let writer = OutputWriter::new(&config.output_directory);
    let output_path = writer.write_resume(
        &tailored_resume,
        request.output_format,
        request.output_path.as_deref(),
        analysis.job_title.as_deref(),
    )?;

    let comparison_path = if request.with_comparison {
        Some(writer.write_comparison(&original_resume, &tailored_resume, None)?)
    } else {
        None
    };

    tracing::info!(
        output = %output_path.display(),
        score = report.as_ref().map(|r| r.score),
        "tailoring pipeline finished"
    );

    Ok(TailorOutcome {
        original_resume,
        tailored_resume,
        report,
        suggestions,
        output_path: Some(output_path),
        comparison_path,
        job_title: analysis.job_title.clone(),
        generated_at: Utc::now(),
    })
}

fn load_job_description(value: &str, config: &Config) -> Result<String, AppError> {
    let as_path = Path::new(value.trim());
    if as_path.is_file() {
        read_document(as_path, config.max_resume_size_mb)
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use crate::llm_client::{mock::MockGenerator, Provider};
    use crate::models::tailoring::OutputFormat;

    fn test_config(output_directory: PathBuf) -> Config {
        Config {
            provider: Provider::Mock,
            model_id: "test-model".into(),
            aws_region: "us-west-2".into(),
            aws_access_key_id: None,
            aws_secret_access_key: None,
            openai_api_key: None,
            openai_model_id: "gpt-4".into(),
            anthropic_api_key: None,
            output_directory,
            max_resume_size_mb: 10,
            enable_caching: false,
            port: 8080,
            rust_log: "info".into(),
        }
    }

    const JOB_DESCRIPTION: &str = "We need a senior software engineer with Python, AWS, and \
        Docker experience to design and build microservices in a collaborative team.";

    fn resume_file(dir: &Path) -> PathBuf {
        let path = dir.join("resume.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "Jane Doe\njane@example.com\n\nEXPERIENCE\n- Built Python services on AWS \
             handling 10M requests per day\n- Led a team of four engineers\n\nSKILLS\nPython, AWS"
        )
        .unwrap();
        path
    }

    #[tokio::test]
    async fn test_full_pipeline_with_mock_generator() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().join("out"));
        let request = TailorRequest {
            job_description: JOB_DESCRIPTION.to_string(),
            resume_path: resume_file(dir.path()),
            output_format: OutputFormat::Markdown,
            output_path: None,
            with_comparison: true,
            with_match_score: true,
        };

        let outcome = run(&MockGenerator, &config, &request).await.unwrap();

        assert!(outcome.tailored_resume.contains("Jane Doe"));
        assert_eq!(outcome.job_title.as_deref(), Some("Senior Software Engineer"));

        let report = outcome.report.unwrap();
        assert!(report.score > 0.0);
        assert!(report.matched.contains(&"Python".to_string()));

        let output_path = outcome.output_path.unwrap();
        assert!(output_path.exists());
        assert!(output_path
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("tailored_resume_senior_software_engineer_"));
        assert!(outcome.comparison_path.unwrap().exists());
    }

    #[tokio::test]
    async fn test_job_description_loaded_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let jd_path = dir.path().join("posting.txt");
        std::fs::write(&jd_path, JOB_DESCRIPTION).unwrap();

        let config = test_config(dir.path().join("out"));
        let request = TailorRequest {
            job_description: jd_path.to_str().unwrap().to_string(),
            resume_path: resume_file(dir.path()),
            output_format: OutputFormat::Txt,
            output_path: None,
            with_comparison: false,
            with_match_score: false,
        };

        let outcome = run(&MockGenerator, &config, &request).await.unwrap();
        assert!(outcome.report.is_none());
        assert!(outcome.comparison_path.is_none());
        assert!(outcome
            .output_path
            .unwrap()
            .extension()
            .is_some_and(|e| e == "txt"));
    }

    #[tokio::test]
    async fn test_explicit_output_path_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().join("out"));
        let custom = dir.path().join("custom/tailored.md");
        let request = TailorRequest {
            job_description: JOB_DESCRIPTION.to_string(),
            resume_path: resume_file(dir.path()),
            output_format: OutputFormat::Markdown,
            output_path: Some(custom.clone()),
            with_comparison: false,
            with_match_score: true,
        };

        let outcome = run(&MockGenerator, &config, &request).await.unwrap();
        assert_eq!(outcome.output_path.as_deref(), Some(custom.as_path()));
        assert!(custom.exists());
    }
}
