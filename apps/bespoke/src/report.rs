//! Console output formatting for the CLI - plaintext and JSON.

use serde_json::json;

use crate::config::Config;
use crate::models::job::JobAnalysis;
use crate::models::resume::ParsedResume;
use crate::models::tailoring::TailorOutcome;

const KEYWORD_DISPLAY_LIMIT: usize = 20;

/// Prints the result of a tailoring run in plain text.
pub fn print_outcome(outcome: &TailorOutcome) {
    println!("=== Tailored Resume ===\n");
    println!("{}\n", outcome.tailored_resume);

    if let Some(report) = &outcome.report {
        println!("Match score: {:.1}%", report.score);
        if !report.matched.is_empty() {
            println!(
                "Matched keywords ({}): {}",
                report.matched.len(),
                preview(&report.matched)
            );
        }
        if !report.missing.is_empty() {
            println!(
                "Missing keywords ({}): {}",
                report.missing.len(),
                preview(&report.missing)
            );
        }
        println!();
    }

    if !outcome.suggestions.is_empty() {
        println!("Suggestions:");
        for suggestion in &outcome.suggestions {
            println!("- {suggestion}");
        }
        println!();
    }

    if let Some(path) = &outcome.output_path {
        println!("Saved to: {}", path.display());
    }
    if let Some(path) = &outcome.comparison_path {
        println!("Comparison: {}", path.display());
    }
}

pub fn print_outcome_json(outcome: &TailorOutcome) {
    let payload = json!({
        "tailored_resume": outcome.tailored_resume,
        "match_score": outcome.report.as_ref().map(|r| r.score),
        "keywords_matched": outcome.report.as_ref().map(|r| capped(&r.matched)),
        "keywords_missing": outcome.report.as_ref().map(|r| capped(&r.missing)),
        "suggestions": outcome.suggestions,
        "output_path": outcome.output_path,
        "comparison_path": outcome.comparison_path,
        "job_title": outcome.job_title,
        "generated_at": outcome.generated_at,
    });
    print_json(&payload);
}

/// Prints a job analysis in plain text, one section per category.
pub fn print_analysis(analysis: &JobAnalysis) {
    println!("=== Job Analysis ===\n");
    if let Some(title) = &analysis.job_title {
        println!("Job title: {title}");
    }
    if let Some(company) = &analysis.company_name {
        println!("Company: {company}");
    }
    if let Some(location) = &analysis.location {
        println!("Location: {location}");
    }
    if !analysis.experience_required.is_empty() {
        println!("Experience: {}", analysis.experience_required);
    }
    println!();

    print_list("Hard skills", &analysis.hard_skills);
    print_list("Soft skills", &analysis.soft_skills);
    print_list("Qualifications", &analysis.qualifications);
    print_list("Key responsibilities", &analysis.key_responsibilities);
    print_list("Keywords", &analysis.keywords);
    print_list("Culture keywords", &analysis.culture_keywords);
    print_list("Nice to have", &analysis.nice_to_have);
    print_list("Action verbs", &analysis.action_verbs);
}

pub fn print_analysis_json(analysis: &JobAnalysis) {
    match serde_json::to_value(analysis) {
        Ok(value) => print_json(&value),
        Err(e) => eprintln!("[WARN] JSON serialization failed: {e}"),
    }
}

/// Prints the structure a resume parsed into: contact fields, then each
/// section with its bullet count.
pub fn print_parsed(parsed: &ParsedResume) {
    println!("=== Parsed Resume ===\n");

    let contact = &parsed.contact;
    if contact.is_empty() {
        println!("Contact: none detected");
    } else {
        println!("Contact:");
        print_field("name", &contact.name);
        print_field("email", &contact.email);
        print_field("phone", &contact.phone);
        print_field("linkedin", &contact.linkedin);
        print_field("website", &contact.website);
    }
    println!();

    println!("Sections ({}):", parsed.sections.len());
    for section in &parsed.sections {
        println!(
            "- {} ({} chars, {} bullets)",
            section.name,
            section.content.chars().count(),
            section.bullet_points.len()
        );
    }
}

pub fn print_parsed_json(parsed: &ParsedResume) {
    match serde_json::to_value(parsed) {
        Ok(value) => print_json(&value),
        Err(e) => eprintln!("[WARN] JSON serialization failed: {e}"),
    }
}

/// Prints the effective configuration with secrets reduced to set/unset.
pub fn print_config(config: &Config) {
    println!("=== Configuration ===\n");
    println!("Provider:         {}", config.provider);
    println!("Model ID:         {}", config.model_id);
    println!("AWS region:       {}", config.aws_region);
    println!("AWS credentials:  {}", set_or_unset(config.has_aws_credentials()));
    println!("OpenAI key:       {}", set_or_unset(config.openai_api_key.is_some()));
    println!("OpenAI model:     {}", config.openai_model_id);
    println!("Anthropic key:    {}", set_or_unset(config.anthropic_api_key.is_some()));
    println!("Output directory: {}", config.output_directory.display());
    println!("Max resume size:  {} MB", config.max_resume_size_mb);
    println!("Caching:          {}", config.enable_caching);
    println!("Port:             {}", config.port);
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("[WARN] JSON serialization failed: {e}"),
    }
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{label}:");
    for item in items {
        println!("- {item}");
    }
    println!();
}

fn print_field(label: &str, value: &Option<String>) {
    if let Some(value) = value {
        println!("  {label}: {value}");
    }
}

fn preview(items: &[String]) -> String {
    let mut text = items
        .iter()
        .take(KEYWORD_DISPLAY_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > KEYWORD_DISPLAY_LIMIT {
        text.push_str(", ...");
    }
    text
}

fn capped(items: &[String]) -> Vec<String> {
    items.iter().take(KEYWORD_DISPLAY_LIMIT).cloned().collect()
}

fn set_or_unset(set: bool) -> &'static str {
    if set {
        "set"
    } else {
        "unset"
    }
}
