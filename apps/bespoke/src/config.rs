use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::Provider;

/// Application configuration loaded once at startup from environment
/// variables (with `.env` support) and passed explicitly to everything
/// that needs it. There is no global settings instance.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: Provider,
    pub model_id: String,
    pub aws_region: String,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model_id: String,
    pub anthropic_api_key: Option<String>,
    pub output_directory: PathBuf,
    pub max_resume_size_mb: u64,
    /// Parsed for compatibility with existing .env files; no cache layer
    /// reads it.
    pub enable_caching: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider = env_or("MODEL_PROVIDER", "bedrock")
            .parse::<Provider>()
            .map_err(anyhow::Error::msg)
            .context("MODEL_PROVIDER must be one of: bedrock, openai, anthropic, mock")?;

        Ok(Config {
            provider,
            model_id: env_or("MODEL_ID", "us.anthropic.claude-sonnet-4-20250514-v1:0"),
            aws_region: env_or("AWS_REGION", "us-west-2"),
            aws_access_key_id: optional_env("AWS_ACCESS_KEY_ID"),
            aws_secret_access_key: optional_env("AWS_SECRET_ACCESS_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_model_id: env_or("OPENAI_MODEL_ID", "gpt-4"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            output_directory: PathBuf::from(env_or("OUTPUT_DIRECTORY", "./output")),
            max_resume_size_mb: env_or("MAX_RESUME_SIZE_MB", "10")
                .parse::<u64>()
                .context("MAX_RESUME_SIZE_MB must be a number of megabytes")?,
            enable_caching: parse_bool(&env_or("ENABLE_CACHING", "true")),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// True when static AWS credentials are configured. Bedrock can also
    /// pick up credentials from the ambient environment, so this is only
    /// informational.
    pub fn has_aws_credentials(&self) -> bool {
        self.aws_access_key_id.is_some() && self.aws_secret_access_key.is_some()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Empty or whitespace-only values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("1"));
        assert!(parse_bool(" yes "));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(""));
    }
}
