//! Text-generation clients. Every remote call in the application goes
//! through the [`TextGenerator`] trait; concrete providers are selected by
//! [`build_generator`] from an explicit [`Provider`] value, never by
//! sniffing strings at call sites.
//!
//! Calls are single-shot: one request per invocation, failures propagate
//! directly to the caller.

pub mod anthropic;
pub mod bedrock;
pub mod mock;
pub mod openai;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Bedrock error: {0}")]
    Bedrock(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The capability every provider exposes: one blocking generation call.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError>;
}

/// Supported text-generation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Provider {
    Bedrock,
    #[value(name = "openai")]
    OpenAi,
    Anthropic,
    Mock,
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bedrock" => Ok(Provider::Bedrock),
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "mock" => Ok(Provider::Mock),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Bedrock => "bedrock",
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Mock => "mock",
        };
        f.write_str(name)
    }
}

/// Constructs the generator for the given provider. Credential checks
/// happen here, at startup, rather than on the first call.
pub async fn build_generator(
    provider: Provider,
    config: &Config,
) -> Result<Arc<dyn TextGenerator>> {
    let generator: Arc<dyn TextGenerator> = match provider {
        Provider::Bedrock => Arc::new(bedrock::BedrockClient::new(config).await),
        Provider::OpenAi => {
            let Some(api_key) = config.openai_api_key.clone() else {
                bail!("OPENAI_API_KEY is not set");
            };
            Arc::new(openai::OpenAiClient::new(
                api_key,
                config.openai_model_id.clone(),
            ))
        }
        Provider::Anthropic => {
            let Some(api_key) = config.anthropic_api_key.clone() else {
                bail!("ANTHROPIC_API_KEY is not set");
            };
            Arc::new(anthropic::AnthropicClient::new(api_key))
        }
        Provider::Mock => {
            tracing::warn!("using mock generator, no API calls will be made");
            Arc::new(mock::MockGenerator)
        }
    };

    tracing::info!(%provider, "text generator initialized");
    Ok(generator)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub(crate) fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
