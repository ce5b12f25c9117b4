//! AWS Bedrock client using the Converse API. Credentials come from static
//! env configuration when present, otherwise from the ambient AWS chain
//! (profile, instance role, etc.).

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_bedrockruntime::config::{Credentials, Region};
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};

use super::{LlmError, TextGenerator};
use crate::config::Config;

const TOP_P: f32 = 0.9;

pub struct BedrockClient {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockClient {
    pub async fn new(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()));

        if let (Some(key_id), Some(secret)) = (
            config.aws_access_key_id.clone(),
            config.aws_secret_access_key.clone(),
        ) {
            loader = loader.credentials_provider(Credentials::new(
                key_id, secret, None, None, "bespoke-env",
            ));
        }

        let sdk_config = loader.load().await;
        Self {
            client: aws_sdk_bedrockruntime::Client::new(&sdk_config),
            model_id: config.model_id.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for BedrockClient {
    async fn generate(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user.to_string()))
            .build()
            .map_err(|e| LlmError::Bedrock(e.to_string()))?;

        let inference = InferenceConfiguration::builder()
            .temperature(temperature)
            .top_p(TOP_P)
            .max_tokens(max_tokens as i32)
            .build();

        let output = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system.to_string()))
            .messages(message)
            .inference_config(inference)
            .send()
            .await
            .map_err(|e| LlmError::Bedrock(e.to_string()))?;

        let text = output
            .output()
            .and_then(|o| o.as_message().ok())
            .and_then(|m| m.content().first())
            .and_then(|block| block.as_text().ok())
            .cloned()
            .ok_or(LlmError::EmptyContent)?;

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text)
    }
}
