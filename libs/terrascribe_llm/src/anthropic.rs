use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ScribeError;
use crate::{CompletionConfig, CompletionService};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
    #[serde(default)]
    r#type: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

pub struct AnthropicService {
    client: Client,
    api_key: String,
    config: CompletionConfig,
}

impl AnthropicService {
    pub fn new(api_key: String, config: CompletionConfig) -> Self {
        Self {
            client: Client::new(),
            api_key,
            config,
        }
    }

    /// Reads the API key from the ambient environment. Key lifecycle stays
    /// with the operator.
    pub fn from_env(config: CompletionConfig) -> Result<Self, ScribeError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| ScribeError::Config("ANTHROPIC_API_KEY is not set".to_string()))?;

        Ok(Self::new(api_key, config))
    }
}

#[async_trait]
impl CompletionService for AnthropicService {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = AnthropicRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Anthropic API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "API returned error status: {}, body: {}",
                status,
                error_text
            ));
        }

        let result: AnthropicResponse = response
            .json()
            .await
            .context("Failed to parse Anthropic response")?;

        let text = result
            .content
            .iter()
            .filter(|block| block.r#type == "text")
            .map(|block| block.text.clone())
            .collect::<Vec<String>>()
            .join("");

        if text.is_empty() {
            return Err(anyhow::anyhow!(
                "Invalid response format from Anthropic: no text content"
            ));
        }

        Ok(text)
    }
}
