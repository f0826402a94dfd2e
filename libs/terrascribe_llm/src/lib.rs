use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod anthropic;
pub mod error;
pub mod generator;
pub mod prompts;
pub mod sanitizer;

pub use error::ScribeError;
pub use generator::{CodeGeneratorService, GenerationResult, ERROR_PLACEHOLDER};

#[derive(Debug, Clone)]
pub enum CompletionProvider {
    Anthropic,
}

/// Target code format for a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Terraform,
    Kubernetes,
}

impl Dialect {
    /// Language tag the host should use for syntax highlighting.
    pub fn highlight_language(&self) -> &'static str {
        match self {
            Dialect::Terraform => "terraform",
            Dialect::Kubernetes => "yaml",
        }
    }

    /// Human-facing label for a dialect choice list.
    pub fn label(&self) -> &'static str {
        match self {
            Dialect::Terraform => "Terraform (AWS)",
            Dialect::Kubernetes => "Kubernetes (YAML)",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Terraform => write!(f, "Terraform"),
            Dialect::Kubernetes => write!(f, "Kubernetes"),
        }
    }
}

impl FromStr for Dialect {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Terraform" | "terraform" | "Terraform (AWS)" => Ok(Dialect::Terraform),
            "Kubernetes" | "kubernetes" | "Kubernetes (YAML)" => Ok(Dialect::Kubernetes),
            other => Err(ScribeError::UnsupportedDialect(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub text: String,
    pub dialect: Dialect,
}

impl GenerationRequest {
    pub fn new(text: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            text: text.into(),
            dialect,
        }
    }
}

#[async_trait]
pub trait CompletionService {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub struct CompletionConfig {
    pub model: String,
    /// Kept low so the output favors predictable, best-practice code over
    /// creative variation. Identical prompts may still produce different
    /// text across calls.
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "claude-3-sonnet-20240229".to_string(),
            temperature: 0.1,
            max_tokens: 2048,
        }
    }
}

pub struct CompletionClient {
    service: Box<dyn CompletionService + Send + Sync>,
}

impl CompletionClient {
    pub fn new(
        provider: CompletionProvider,
        config: Option<CompletionConfig>,
    ) -> Result<Self, ScribeError> {
        let config = config.unwrap_or_default();
        let service: Box<dyn CompletionService + Send + Sync> = match provider {
            CompletionProvider::Anthropic => {
                Box::new(anthropic::AnthropicService::from_env(config)?)
            }
        };

        Ok(Self { service })
    }

    /// Builds a client around an arbitrary completion capability, so hosts
    /// and tests can substitute their own.
    pub fn with_service(service: Box<dyn CompletionService + Send + Sync>) -> Self {
        Self { service }
    }

    pub async fn complete(&self, prompt: &str) -> Result<String> {
        self.service.complete(prompt).await
    }
}
