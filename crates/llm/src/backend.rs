//! LLM backend
//!
//! Chat-completions client for hosted models. The default target is
//! Sarvam (strong on Indian languages); any OpenAI-compatible endpoint
//! works with the same payload shape.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::LlmError;

/// Backend configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.sarvam.ai/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "sarvam-m".to_string(),
            max_tokens: 300,
            temperature: 0.7,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Message role in a chat exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Pluggable text-generation backend
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Generate a completion for the message list
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;

    /// Whether the backend is configured and reachable enough to try
    fn is_available(&self) -> bool;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: String,
}

/// Sarvam chat-completions backend
#[derive(Debug)]
pub struct SarvamBackend {
    config: LlmConfig,
    client: reqwest::Client,
}

impl SarvamBackend {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        if config.api_key.is_empty() {
            return Err(LlmError::MissingApiKey(
                "no API key configured for the LLM backend".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Configuration(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Build from an environment variable holding the key. `None` when
    /// the variable is unset, so callers can run without augmentation.
    pub fn from_env(mut config: LlmConfig, key_env: &str) -> Option<Self> {
        match std::env::var(key_env) {
            Ok(key) if !key.is_empty() => {
                config.api_key = key;
                Self::new(config).ok()
            }
            _ => {
                tracing::info!(var = %key_env, "LLM API key not set, augmentation disabled");
                None
            }
        }
    }
}

#[async_trait]
impl LlmBackend for SarvamBackend {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("{status}: {body}")));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let text = completion
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| LlmError::InvalidResponse("empty completion".to_string()))?;

        Ok(text)
    }

    fn is_available(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}
