//! LLM augmentation for the commerce chatbot
//!
//! The bot works end-to-end on templates; an LLM backend, when
//! configured, rewrites conversational answers with more natural
//! phrasing in the customer's language. Any backend failure degrades to
//! the template path, never to an error the customer sees.

pub mod backend;
pub mod prompt;

pub use backend::{ChatMessage, ChatRole, LlmBackend, LlmConfig, SarvamBackend};
pub use prompt::PromptBuilder;

use thiserror::Error;

/// LLM errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Generation error: {0}")]
    Generation(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Network(err.to_string())
    }
}

impl From<LlmError> for commerce_bot_core::Error {
    fn from(err: LlmError) -> Self {
        commerce_bot_core::Error::Llm(err.to_string())
    }
}
