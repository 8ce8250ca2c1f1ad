//! Message orchestration for the commerce chatbot
//!
//! Ties the pipeline together: inbound text → intent classification →
//! catalog search → formatted reply, wrapped by the language-selection
//! flow and optional LLM augmentation. Every path produces a non-empty
//! reply; nothing in here returns an error to the customer.

pub mod agent;
pub mod formatter;
pub mod session;

pub use agent::{AgentConfig, CommerceAgent};
pub use formatter::ResponseFormatter;
pub use session::ChatSession;

use thiserror::Error;

/// Agent errors (internal; customer-facing paths degrade to templates)
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<commerce_bot_llm::LlmError> for AgentError {
    fn from(err: commerce_bot_llm::LlmError) -> Self {
        AgentError::Llm(err.to_string())
    }
}
