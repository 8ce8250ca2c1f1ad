//! Core traits and types for the commerce chatbot
//!
//! This crate provides foundational types used across all other crates:
//! - Language definitions (6 storefront languages) and detection
//! - Conversation turn types and bounded history
//! - Key-value store abstraction for session-scoped state
//! - Error types

pub mod conversation;
pub mod error;
pub mod language;
pub mod store;

pub use conversation::{ConversationHistory, Turn, TurnRole};
pub use error::{Error, Result};
pub use language::{detect_language, Language, Script};
pub use store::{InMemoryStore, KeyValueStore};
