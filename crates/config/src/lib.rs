//! Configuration management for the commerce chatbot
//!
//! Supports loading configuration from:
//! - TOML files
//! - Environment variables (COMMERCE_BOT_ prefix)
//!
//! Also holds the per-language response templates the formatter renders
//! from.

pub mod settings;
pub mod templates;

pub use settings::{
    load_settings, CatalogConfig, LlmSettings, ServerConfig, SessionConfig, Settings,
};
pub use templates::{ResponseTemplates, TemplateSet};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for commerce_bot_core::Error {
    fn from(err: ConfigError) -> Self {
        commerce_bot_core::Error::Config(err.to_string())
    }
}
