//! Runtime settings
//!
//! Loaded from an optional TOML file plus COMMERCE_BOT_ environment
//! overrides (e.g. COMMERCE_BOT_SERVER__PORT=8080).

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Top-level settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub llm: LlmSettings,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins; empty means same-origin only
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Catalog document settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Session lifecycle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    #[serde(default = "default_session_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_secs: u64,
    #[serde(default = "default_history_turns")]
    pub history_turns: usize,
}

fn default_max_sessions() -> usize {
    10_000
}

fn default_session_timeout() -> u64 {
    3600
}

fn default_cleanup_interval() -> u64 {
    300
}

fn default_history_turns() -> usize {
    10
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            timeout_secs: default_session_timeout(),
            cleanup_interval_secs: default_cleanup_interval(),
            history_turns: default_history_turns(),
        }
    }
}

/// LLM augmentation settings. Disabled by default; the bot is fully
/// functional on templates alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_llm_url")]
    pub api_url: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Name of the environment variable holding the API key; the key
    /// itself never lives in config files
    #[serde(default = "default_llm_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_llm_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_llm_cache")]
    pub cache_entries: usize,
}

fn default_llm_url() -> String {
    "https://api.sarvam.ai/v1/chat/completions".to_string()
}

fn default_llm_model() -> String {
    "sarvam-m".to_string()
}

fn default_llm_key_env() -> String {
    "AI_API_KEY".to_string()
}

fn default_llm_max_tokens() -> u32 {
    300
}

fn default_llm_temperature() -> f32 {
    0.7
}

fn default_llm_timeout() -> u64 {
    15
}

fn default_llm_cache() -> usize {
    100
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: default_llm_url(),
            model: default_llm_model(),
            api_key_env: default_llm_key_env(),
            max_tokens: default_llm_max_tokens(),
            temperature: default_llm_temperature(),
            timeout_secs: default_llm_timeout(),
            cache_entries: default_llm_cache(),
        }
    }
}

/// Load settings from an optional file and the environment.
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::with_name(path).required(false));
    }

    let loaded = builder
        .add_source(config::Environment::with_prefix("COMMERCE_BOT").separator("__"))
        .build()?;

    let settings: Settings = loaded.try_deserialize()?;

    if settings.session.max_sessions == 0 {
        return Err(ConfigError::InvalidValue {
            field: "session.max_sessions".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    Ok(settings)
}
