//! Commerce bot server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use commerce_bot_agent::{AgentConfig, CommerceAgent};
use commerce_bot_catalog::{load_catalog_file, CatalogIndex};
use commerce_bot_config::templates::ResponseTemplates;
use commerce_bot_config::load_settings;
use commerce_bot_core::InMemoryStore;
use commerce_bot_llm::{LlmConfig, SarvamBackend};
use commerce_bot_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings(Some("config/default")).context("loading settings")?;

    // A malformed catalog degrades to an empty index; the bot keeps
    // answering with templates and no-results messages.
    let index = match load_catalog_file(&settings.catalog.path)
        .and_then(|raw| CatalogIndex::build(&raw))
    {
        Ok(index) => index,
        Err(e) => {
            tracing::error!(path = %settings.catalog.path, "catalog load failed, serving empty catalog: {e}");
            CatalogIndex::empty()
        }
    };
    tracing::info!(products = index.len(), "catalog ready");

    let cache = Arc::new(InMemoryStore::new(settings.llm.cache_entries));
    let mut agent = CommerceAgent::new(
        Arc::new(index),
        ResponseTemplates::default(),
        cache,
        AgentConfig {
            history_turns: settings.session.history_turns,
        },
    );

    if settings.llm.enabled {
        let llm_config = LlmConfig {
            api_url: settings.llm.api_url.clone(),
            model: settings.llm.model.clone(),
            max_tokens: settings.llm.max_tokens,
            temperature: settings.llm.temperature,
            timeout: std::time::Duration::from_secs(settings.llm.timeout_secs),
            ..LlmConfig::default()
        };
        match SarvamBackend::from_env(llm_config, &settings.llm.api_key_env) {
            Some(backend) => {
                tracing::info!(model = %settings.llm.model, "LLM augmentation enabled");
                agent = agent.with_llm(Arc::new(backend));
            }
            None => tracing::warn!("LLM enabled in config but no API key found"),
        }
    }

    commerce_bot_server::metrics::install_recorder();

    let state = AppState::new(settings, agent);
    let _cleanup_shutdown = state.sessions.start_cleanup_task();

    let addr = format!(
        "{}:{}",
        state.settings.server.host, state.settings.server.port
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(addr = %addr, "webhook server listening");

    axum::serve(listener, create_router(state))
        .await
        .context("serving")?;

    Ok(())
}
