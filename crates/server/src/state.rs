//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use commerce_bot_agent::CommerceAgent;
use commerce_bot_config::Settings;

use crate::session::SessionManager;

/// State shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub agent: Arc<CommerceAgent>,
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(settings: Settings, agent: CommerceAgent) -> Self {
        let sessions = SessionManager::new(
            settings.session.max_sessions,
            Duration::from_secs(settings.session.timeout_secs),
            Duration::from_secs(settings.session.cleanup_interval_secs),
        );

        Self {
            settings: Arc::new(settings),
            agent: Arc::new(agent),
            sessions: Arc::new(sessions),
        }
    }
}
