//! Session management
//!
//! One session per WhatsApp sender, keyed by phone number. Sessions hold
//! the chat state the agent mutates per message; idle sessions are
//! reaped by a background cleanup task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tokio::sync::{watch, Mutex};

use commerce_bot_agent::ChatSession;

use crate::ServerError;

/// Session state for one customer
pub struct Session {
    /// Sender phone number (the session key)
    pub phone: String,
    /// Chat state, mutated by the agent per message. Async mutex: the
    /// guard is held across the LLM call for conversational replies.
    pub chat: Mutex<ChatSession>,
    /// Creation time
    pub created_at: Instant,
    /// Last activity
    pub last_activity: RwLock<Instant>,
}

impl Session {
    pub fn new(phone: impl Into<String>, chat: ChatSession) -> Self {
        Self {
            phone: phone.into(),
            chat: Mutex::new(chat),
            created_at: Instant::now(),
            last_activity: RwLock::new(Instant::now()),
        }
    }

    /// Update last activity
    pub fn touch(&self) {
        *self.last_activity.write() = Instant::now();
    }

    /// Check if session is expired
    pub fn is_expired(&self, timeout: Duration) -> bool {
        self.last_activity.read().elapsed() > timeout
    }
}

/// Session manager keyed by phone number
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Arc<Session>>>,
    max_sessions: usize,
    session_timeout: Duration,
    cleanup_interval: Duration,
}

impl SessionManager {
    pub fn new(max_sessions: usize, session_timeout: Duration, cleanup_interval: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            session_timeout,
            cleanup_interval,
        }
    }

    /// Get the session for a sender, creating one on first contact.
    pub fn get_or_create(
        &self,
        phone: &str,
        new_chat: impl FnOnce() -> ChatSession,
    ) -> Result<Arc<Session>, ServerError> {
        if let Some(session) = self.sessions.read().get(phone) {
            session.touch();
            return Ok(session.clone());
        }

        let mut sessions = self.sessions.write();
        // Re-check under the write lock
        if let Some(session) = sessions.get(phone) {
            session.touch();
            return Ok(session.clone());
        }

        if sessions.len() >= self.max_sessions {
            self.cleanup_expired_internal(&mut sessions);
            if sessions.len() >= self.max_sessions {
                return Err(ServerError::Session("max sessions reached".to_string()));
            }
        }

        let session = Arc::new(Session::new(phone, new_chat()));
        sessions.insert(phone.to_string(), session.clone());
        tracing::info!(phone = %mask_phone(phone), "created session");

        Ok(session)
    }

    pub fn get(&self, phone: &str) -> Option<Arc<Session>> {
        self.sessions.read().get(phone).cloned()
    }

    pub fn remove(&self, phone: &str) {
        if self.sessions.write().remove(phone).is_some() {
            tracing::info!(phone = %mask_phone(phone), "removed session");
        }
    }

    pub fn count(&self) -> usize {
        self.sessions.read().len()
    }

    /// Cleanup expired sessions
    pub fn cleanup_expired(&self) {
        let mut sessions = self.sessions.write();
        self.cleanup_expired_internal(&mut sessions);
    }

    fn cleanup_expired_internal(&self, sessions: &mut HashMap<String, Arc<Session>>) {
        let timeout = self.session_timeout;
        sessions.retain(|phone, session| {
            let keep = !session.is_expired(timeout);
            if !keep {
                tracing::info!(phone = %mask_phone(phone), "expired session");
            }
            keep
        });
    }

    /// Start a background task that periodically reaps expired sessions.
    ///
    /// Returns a shutdown sender used to stop the task.
    pub fn start_cleanup_task(self: &Arc<Self>) -> watch::Sender<bool> {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let manager = Arc::clone(self);
        let interval = manager.cleanup_interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let before = manager.count();
                        manager.cleanup_expired();
                        let after = manager.count();
                        if before != after {
                            tracing::info!(
                                removed = before - after,
                                remaining = after,
                                "session cleanup"
                            );
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            tracing::info!("session cleanup task shutting down");
                            break;
                        }
                    }
                }
            }
        });

        shutdown_tx
    }
}

/// Keep only the last few digits in logs
fn mask_phone(phone: &str) -> String {
    let visible = 4.min(phone.len());
    format!("…{}", &phone[phone.len() - visible..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(max: usize) -> SessionManager {
        SessionManager::new(max, Duration::from_secs(3600), Duration::from_secs(300))
    }

    #[test]
    fn test_get_or_create() {
        let manager = manager(10);

        let a = manager
            .get_or_create("whatsapp:+911234567890", ChatSession::default)
            .unwrap();
        let b = manager
            .get_or_create("whatsapp:+911234567890", ChatSession::default)
            .unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(manager.count(), 1);
    }

    #[test]
    fn test_capacity() {
        let manager = manager(1);

        manager.get_or_create("a", ChatSession::default).unwrap();
        let err = manager.get_or_create("b", ChatSession::default);
        assert!(err.is_err());
    }

    #[test]
    fn test_expiry() {
        let manager = SessionManager::new(10, Duration::from_secs(0), Duration::from_secs(1));
        manager.get_or_create("a", ChatSession::default).unwrap();

        std::thread::sleep(Duration::from_millis(5));
        manager.cleanup_expired();
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_remove() {
        let manager = manager(10);
        manager.get_or_create("a", ChatSession::default).unwrap();
        manager.remove("a");
        assert!(manager.get("a").is_none());
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("whatsapp:+911234567890"), "…7890");
        assert_eq!(mask_phone("abc"), "…abc");
    }
}
