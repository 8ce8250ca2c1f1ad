//! Per-customer chat session state
//!
//! Everything the agent needs to remember between messages from one
//! customer. Owned by the server's session manager; the agent receives a
//! mutable borrow per message and never holds cross-call state itself.

use commerce_bot_core::{ConversationHistory, Language};

/// Mutable per-customer state
#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Chosen language; `None` until the customer picks one
    pub language: Option<Language>,
    /// True until the first message has been answered
    pub first_contact: bool,
    /// Recent turns, for LLM context
    pub history: ConversationHistory,
    /// Last entity searched, kept for follow-up questions
    pub last_entity: Option<String>,
}

impl ChatSession {
    pub fn new(history_turns: usize) -> Self {
        Self {
            language: None,
            first_contact: true,
            history: ConversationHistory::new(history_turns),
            last_entity: None,
        }
    }

    /// Language to render replies in (English until selected)
    pub fn effective_language(&self) -> Language {
        self.language.unwrap_or_default()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = ChatSession::default();
        assert!(session.first_contact);
        assert_eq!(session.language, None);
        assert_eq!(session.effective_language(), Language::English);
    }
}
