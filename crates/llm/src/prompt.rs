//! Prompt construction
//!
//! Builds the chat-message list for the augmentation call: a sales
//! assistant system prompt carrying the matched product context and the
//! target-language instruction, recent conversation history, then the
//! customer's question.

use commerce_bot_catalog::ProductRecord;
use commerce_bot_core::{ConversationHistory, Language, TurnRole};

use crate::backend::ChatMessage;

/// Builder for augmentation prompts
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    language: Language,
    product_context: Vec<String>,
    history: Vec<ChatMessage>,
    user_message: Option<String>,
}

impl PromptBuilder {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            product_context: Vec::new(),
            history: Vec::new(),
            user_message: None,
        }
    }

    /// Attach matched products as context lines
    pub fn with_products(mut self, products: &[&ProductRecord]) -> Self {
        for product in products {
            let price = product
                .price
                .map(|p| format!("₹{p}"))
                .unwrap_or_else(|| "N/A".to_string());
            self.product_context
                .push(format!("- {} ({}): {}", product.name, product.category, price));
        }
        self
    }

    /// Attach recent conversation turns
    pub fn with_history(mut self, history: &ConversationHistory) -> Self {
        for turn in history.turns() {
            self.history.push(match turn.role {
                TurnRole::User => ChatMessage::user(&turn.content),
                TurnRole::Assistant => ChatMessage::assistant(&turn.content),
            });
        }
        self
    }

    pub fn user_message(mut self, message: impl Into<String>) -> Self {
        self.user_message = Some(message.into());
        self
    }

    /// Assemble the final message list
    pub fn build(self) -> Vec<ChatMessage> {
        let mut system = String::from(
            "You are a helpful shopping assistant for Rose Chemicals, a retailer of \
             cleaning products, chemicals, perfumes, and cleaning tools. Answer the \
             customer's question briefly and helpfully, and keep it under 100 words.",
        );

        if !self.product_context.is_empty() {
            system.push_str("\n\nRelevant products:\n");
            system.push_str(&self.product_context.join("\n"));
        }

        if self.language != Language::English {
            system.push_str(&format!(
                "\n\nReply in {} ({}).",
                self.language.name(),
                self.language.native_name()
            ));
        }

        let mut messages = vec![ChatMessage::system(system)];
        messages.extend(self.history);
        if let Some(user) = self.user_message {
            messages.push(ChatMessage::user(user));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commerce_bot_core::Turn;

    #[test]
    fn test_build_plain() {
        let messages = PromptBuilder::new(Language::English)
            .user_message("does phenyl work on tiles?")
            .build();

        assert_eq!(messages.len(), 2);
        assert!(messages[0].content.contains("Rose Chemicals"));
        assert_eq!(messages[1].content, "does phenyl work on tiles?");
    }

    #[test]
    fn test_build_with_language_instruction() {
        let messages = PromptBuilder::new(Language::Tamil)
            .user_message("soap vilai?")
            .build();

        assert!(messages[0].content.contains("Reply in Tamil"));
    }

    #[test]
    fn test_build_with_history() {
        let mut history = ConversationHistory::default();
        history.push(Turn::user("show brooms"));
        history.push(Turn::assistant("Found 2 products"));

        let messages = PromptBuilder::new(Language::English)
            .with_history(&history)
            .user_message("which one is cheaper?")
            .build();

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].content, "show brooms");
    }
}
