//! Commerce agent
//!
//! The per-message pipeline: language-selection flow, then intent
//! classification, catalog search, and reply formatting, with optional
//! LLM augmentation for conversational questions.

use std::sync::Arc;

use commerce_bot_catalog::CatalogIndex;
use commerce_bot_config::templates::ResponseTemplates;
use commerce_bot_core::{detect_language, KeyValueStore, Language, Turn};
use commerce_bot_llm::{LlmBackend, PromptBuilder};
use commerce_bot_nlu::{Intent, IntentClassifier, IntentResult, SearchEngine};

use crate::formatter::ResponseFormatter;
use crate::session::ChatSession;

/// Result-list sizes per intent
const SEARCH_RESULTS: usize = 5;
const PRICE_RESULTS: usize = 3;

/// Agent configuration
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Turns of history fed to the LLM
    pub history_turns: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { history_turns: 10 }
    }
}

/// The commerce chatbot agent
pub struct CommerceAgent {
    config: AgentConfig,
    classifier: IntentClassifier,
    search: SearchEngine,
    formatter: ResponseFormatter,
    llm: Option<Arc<dyn LlmBackend>>,
    /// Reply cache for LLM answers, injected by the service layer
    cache: Arc<dyn KeyValueStore>,
}

impl CommerceAgent {
    pub fn new(
        index: Arc<CatalogIndex>,
        templates: ResponseTemplates,
        cache: Arc<dyn KeyValueStore>,
        config: AgentConfig,
    ) -> Self {
        Self {
            config,
            classifier: IntentClassifier::new(),
            search: SearchEngine::new(index),
            formatter: ResponseFormatter::new(templates),
            llm: None,
            cache,
        }
    }

    /// Attach an LLM backend for conversational augmentation
    pub fn with_llm(mut self, llm: Arc<dyn LlmBackend>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub fn new_session(&self) -> ChatSession {
        ChatSession::new(self.config.history_turns)
    }

    pub fn search_engine(&self) -> &SearchEngine {
        &self.search
    }

    pub fn templates(&self) -> &ResponseTemplates {
        self.formatter.templates()
    }

    /// Handle one inbound message and produce the reply text.
    ///
    /// Always returns a non-empty reply; failures inside (LLM, cache)
    /// degrade to the template path.
    pub async fn handle_message(&self, session: &mut ChatSession, raw: &str) -> String {
        let text = raw.trim();
        let language = session.effective_language();
        let templates = self.formatter.templates();

        if text.is_empty() {
            return templates.set(language).empty_message.clone();
        }

        // First contact: welcome + language menu, in English
        if session.first_contact {
            session.first_contact = false;
            let set = templates.set(Language::English);
            return format!("{}\n\n{}", set.welcome, set.language_menu);
        }

        // Language selection flow
        if session.language.is_none() {
            return match detect_language(text) {
                Some(language) => {
                    session.language = Some(language);
                    tracing::info!(language = %language, "session language selected");
                    templates.set(language).greeting_reply.clone()
                }
                None => {
                    let set = templates.set(Language::English);
                    format!("{}\n\n{}", set.language_menu, set.invalid_language)
                }
            };
        }

        // Mid-conversation language switch ("3", "hindi", "தமிழ்").
        // Only explicit requests count: short ISO codes would collide
        // with ordinary words ("hi" is a greeting, not Hindi).
        if let Some(switched) = explicit_language_request(text) {
            session.language = Some(switched);
            return templates.set(switched).greeting_reply.clone();
        }

        session.history.push(Turn::user(text));

        let result = self.classifier.classify(text);
        tracing::debug!(
            intent = result.intent.label(),
            entity = result.entity.as_deref().unwrap_or(""),
            "classified message"
        );

        let reply = self.dispatch(session, text, &result).await;

        session.history.push(Turn::assistant(&reply));
        reply
    }

    async fn dispatch(
        &self,
        session: &mut ChatSession,
        text: &str,
        result: &IntentResult,
    ) -> String {
        let language = session.effective_language();
        let set = self.formatter.templates().set(language);

        match result.intent {
            Intent::Greeting => set.greeting_reply.clone(),
            Intent::Thanks => set.thanks_reply.clone(),
            Intent::Help => set.help.clone(),
            Intent::Unknown => set.unknown_reply.clone(),

            Intent::CategoryBrowse => self
                .formatter
                .format_categories(self.search.index().categories(), language),

            Intent::Price => match result.entity.as_deref() {
                Some(entity) => {
                    session.last_entity = Some(entity.to_string());
                    let matches = self.search.search(entity, PRICE_RESULTS);
                    match matches.first() {
                        Some(product) => self.formatter.format_price(product, language),
                        None => self.formatter.no_results(language, entity),
                    }
                }
                None => set.help.clone(),
            },

            Intent::Search => match result.entity.as_deref() {
                Some(entity) => {
                    session.last_entity = Some(entity.to_string());
                    let matches = self.search.search(entity, SEARCH_RESULTS);
                    self.formatter.format_results(&matches, language, entity)
                }
                None => set.help.clone(),
            },

            Intent::Conversation => {
                self.conversation_reply(session, text, result.entity.as_deref())
                    .await
            }
        }
    }

    /// Answer a product question: cached LLM reply, fresh LLM reply,
    /// matched products, or a deterministic topic fallback, in that order.
    async fn conversation_reply(
        &self,
        session: &mut ChatSession,
        text: &str,
        entity: Option<&str>,
    ) -> String {
        let language = session.effective_language();

        let products = match entity {
            Some(entity) => {
                session.last_entity = Some(entity.to_string());
                self.search.search(entity, PRICE_RESULTS)
            }
            None => Vec::new(),
        };

        if let Some(ref llm) = self.llm {
            let cache_key = format!("{}:{}", language.code(), text.to_lowercase());

            match self.cache.get(&cache_key).await {
                Ok(Some(cached)) => {
                    tracing::debug!(key = %cache_key, "LLM reply cache hit");
                    return cached;
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("reply cache read failed: {e}"),
            }

            if llm.is_available() {
                let messages = PromptBuilder::new(language)
                    .with_products(&products)
                    .with_history(&session.history)
                    .user_message(text)
                    .build();

                match llm.generate(&messages).await {
                    Ok(reply) => {
                        if let Err(e) = self.cache.set(&cache_key, &reply).await {
                            tracing::warn!("reply cache write failed: {e}");
                        }
                        return reply;
                    }
                    Err(e) => {
                        tracing::warn!("LLM generation failed, falling back to templates: {e}");
                    }
                }
            }
        }

        if !products.is_empty() {
            let query = entity.unwrap_or(text);
            return self.formatter.format_results(&products, language, query);
        }

        fallback_conversation_reply(text)
    }
}

/// A message that is nothing but a language request: a menu digit or the
/// full language name in English or its own script
fn explicit_language_request(text: &str) -> Option<Language> {
    Language::from_menu_digit(text).or_else(|| {
        Language::all()
            .iter()
            .copied()
            .find(|lang| text.eq_ignore_ascii_case(lang.name()) || text == lang.native_name())
    })
}

/// Deterministic answers for common product questions when no LLM is
/// configured. Bilingual, as the shop answers walk-in customers.
fn fallback_conversation_reply(question: &str) -> String {
    let q = question.to_lowercase();

    if q.contains("color") || q.contains("colour") || q.contains("रंग") {
        return "हमारे उत्पाद विभिन्न रंगों में उपलब्ध हैं। कृपया विशिष्ट रंग की जानकारी के लिए हमसे संपर्क करें।\n\nOur products are available in various colors. Please contact us for specific color information."
            .to_string();
    }

    if q.contains("water") || q.contains("mix") || q.contains("dilute") || q.contains("पानी") {
        return "मिश्रण के अनुपात के लिए कृपया उत्पाद लेबल देखें या हमारी टीम से संपर्क करें।\n\nFor mixing ratios, please check the product label or contact our team."
            .to_string();
    }

    if q.contains("use") || q.contains("how") || q.contains("उपयोग") {
        return "उपयोग की विधि के लिए कृपया उत्पाद के निर्देश देखें या हमसे पूछें।\n\nFor usage instructions, please check the product directions or ask us."
            .to_string();
    }

    if q.contains("safe") || q.contains("compatible") || q.contains("सुरक्षित") {
        return "सुरक्षा जानकारी के लिए कृपया उत्पाद की सुरक्षा शीट देखें या हमारी टीम से संपर्क करें।\n\nFor safety information, please check the product safety sheet or contact our team."
            .to_string();
    }

    "आपके प्रश्न के लिए धन्यवाद! विस्तृत जानकारी के लिए कृपया हमारी कस्टमर सर्विस टीम से संपर्क करें।\n\nThank you for your question! For detailed information, please contact our customer service team."
        .to_string()
}
