//! Intent classification
//!
//! One consolidated, priority-ordered classifier: the first matching rule
//! wins. Classification is stateless per call and total over string input;
//! the no-match path ends in [`Intent::Unknown`], never an error.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::lexicon::{
    BUSINESS_TERMS, CATEGORY_PATTERNS, COMPOUND_TERMS, GREETING_KEYWORDS, HELP_KEYWORDS,
    PRICE_KEYWORDS, PRODUCT_TERMS, QUESTION_KEYWORDS, SEARCH_KEYWORDS, STOP_WORDS,
    THANKS_KEYWORDS,
};

/// Closed set of message intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Search,
    Price,
    Help,
    Thanks,
    Conversation,
    CategoryBrowse,
    Unknown,
}

impl Intent {
    /// Stable label, used for logging and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Search => "search",
            Self::Price => "price",
            Self::Help => "help",
            Self::Thanks => "thanks",
            Self::Conversation => "conversation",
            Self::CategoryBrowse => "category_browse",
            Self::Unknown => "unknown",
        }
    }
}

/// Classification result: the intent plus the cleaned entity string
/// (the likely product query), when one applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    pub intent: Intent,
    pub entity: Option<String>,
}

impl IntentResult {
    fn new(intent: Intent, entity: Option<String>) -> Self {
        Self { intent, entity }
    }
}

/// Stateless intent classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw inbound message.
    pub fn classify(&self, message: &str) -> IntentResult {
        let normalized = normalize(message);
        if normalized.is_empty() {
            return IntentResult::new(Intent::Unknown, None);
        }

        let tokens: Vec<&str> = normalized.split(' ').collect();
        // Unicode word boundaries: Devanagari and other Indic scripts do
        // not tokenize correctly on whitespace alone
        let words: Vec<&str> = normalized.unicode_words().collect();

        let has_greeting = contains_keyword(&words, &GREETING_KEYWORDS);
        let has_search = contains_keyword(&words, &SEARCH_KEYWORDS);
        let has_price = contains_keyword(&words, &PRICE_KEYWORDS);
        let has_product = first_product_term(&normalized).is_some();
        let has_compound = COMPOUND_TERMS.iter().any(|t| normalized.contains(t));
        let has_business = BUSINESS_TERMS
            .iter()
            .any(|t| tokens.iter().any(|&tok| trim_token(tok) == *t));

        // 1. Greeting: a bare greeting, not one leading into a search
        if has_greeting && !has_search && !has_product && !has_compound {
            return IntentResult::new(Intent::Greeting, None);
        }

        // 2. Question/conversation, unless the question is really a price
        //    query ("what is the price of X" belongs to the price path)
        if !has_price && (contains_keyword(&words, &QUESTION_KEYWORDS) || is_question(&normalized))
        {
            let entity = extract_entity(&normalized, &question_extra_stops());
            // A content-free question that reads like a catalog ask
            // ("what do you sell") is a browse request, not a conversation
            if entity.is_none() && matches_category_request(&normalized) {
                return IntentResult::new(Intent::CategoryBrowse, None);
            }
            return IntentResult::new(Intent::Conversation, entity);
        }

        // 3. Price
        if has_price {
            let entity = extract_entity(&normalized, &price_extra_stops());
            return IntentResult::new(Intent::Price, entity);
        }

        // 4. Direct compound product phrase: the whole message is the
        //    entity, since stripping would destroy the phrase
        if has_compound {
            return IntentResult::new(Intent::Search, Some(normalized));
        }

        // 5. Search
        if has_search || has_product || has_business {
            let mut entity = extract_entity(&normalized, &search_extra_stops());

            if entity.is_none() {
                entity = first_product_term(&normalized).map(str::to_string);
            }
            if entity.is_none() {
                entity = extract_entity(&normalized, &[]);
            }

            // A search verb with nothing to search for is usually a
            // catalog-browse request ("what do you sell", "show all")
            if entity.is_none() && !has_product && matches_category_request(&normalized) {
                return IntentResult::new(Intent::CategoryBrowse, None);
            }

            return IntentResult::new(Intent::Search, entity);
        }

        // 6. Category browse
        if matches_category_request(&normalized) {
            return IntentResult::new(Intent::CategoryBrowse, None);
        }

        // 7. Help
        if contains_keyword(&words, &HELP_KEYWORDS) {
            return IntentResult::new(Intent::Help, None);
        }

        // 8. Thanks
        if contains_keyword(&words, &THANKS_KEYWORDS) {
            return IntentResult::new(Intent::Thanks, None);
        }

        // 9. Fallback: a lone word is probably a product name
        if tokens.len() == 1 && trim_token(tokens[0]).len() > 2 {
            return IntentResult::new(Intent::Search, Some(normalized));
        }

        IntentResult::new(Intent::Unknown, None)
    }
}

/// Lowercase, trim, and collapse internal whitespace
fn normalize(message: &str) -> String {
    message
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip leading/trailing punctuation from a token for keyword matching
fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

fn contains_keyword(tokens: &[&str], keywords: &std::collections::HashSet<&'static str>) -> bool {
    tokens.iter().any(|&t| keywords.contains(trim_token(t)))
}

/// First single-word product indicator appearing in the message
fn first_product_term(normalized: &str) -> Option<&'static str> {
    PRODUCT_TERMS
        .iter()
        .find(|term| normalized.contains(**term))
        .copied()
}

fn matches_category_request(normalized: &str) -> bool {
    CATEGORY_PATTERNS.iter().any(|p| p.is_match(normalized))
}

/// Question-format heuristic
fn is_question(normalized: &str) -> bool {
    normalized.contains('?')
        || [
            "do ", "can ", "is ", "are ", "what ", "where ", "how ", "does ",
        ]
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
}

fn question_extra_stops() -> Vec<&'static str> {
    let mut extra: Vec<&'static str> = QUESTION_KEYWORDS.iter().copied().collect();
    extra.extend(["do", "you", "have", "can", "what", "is", "are", "the", "to"]);
    extra
}

fn price_extra_stops() -> Vec<&'static str> {
    let mut extra: Vec<&'static str> = PRICE_KEYWORDS.iter().copied().collect();
    extra.extend(["what", "is", "the", "of", "for", "tell", "me"]);
    extra
}

fn search_extra_stops() -> Vec<&'static str> {
    let mut extra: Vec<&'static str> = SEARCH_KEYWORDS.iter().copied().collect();
    extra.extend(["do", "you", "me", "any", "some", "i", "we"]);
    extra
}

/// Extract the likely product query from a message.
///
/// Tokenizes on whitespace, removes the baseline stop words plus
/// `extra_stop_words`, drops tokens of length ≤ 1, and rejoins the rest
/// in their original order. Returns `None` when nothing survives.
pub fn extract_entity(message: &str, extra_stop_words: &[&str]) -> Option<String> {
    let kept: Vec<&str> = message
        .split_whitespace()
        .map(trim_token)
        .filter(|token| {
            token.len() > 1 && !STOP_WORDS.contains(token) && !extra_stop_words.contains(token)
        })
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(msg: &str) -> IntentResult {
        IntentClassifier::new().classify(msg)
    }

    #[test]
    fn test_empty_input_is_unknown() {
        assert_eq!(classify(""), IntentResult::new(Intent::Unknown, None));
        assert_eq!(classify("   "), IntentResult::new(Intent::Unknown, None));
    }

    #[test]
    fn test_greeting() {
        assert_eq!(classify("hi"), IntentResult::new(Intent::Greeting, None));
        assert_eq!(
            classify("Good morning!"),
            IntentResult::new(Intent::Greeting, None)
        );
        assert_eq!(
            classify("vanakkam"),
            IntentResult::new(Intent::Greeting, None)
        );
    }

    #[test]
    fn test_greeting_with_product_is_search() {
        let result = classify("hi, show me broom");
        assert_eq!(result.intent, Intent::Search);
    }

    #[test]
    fn test_price_extraction() {
        let result = classify("what is the price of acetic acid");
        assert_eq!(result.intent, Intent::Price);
        assert_eq!(result.entity.as_deref(), Some("acetic acid"));
    }

    #[test]
    fn test_price_romanized() {
        let result = classify("soap vilai enna");
        assert_eq!(result.intent, Intent::Price);
        assert_eq!(result.entity.as_deref(), Some("soap enna"));
    }

    #[test]
    fn test_search_with_entity() {
        let result = classify("show me broom");
        assert_eq!(result.intent, Intent::Search);
        assert_eq!(result.entity.as_deref(), Some("broom"));
    }

    #[test]
    fn test_compound_term_keeps_whole_message() {
        let result = classify("fabric conditioner");
        assert_eq!(result.intent, Intent::Search);
        assert_eq!(result.entity.as_deref(), Some("fabric conditioner"));
    }

    #[test]
    fn test_question_is_conversation() {
        let result = classify("does floor cleaner mix with water");
        assert_eq!(result.intent, Intent::Conversation);
        assert_eq!(result.entity.as_deref(), Some("floor cleaner"));

        let result = classify("is it safe for kitchen?");
        assert_eq!(result.intent, Intent::Conversation);
    }

    #[test]
    fn test_thanks() {
        assert_eq!(
            classify("thanks a lot"),
            IntentResult::new(Intent::Thanks, None)
        );
        assert_eq!(classify("nandri"), IntentResult::new(Intent::Thanks, None));
    }

    #[test]
    fn test_help() {
        assert_eq!(classify("help"), IntentResult::new(Intent::Help, None));
    }

    #[test]
    fn test_category_browse() {
        assert_eq!(
            classify("categories"),
            IntentResult::new(Intent::CategoryBrowse, None)
        );
        assert_eq!(
            classify("what do you sell"),
            IntentResult::new(Intent::CategoryBrowse, None)
        );
        assert_eq!(
            classify("show all"),
            IntentResult::new(Intent::CategoryBrowse, None)
        );
    }

    #[test]
    fn test_single_token_fallback_is_search() {
        let result = classify("harpic");
        assert_eq!(result.intent, Intent::Search);
        assert_eq!(result.entity.as_deref(), Some("harpic"));
    }

    #[test]
    fn test_short_gibberish_is_unknown() {
        assert_eq!(classify("ok"), IntentResult::new(Intent::Unknown, None));
    }

    #[test]
    fn test_business_terms_trigger_search() {
        let result = classify("bulk purchase rates for hotels");
        // "rates" is not a price token ("rate" is); business terms win
        assert_eq!(result.intent, Intent::Search);
    }

    #[test]
    fn test_extract_entity_preserves_order() {
        let entity = extract_entity("show me the heavy duty broom", &["show", "me"]);
        assert_eq!(entity.as_deref(), Some("heavy duty broom"));
    }

    #[test]
    fn test_extract_entity_empty() {
        assert_eq!(extract_entity("show me the", &["show", "me"]), None);
        assert_eq!(extract_entity("a b c", &["b", "c"]), None);
    }

    #[test]
    fn test_determinism() {
        let classifier = IntentClassifier::new();
        let first = classifier.classify("need some floor cleaner");
        for _ in 0..5 {
            assert_eq!(classifier.classify("need some floor cleaner"), first);
        }
    }
}
