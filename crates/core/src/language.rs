//! Language definitions for the storefront
//!
//! The bot serves six languages: English plus five Indian languages
//! (Tamil, Telugu, Kannada, Malayalam, Hindi). Customers pick a language
//! from a numbered menu, but code-mixed/romanized messages are also
//! recognized so a "vanakkam" or "kitna hai" lands in the right language
//! without an explicit selection.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Supported languages, in language-menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Hindi,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Kannada => "kn",
            Self::Malayalam => "ml",
            Self::Hindi => "hi",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Hindi => "Hindi",
        }
    }

    /// Get the name in the language's own script
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Tamil => "தமிழ்",
            Self::Telugu => "తెలుగు",
            Self::Kannada => "ಕನ್ನಡ",
            Self::Malayalam => "മലയാളം",
            Self::Hindi => "हिंदी",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::English => Script::Latin,
            Self::Tamil => Script::Tamil,
            Self::Telugu => Script::Telugu,
            Self::Kannada => Script::Kannada,
            Self::Malayalam => Script::Malayalam,
            Self::Hindi => Script::Devanagari,
        }
    }

    /// Map a language-menu digit ("1" through "6") to a language
    pub fn from_menu_digit(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::English),
            "2" => Some(Self::Tamil),
            "3" => Some(Self::Telugu),
            "4" => Some(Self::Kannada),
            "5" => Some(Self::Malayalam),
            "6" => Some(Self::Hindi),
            _ => None,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "ta" | "tam" | "tamil" => Some(Self::Tamil),
            "te" | "tel" | "telugu" => Some(Self::Telugu),
            "kn" | "kan" | "kannada" => Some(Self::Kannada),
            "ml" | "mal" | "malayalam" => Some(Self::Malayalam),
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            _ => None,
        }
    }

    /// Get all supported languages in menu order
    pub fn all() -> &'static [Language] {
        &[
            Self::English,
            Self::Tamil,
            Self::Telugu,
            Self::Kannada,
            Self::Malayalam,
            Self::Hindi,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Script systems used by the supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Devanagari,
}

impl Script {
    /// Get Unicode range for this script (first block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x007F),
            Self::Tamil => (0x0B80, 0x0BFF),
            Self::Telugu => (0x0C00, 0x0C7F),
            Self::Kannada => (0x0C80, 0x0CFF),
            Self::Malayalam => (0x0D00, 0x0D7F),
            Self::Devanagari => (0x0900, 0x097F),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    /// Detect script from text (returns most frequent non-Latin script,
    /// Latin only when nothing else matches)
    pub fn detect(text: &str) -> Option<Self> {
        let mut counts = std::collections::HashMap::new();

        for c in text.chars() {
            for script in &[
                Self::Tamil,
                Self::Telugu,
                Self::Kannada,
                Self::Malayalam,
                Self::Devanagari,
                Self::Latin,
            ] {
                if script.contains_char(c) {
                    *counts.entry(*script).or_insert(0) += 1;
                    break;
                }
            }
        }

        // An Indic character anywhere outweighs the Latin filler around it
        counts
            .iter()
            .filter(|(s, _)| **s != Self::Latin)
            .max_by_key(|(_, v)| **v)
            .map(|(k, _)| *k)
            .or_else(|| counts.get(&Self::Latin).map(|_| Self::Latin))
    }

    /// Language this script implies for the storefront
    pub fn language(&self) -> Language {
        match self {
            Self::Latin => Language::English,
            Self::Tamil => Language::Tamil,
            Self::Telugu => Language::Telugu,
            Self::Kannada => Language::Kannada,
            Self::Malayalam => Language::Malayalam,
            Self::Devanagari => Language::Hindi,
        }
    }
}

// Romanized word patterns: Tamil, Hindi, and Telugu written in Latin
// script. Word-bounded so "podi" does not fire inside "podium".
static TANGLISH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(vanakkam|vanakam|eppadi|epdi|irukeenga|irukinga|nalla|nalladhu|romba|rumba|nandri|thurai|veedu|veetu|podi|thanni|vilai|kaasu)\b",
    )
    .expect("tanglish pattern")
});

static HINGLISH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(namaste|namaskar|kaise|kaisa|accha|acha|theek|thik|dhanyavaad|shukriya|sabun|saaf|safai|kitna|kitni|chahiye|chaiye|keemat|daam)\b",
    )
    .expect("hinglish pattern")
});

static TENGLISH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(namaskaram|namaskaaram|elaa|unnaru|unnaaru|manchidi|manchi|dhanyavadalu|sabbu|inti|illu|dabbu|entha|enta|kavali|kavaali|viluva)\b",
    )
    .expect("tenglish pattern")
});

/// Detect the language of an inbound message.
///
/// Resolution order: menu digit, explicit language-name keyword, romanized
/// word patterns, script blocks. Returns `None` when nothing matches so
/// the caller keeps the session's current language.
pub fn detect_language(text: &str) -> Option<Language> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(lang) = Language::from_menu_digit(trimmed) {
        return Some(lang);
    }

    let lower = trimmed.to_lowercase();
    for lang in Language::all() {
        if lower.contains(&lang.name().to_lowercase()) || trimmed.contains(lang.native_name()) {
            return Some(*lang);
        }
    }

    if TANGLISH.is_match(&lower) {
        return Some(Language::Tamil);
    }
    if HINGLISH.is_match(&lower) {
        return Some(Language::Hindi);
    }
    if TENGLISH.is_match(&lower) {
        return Some(Language::Telugu);
    }

    match Script::detect(trimmed) {
        Some(Script::Latin) | None => None,
        Some(script) => Some(script.language()),
    }
}
