//! Static lexicon tables
//!
//! Keyword sets, stop words, plural/typo normalization, synonyms, and
//! boost terms used by the classifier and the search engine. Everything
//! here is data; the tables are built once and never mutated.
//!
//! The keyword sets span English plus romanized Tamil, Telugu, Kannada,
//! Malayalam, and Hindi trigger words, since customers freely code-mix
//! ("soap vilai enna", "detergent kitna hai").

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// Greeting trigger words across languages
pub static GREETING_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "hi",
        "hello",
        "hey",
        "hii",
        "helo",
        "hola",
        "good",
        "morning",
        "afternoon",
        "evening",
        "namaste",
        "namaskar",
        "namaskara",
        "namaskaram",
        "vanakkam",
        "vanakam",
        "adaab",
        "salaam",
    ]
    .into_iter()
    .collect()
});

/// Search trigger words
pub static SEARCH_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "have",
        "show",
        "find",
        "get",
        "need",
        "want",
        "looking",
        "search",
        "browse",
        "available",
        "sell",
        "stock",
        // romanized triggers
        "kaanum",
        "dheko",
        "dikhao",
        "chahiye",
        "kavali",
        "venum",
    ]
    .into_iter()
    .collect()
});

/// Price trigger words
pub static PRICE_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "price",
        "cost",
        "rate",
        "much",
        "expensive",
        "cheap",
        "value",
        "amount",
        // romanized triggers
        "daam",
        "paisa",
        "keemat",
        "kitna",
        "vilai",
        "entha",
        "bele",
        "vila",
        "dhara",
    ]
    .into_iter()
    .collect()
});

/// Help trigger words
pub static HELP_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "help", "assist", "guide", "support", "madad", "udhavi", "sahayam", "sahaya",
    ]
    .into_iter()
    .collect()
});

/// Gratitude trigger words
pub static THANKS_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "thank",
        "thanks",
        "appreciate",
        "great",
        "nice",
        "perfect",
        "excellent",
        "nandri",
        "dhanyavaad",
        "dhanyavadalu",
        "dhanyavada",
        "shukriya",
        "nanni",
    ]
    .into_iter()
    .collect()
});

/// Question words plus the product-question vocabulary (usage, mixing,
/// colors, recipes) that signals a conversational query rather than a
/// plain catalog search
pub static QUESTION_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "does",
        "will",
        "how",
        "what",
        "which",
        "when",
        "where",
        "why",
        "color",
        "colour",
        "water",
        "mix",
        "dilute",
        "use",
        "safe",
        "compatible",
        "recipe",
        "make",
        "prepare",
        "ingredients",
        "steps",
        "process",
        // romanized and native question words
        "kya",
        "kaise",
        "enna",
        "yenu",
        "eppadi",
        "क्या",
        "कैसे",
        "कौन",
        "कब",
        "कहाँ",
        "रंग",
        "पानी",
        "उपयोग",
    ]
    .into_iter()
    .collect()
});

/// Single-word product indicators (substring-matched against the message)
pub static PRODUCT_TERMS: &[&str] = &[
    "acid",
    "chemical",
    "brush",
    "broom",
    "cleaner",
    "perfume",
    "oil",
    "powder",
    "soap",
    "detergent",
    "fragrance",
    "bottle",
    "container",
    "solution",
    "liquid",
    "spray",
    "cream",
    "gel",
    "paste",
    "thinner",
    "solvent",
    "fabric",
    "conditioner",
    "softener",
    "dish",
    "wash",
    "cleaning",
    "washing",
    "floor",
    "phenyl",
    "compound",
    "kit",
    "mop",
    "wiper",
    "duster",
    "gloves",
];

/// Multi-word product/kit phrases. When one of these appears, the whole
/// message is the entity; stripping stop words would destroy the phrase.
pub static COMPOUND_TERMS: &[&str] = &[
    "fabric conditioner",
    "liquid detergent",
    "dish wash",
    "floor cleaner",
    "soap oil",
    "phenyl compound",
    "washing gel",
    "cleaning kit",
];

/// Business/shopping indicators
pub static BUSINESS_TERMS: &[&str] = &[
    "buy",
    "purchase",
    "order",
    "deliver",
    "quality",
    "brand",
    "size",
    "quantity",
    "bulk",
    "wholesale",
    "discount",
];

/// Baseline stop words removed during entity extraction
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the",
        "a",
        "an",
        "and",
        "or",
        "but",
        "in",
        "on",
        "at",
        "to",
        "for",
        "of",
        "with",
        "by",
        "can",
        "you",
        "show",
        "me",
        "some",
        "any",
        "what",
        "are",
        "is",
        "do",
        "have",
        "got",
        "find",
        "get",
        "need",
        "want",
        "looking",
        "search",
        "browse",
        "available",
        "sell",
        "stock",
        "all",
        "please",
        "i",
        "we",
    ]
    .into_iter()
    .collect()
});

/// Whole-entity plural and typo normalization map.
///
/// Lookup is on the full normalized entity, matching how customers type
/// single-concept queries ("brushes", "cleaning products", "fenil").
pub static PLURAL_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        // plurals
        ("brushes", "brush"),
        ("brooms", "broom"),
        ("detergents", "detergent"),
        ("chemicals", "chemical"),
        ("acids", "acid"),
        ("soaps", "soap"),
        ("phenyles", "phenyl"),
        ("phenylees", "phenyl"),
        ("bottles", "bottle"),
        ("containers", "container"),
        ("products", "product"),
        ("cleaning products", "cleaning"),
        ("cleaning", "clean"),
        ("perfumes", "perfume"),
        ("fragrances", "fragrance"),
        ("scents", "scent"),
        ("oils", "oil"),
        ("liquids", "liquid"),
        ("powders", "powder"),
        ("cleaners", "cleaner"),
        ("mops", "mop"),
        ("wipers", "wiper"),
        // common typos
        ("cleanr", "cleaner"),
        ("clener", "cleaner"),
        ("flor", "floor"),
        ("flore", "floor"),
        ("desh wash", "dish wash"),
        ("liqued", "liquid"),
        ("liqid", "liquid"),
        ("fabrik", "fabric"),
        ("febric", "fabric"),
        ("detergant", "detergent"),
        ("fenil", "phenyl"),
        ("phenil", "phenyl"),
        ("finyl", "phenyl"),
        ("brash", "brush"),
        ("brus", "brush"),
        ("sope", "soap"),
        ("asid", "acid"),
        ("powdar", "powder"),
    ]
    .into_iter()
    .collect()
});

/// Synonym and alternative-name map. Expansion is bidirectional: a query
/// matching a key pulls in the values, and a query matching a value pulls
/// in the key.
pub static SYNONYM_MAP: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    [
        ("soap", vec!["detergent", "washing", "clean"]),
        ("acid", vec!["chemical", "solution"]),
        ("phenyl", vec!["disinfectant", "floor cleaner", "antiseptic"]),
        ("perfume", vec!["fragrance", "scent", "attar"]),
        ("brush", vec!["cleaning tool", "scrubber"]),
        ("broom", vec!["jhadu", "sweeper"]),
        ("thickner", vec!["thickening", "thick", "viscosity"]),
        ("detergent", vec!["soap", "washing powder", "surf"]),
        ("cleaner", vec!["cleaning agent", "clean"]),
        ("disinfectant", vec!["antiseptic", "sanitizer", "germicide"]),
    ]
    .into_iter()
    .collect()
});

/// Fixed boost table: when the query mentions the first term and the
/// product name contains any of the paired terms, the match gets a +3.
/// Hard-coded per-term, deliberately not a generalized relevance model.
pub static BOOST_PAIRS: &[(&str, &[&str])] = &[
    ("broom", &["broom"]),
    ("brush", &["brush"]),
    ("clean", &["clean"]),
    ("fabric", &["fabric"]),
    ("floor", &["floor", "mop"]),
    ("detergent", &["detergent"]),
    ("dish", &["dish"]),
    ("phenyl", &["phenyl"]),
    ("acid", &["acid"]),
    ("cleaner", &["cleaner"]),
];

/// Category-browse request patterns
pub static CATEGORY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\b(categories|category|types|products|items|menu|options)\b")
            .expect("category pattern"),
        Regex::new(r"what do you sell").expect("category pattern"),
        Regex::new(r"\bshow\b.*\ball\b").expect("category pattern"),
        Regex::new(r"\blist\b.*\bproducts\b").expect("category pattern"),
    ]
});
