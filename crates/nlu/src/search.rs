//! Product search and ranking
//!
//! Linear scan over the immutable catalog index with integer relevance
//! scoring. The pipeline is fixed: normalize, singularize plural/typo
//! forms, expand synonyms, score, stable-sort, truncate. No I/O happens
//! inside a search call; results are reproducible for identical catalogs
//! and queries.

use std::sync::Arc;

use commerce_bot_catalog::{CatalogIndex, ProductRecord};

use crate::lexicon::{BOOST_PAIRS, PLURAL_MAP, SYNONYM_MAP};

/// One scored candidate. The index retains ownership of the record.
#[derive(Debug, Clone)]
pub struct ScoredMatch<'a> {
    pub product: &'a ProductRecord,
    pub score: u32,
}

/// Search engine over a shared catalog index
#[derive(Clone)]
pub struct SearchEngine {
    index: Arc<CatalogIndex>,
}

impl SearchEngine {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Search the catalog for an entity, returning up to `max_results`
    /// products in descending relevance order. Ties keep catalog
    /// insertion order. Unmatchable or degenerate input yields an empty
    /// list, never an error.
    pub fn search(&self, entity: &str, max_results: usize) -> Vec<&ProductRecord> {
        self.search_scored(entity, max_results)
            .into_iter()
            .map(|m| m.product)
            .collect()
    }

    /// Search variant exposing scores, for callers that rank further.
    pub fn search_scored(&self, entity: &str, max_results: usize) -> Vec<ScoredMatch<'_>> {
        if max_results == 0 {
            return Vec::new();
        }

        let normalized = entity.trim().to_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }

        // Whole-entity plural/typo singularization; the original form is
        // retained as a secondary match surface
        let primary = PLURAL_MAP
            .get(normalized.as_str())
            .copied()
            .unwrap_or(normalized.as_str());

        let tokens = query_tokens(primary, &normalized);
        if tokens.is_empty() {
            return Vec::new();
        }

        let expansions = expand_synonyms(primary);

        let mut matches: Vec<ScoredMatch<'_>> = self
            .index
            .products()
            .iter()
            .filter_map(|product| {
                let score = score_product(product, &normalized, primary, &tokens, &expansions);
                (score > 0).then_some(ScoredMatch { product, score })
            })
            .collect();

        // Stable sort: equal scores keep catalog insertion order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(max_results);

        tracing::debug!(
            query = %normalized,
            primary = %primary,
            results = matches.len(),
            "catalog search"
        );

        matches
    }
}

/// Distinct query tokens longer than one character, primary form first
fn query_tokens<'a>(primary: &'a str, normalized: &'a str) -> Vec<&'a str> {
    let mut tokens: Vec<&str> = Vec::new();
    for token in primary.split(' ').chain(normalized.split(' ')) {
        if token.len() > 1 && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// Synonym set for the search term, expanded in both directions: the
/// term's own synonyms plus every key that lists the term as a synonym.
fn expand_synonyms(term: &str) -> Vec<&'static str> {
    let mut expansions: Vec<&'static str> = Vec::new();

    if let Some(synonyms) = SYNONYM_MAP.get(term) {
        for synonym in synonyms {
            if !expansions.contains(synonym) {
                expansions.push(synonym);
            }
        }
    }

    for (key, synonyms) in SYNONYM_MAP.iter() {
        if synonyms.iter().any(|s| *s == term) && !expansions.contains(key) {
            expansions.push(key);
        }
    }

    expansions
}

fn score_product(
    product: &ProductRecord,
    normalized: &str,
    primary: &str,
    tokens: &[&str],
    expansions: &[&'static str],
) -> u32 {
    let name = product.name.to_lowercase();
    let mut score = 0u32;

    // Token hits: the name is the primary surface, the derived
    // search_text (category, description, keywords) the fallback
    for token in tokens {
        if name.contains(token) {
            score += 1;
        } else if product.search_text.contains(token) {
            score += 1;
        }
    }

    // Full-phrase hit on the name
    if name.contains(normalized) || (primary != normalized && name.contains(primary)) {
        score += 2;
    }

    // Fixed domain-term boosts: query and product name agree on a
    // recognized category term
    for (query_term, name_terms) in BOOST_PAIRS {
        if (normalized.contains(query_term) || primary.contains(query_term))
            && name_terms.iter().any(|t| name.contains(t))
        {
            score += 3;
        }
    }

    // Synonym hits on the name
    for expansion in expansions {
        if name.contains(expansion) {
            score += 1;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine() -> SearchEngine {
        let raw = json!({
            "categories": {
                "a_cleaning": {
                    "name": "Cleaning Products",
                    "products": [
                        { "id": 1, "name": "Floor Cleaner Ultra", "mrp": 99 },
                        { "id": 2, "name": "Multi-Purpose Cleaner", "mrp": 89 },
                        { "id": 3, "name": "Liquid Detergent Premium", "mrp": 150,
                          "keywords": ["washing liquid", "laundry"] },
                        { "id": 4, "name": "Phenyl Compound White", "mrp": 60 }
                    ]
                },
                "b_tools": {
                    "name": "Cleaning Tools",
                    "products": [
                        { "id": 5, "name": "Heavy Duty Broom", "mrp": 120,
                          "keywords": ["jhadu", "sweeper"] },
                        { "id": 6, "name": "Carpet Brush", "mrp": 45 }
                    ]
                },
                "c_chemicals": {
                    "name": "Chemical - Raw Materials",
                    "products": [
                        { "id": 7, "name": "Acetic Acid", "mrp": 180,
                          "description": "industrial grade" }
                    ]
                }
            }
        });
        let index = CatalogIndex::build(&raw).unwrap();
        SearchEngine::new(Arc::new(index))
    }

    #[test]
    fn test_exact_name_match_ranks_first() {
        let engine = engine();
        let results = engine.search("broom", 5);
        assert!(!results.is_empty());
        assert_eq!(results[0].name, "Heavy Duty Broom");
    }

    #[test]
    fn test_boost_precedence() {
        let engine = engine();
        let results = engine.search_scored("floor cleaner", 5);

        let floor = results
            .iter()
            .find(|m| m.product.name == "Floor Cleaner Ultra")
            .unwrap();
        let multi = results
            .iter()
            .find(|m| m.product.name == "Multi-Purpose Cleaner")
            .unwrap();
        assert!(floor.score > multi.score);
        assert_eq!(results[0].product.name, "Floor Cleaner Ultra");
    }

    #[test]
    fn test_plural_singularization() {
        let engine = engine();
        let results = engine.search("brushes", 5);
        assert!(results.iter().any(|p| p.name == "Carpet Brush"));
    }

    #[test]
    fn test_typo_normalization() {
        let engine = engine();
        let results = engine.search("fenil", 5);
        assert!(results.iter().any(|p| p.name == "Phenyl Compound White"));
    }

    #[test]
    fn test_synonym_expansion_bidirectional() {
        let engine = engine();
        // "soap" maps to detergent/washing/clean via synonyms
        let results = engine.search("soap", 5);
        assert!(results.iter().any(|p| p.name == "Liquid Detergent Premium"));

        // reverse direction: "jhadu" is a synonym of broom, and the
        // keyword surface carries it too
        let results = engine.search("jhadu", 5);
        assert!(results.iter().any(|p| p.name == "Heavy Duty Broom"));
    }

    #[test]
    fn test_keyword_surface_fallback() {
        let engine = engine();
        let results = engine.search("laundry", 5);
        assert!(results.iter().any(|p| p.name == "Liquid Detergent Premium"));
    }

    #[test]
    fn test_no_match_returns_empty() {
        let engine = engine();
        assert!(engine.search("xyznotaproduct", 5).is_empty());
    }

    #[test]
    fn test_empty_and_degenerate_entities() {
        let engine = engine();
        assert!(engine.search("", 5).is_empty());
        assert!(engine.search("   ", 5).is_empty());
        assert!(engine.search("a", 5).is_empty());
        assert!(engine.search("a b c", 5).is_empty());
    }

    #[test]
    fn test_truncation() {
        let engine = engine();
        assert!(engine.search("cleaner", 1).len() <= 1);
        assert!(engine.search("cleaner", 0).is_empty());
    }

    #[test]
    fn test_normalization_idempotent() {
        let engine = engine();
        let a: Vec<String> = engine
            .search("  Floor Cleaner  ", 5)
            .iter()
            .map(|p| p.name.clone())
            .collect();
        let b: Vec<String> = engine
            .search("floor cleaner", 5)
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_catalog() {
        let engine = SearchEngine::new(Arc::new(CatalogIndex::empty()));
        assert!(engine.search("broom", 5).is_empty());
    }

    #[test]
    fn test_determinism() {
        let engine = engine();
        let first: Vec<String> = engine
            .search("cleaner", 5)
            .iter()
            .map(|p| p.name.clone())
            .collect();
        for _ in 0..5 {
            let again: Vec<String> = engine
                .search("cleaner", 5)
                .iter()
                .map(|p| p.name.clone())
                .collect();
            assert_eq!(again, first);
        }
    }
}
