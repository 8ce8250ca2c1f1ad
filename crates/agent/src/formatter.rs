//! Response formatting
//!
//! Renders ranked search results, price cards, and category lists into
//! the localized display strings sent back over WhatsApp. Empty result
//! lists always render the localized no-results message; the customer
//! never gets a blank reply.

use commerce_bot_catalog::ProductRecord;
use commerce_bot_config::templates::{render, ResponseTemplates};
use commerce_bot_core::Language;

/// Formats catalog data into reply text
#[derive(Debug, Clone, Default)]
pub struct ResponseFormatter {
    templates: ResponseTemplates,
}

impl ResponseFormatter {
    pub fn new(templates: ResponseTemplates) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &ResponseTemplates {
        &self.templates
    }

    /// Render a ranked result list
    pub fn format_results(
        &self,
        products: &[&ProductRecord],
        language: Language,
        query: &str,
    ) -> String {
        if products.is_empty() {
            return self.no_results(language, query);
        }

        let set = self.templates.set(language);
        let mut out = render(
            &set.search_results_header,
            &[
                ("count", &products.len().to_string()),
                ("query", query),
            ],
        );
        out.push_str("\n\n");

        for (i, product) in products.iter().enumerate() {
            out.push_str(&format!(
                "{}. *{}*\n   💰 ₹{} | 📂 {}\n",
                i + 1,
                product.name,
                display_price(product),
                product.category,
            ));
        }

        out
    }

    /// Render a price card for the best match
    pub fn format_price(&self, product: &ProductRecord, language: Language) -> String {
        let set = self.templates.set(language);
        render(
            &set.price_info,
            &[
                ("name", product.name.as_str()),
                ("price", &display_price(product)),
                ("category", product.category.as_str()),
                ("id", product.id.as_str()),
            ],
        )
    }

    /// Render the category list
    pub fn format_categories(&self, categories: &[String], language: Language) -> String {
        let set = self.templates.set(language);
        let mut out = set.categories_header.clone();
        out.push_str("\n\n");
        for (i, name) in categories.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, name));
        }
        out
    }

    /// Localized no-results message
    pub fn no_results(&self, language: Language, query: &str) -> String {
        render(&self.templates.set(language).no_results, &[("query", query)])
    }
}

fn display_price(product: &ProductRecord) -> String {
    match product.price {
        Some(price) if price.fract() == 0.0 => format!("{price:.0}"),
        Some(price) => format!("{price:.2}"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commerce_bot_catalog::CatalogIndex;
    use serde_json::json;

    fn index() -> CatalogIndex {
        CatalogIndex::build(&json!({
            "categories": {
                "cleaning": {
                    "name": "Cleaning Products",
                    "products": [
                        { "id": 1, "name": "Floor Cleaner Ultra", "mrp": 99 },
                        { "id": 2, "name": "Soap Oil" }
                    ]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_format_results() {
        let index = index();
        let formatter = ResponseFormatter::default();
        let products: Vec<&ProductRecord> = index.products().iter().collect();

        let out = formatter.format_results(&products, Language::English, "cleaner");
        assert!(out.contains("Found 2 products"));
        assert!(out.contains("1. *Floor Cleaner Ultra*"));
        assert!(out.contains("₹99"));
    }

    #[test]
    fn test_missing_price_renders_na() {
        let index = index();
        let formatter = ResponseFormatter::default();

        let out = formatter.format_price(&index.products()[1], Language::English);
        assert!(out.contains("₹N/A"));
    }

    #[test]
    fn test_empty_results_render_no_results() {
        let formatter = ResponseFormatter::default();
        let out = formatter.format_results(&[], Language::English, "xyz");
        assert!(out.contains("No products found"));
        assert!(out.contains("xyz"));
        assert!(!out.is_empty());
    }

    #[test]
    fn test_localized_no_results() {
        let formatter = ResponseFormatter::default();
        let out = formatter.no_results(Language::Hindi, "broom");
        assert!(out.contains("उत्पाद नहीं मिले"));
    }

    #[test]
    fn test_format_categories() {
        let formatter = ResponseFormatter::default();
        let out = formatter.format_categories(
            &["Cleaning Products".to_string(), "Perfumes".to_string()],
            Language::English,
        );
        assert!(out.contains("1. Cleaning Products"));
        assert!(out.contains("2. Perfumes"));
    }
}
