//! Product records
//!
//! A [`ProductRecord`] is the flattened, fully-typed form of one catalog
//! entry. All derived fields are computed exactly once here, at build
//! time; request handling never re-derives them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One sellable product plus its derived search surface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    /// Opaque identifier, unique within the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Display name of the owning category, denormalized at build time
    pub category: String,
    /// Price in rupees; absent prices render as "N/A"
    pub price: Option<f64>,
    /// Optional free-text description
    pub description: Option<String>,
    /// Search-bait terms from the catalog document
    pub keywords: Vec<String>,
    /// Lowercase concatenation of name, category, description and
    /// keywords. Regenerated whenever the record is rebuilt; never
    /// stored independently of its inputs.
    pub search_text: String,
}

impl ProductRecord {
    /// Build a record from one raw product object.
    ///
    /// Returns `None` when the object has no usable name; the caller
    /// logs and skips such entries rather than failing the whole build.
    pub fn from_raw(raw: &Value, category_name: &str) -> Option<Self> {
        let name = raw.get("name")?.as_str()?.trim();
        if name.is_empty() {
            return None;
        }

        let id = match raw.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        // The source catalog uses "mrp"; older exports used "price"
        let price = raw
            .get("mrp")
            .or_else(|| raw.get("price"))
            .and_then(Value::as_f64);

        let description = raw
            .get("description")
            .and_then(Value::as_str)
            .map(|s| s.to_string());

        let keywords: Vec<String> = raw
            .get("keywords")
            .and_then(Value::as_array)
            .map(|kws| {
                kws.iter()
                    .filter_map(Value::as_str)
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default();

        let search_text = build_search_text(name, category_name, description.as_deref(), &keywords);

        Some(Self {
            id,
            name: name.to_string(),
            category: category_name.to_string(),
            price,
            description,
            keywords,
            search_text,
        })
    }
}

fn build_search_text(
    name: &str,
    category: &str,
    description: Option<&str>,
    keywords: &[String],
) -> String {
    format!(
        "{} {} {} {}",
        name,
        category,
        description.unwrap_or(""),
        keywords.join(" ")
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_full() {
        let raw = json!({
            "id": 42,
            "name": "Heavy Duty Broom",
            "mrp": 120.0,
            "description": "Stiff bristles for outdoor use",
            "keywords": ["jhadu", "sweeper"]
        });

        let record = ProductRecord::from_raw(&raw, "Cleaning Tools").unwrap();
        assert_eq!(record.id, "42");
        assert_eq!(record.name, "Heavy Duty Broom");
        assert_eq!(record.category, "Cleaning Tools");
        assert_eq!(record.price, Some(120.0));
        assert!(record.search_text.contains("heavy duty broom"));
        assert!(record.search_text.contains("cleaning tools"));
        assert!(record.search_text.contains("jhadu"));
    }

    #[test]
    fn test_from_raw_minimal() {
        let raw = json!({ "name": "Phenyl Compound" });

        let record = ProductRecord::from_raw(&raw, "Chemicals").unwrap();
        assert_eq!(record.id, "");
        assert_eq!(record.price, None);
        assert!(record.keywords.is_empty());
        assert_eq!(record.search_text, "phenyl compound chemicals  ");
    }

    #[test]
    fn test_mrp_preferred_over_price() {
        let raw = json!({ "name": "Dish Wash Gel", "mrp": 95, "price": 80 });
        let record = ProductRecord::from_raw(&raw, "Cleaning").unwrap();
        assert_eq!(record.price, Some(95.0));
    }

    #[test]
    fn test_missing_name_is_skipped() {
        assert!(ProductRecord::from_raw(&json!({ "id": 1 }), "X").is_none());
        assert!(ProductRecord::from_raw(&json!({ "name": "  " }), "X").is_none());
    }
}
