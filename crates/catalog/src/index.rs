//! Catalog index
//!
//! Flattens the nested category → products document into an ordered list
//! of records. The index is immutable after construction; concurrent
//! readers share it behind an `Arc` with no locking.

use serde_json::Value;

use crate::record::ProductRecord;
use crate::CatalogError;

/// Immutable, ordered product index
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    products: Vec<ProductRecord>,
    categories: Vec<String>,
}

impl CatalogIndex {
    /// Build the index from a parsed catalog document.
    ///
    /// The document must have shape
    /// `{ "categories": { key: { "name": ..., "products": [...] } } }`.
    /// Category display names default to the category key. Products
    /// without a usable name are skipped with a warning. The input is
    /// not mutated, and on error nothing is partially populated; the
    /// caller either aborts or continues with [`CatalogIndex::empty`].
    pub fn build(raw: &Value) -> Result<Self, CatalogError> {
        let categories = raw
            .get("categories")
            .and_then(Value::as_object)
            .ok_or(CatalogError::MissingCategories)?;

        let mut products = Vec::new();
        let mut category_names = Vec::new();

        for (key, category) in categories {
            let name = category
                .get("name")
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(key.as_str());

            let raw_products = category
                .get("products")
                .and_then(Value::as_array)
                .ok_or_else(|| CatalogError::MissingProducts(key.clone()))?;

            category_names.push(name.to_string());

            for raw_product in raw_products {
                match ProductRecord::from_raw(raw_product, name) {
                    Some(record) => products.push(record),
                    None => {
                        tracing::warn!(category = %name, "skipping catalog entry without a name");
                    }
                }
            }
        }

        tracing::info!(
            products = products.len(),
            categories = category_names.len(),
            "catalog index built"
        );

        Ok(Self {
            products,
            categories: category_names,
        })
    }

    /// Empty index, used for degraded mode when the document is malformed
    pub fn empty() -> Self {
        Self::default()
    }

    /// All products in insertion order
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Category display names in document order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
