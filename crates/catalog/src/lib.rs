//! Product catalog for the commerce chatbot
//!
//! The catalog document is a nested category → products structure parsed
//! from JSON by the loader. [`CatalogIndex::build`] flattens it into an
//! immutable, ordered list of [`ProductRecord`]s, each carrying a derived
//! lowercase `search_text` used as the search engine's match surface.
//!
//! The index is built once at startup and shared behind an `Arc`; a
//! malformed document yields a [`CatalogError`] so the caller can decide
//! between aborting and serving an empty catalog in degraded mode.

pub mod index;
pub mod loader;
pub mod record;

pub use index::CatalogIndex;
pub use loader::load_catalog_file;
pub use record::ProductRecord;

use thiserror::Error;

/// Catalog load/build errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse catalog document: {0}")]
    Parse(String),

    #[error("Catalog document has no 'categories' object")]
    MissingCategories,

    #[error("Category '{0}' has no 'products' array")]
    MissingProducts(String),
}

impl From<CatalogError> for commerce_bot_core::Error {
    fn from(err: CatalogError) -> Self {
        commerce_bot_core::Error::Catalog(err.to_string())
    }
}
