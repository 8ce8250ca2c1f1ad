//! Catalog file loading
//!
//! File I/O and JSON parsing live here, outside the pure index builder.

use std::path::Path;

use serde_json::Value;

use crate::CatalogError;

/// Read and parse a catalog JSON document from disk.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Value, CatalogError> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path)
        .map_err(|_| CatalogError::FileNotFound(path.display().to_string()))?;

    serde_json::from_str(&contents).map_err(|e| CatalogError::Parse(e.to_string()))
}
