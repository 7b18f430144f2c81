//! Catalog loader for reading the Pokémon source file at startup
//!
//! The source is a JSON array of Pokémon objects. Each record is keyed by its
//! position in the array plus one, and that key must match the record's own
//! `id`. Any read, parse, or validation failure is fatal to startup.

use std::fs;
use std::path::Path;

use super::errors::{CatalogError, CatalogResult};
use super::pokemon::Pokemon;

/// Loads and validates the catalog file at `path`.
///
/// Records are returned in file order.
pub fn load_catalog(path: &Path) -> CatalogResult<Vec<Pokemon>> {
    let source = path.display().to_string();
    let content = fs::read_to_string(path)
        .map_err(|e| CatalogError::load_failed(&source, format!("Failed to read file: {}", e)))?;

    let records = parse_catalog(&content, &source)?;
    tracing::info!(path = %source, count = records.len(), "catalog loaded");
    Ok(records)
}

/// Parses catalog JSON. `source` names the origin in error messages.
pub fn parse_catalog(content: &str, source: &str) -> CatalogResult<Vec<Pokemon>> {
    let records: Vec<Pokemon> = serde_json::from_str(content)
        .map_err(|e| CatalogError::load_failed(source, format!("Invalid JSON: {}", e)))?;

    for (index, record) in records.iter().enumerate() {
        let key = index as u64 + 1;
        if u64::from(record.id) != key {
            return Err(CatalogError::load_failed(
                source,
                format!(
                    "record at position {} has id {}, expected {}",
                    index, record.id, key
                ),
            ));
        }
        record
            .validate()
            .map_err(|e| CatalogError::load_failed(source, e.to_string()))?;
    }

    Ok(records)
}
