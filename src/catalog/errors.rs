//! Catalog error types

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No record with this id
    #[error("Pokemon {0} does not exist")]
    NotFound(u32),

    /// Create attempted with an id already present
    #[error("Pokemon {0} already exists")]
    AlreadyExists(u32),

    /// Record violates the data model
    #[error("Invalid pokemon: {0}")]
    InvalidRecord(String),

    /// Source file could not be read or parsed
    #[error("Failed to load catalog from {path}: {reason}")]
    LoadFailed { path: String, reason: String },
}

impl CatalogError {
    /// Create a load failure for the given source path
    pub fn load_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
