//! Query error types

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Criteria were given but no record satisfies them
    #[error("No pokemon matches the search criteria")]
    NoMatch,

    /// A search parameter could not be parsed
    #[error("Invalid query parameter: {0}")]
    InvalidParam(String),
}
