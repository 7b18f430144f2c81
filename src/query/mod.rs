//! Query engine for Pokémon search
//!
//! # Execution Flow (strict order)
//!
//! 1. Return the whole collection when no criterion applies
//! 2. Run each present filter in the order types, evolution, total > n, total < n
//! 3. Sort (if a recognized sort field was given)
//! 4. Return the matches, or `QueryError::NoMatch` when nothing is left
//!
//! A filter step whose input is empty scans the full collection instead.
//! The sort step does the same.

mod criteria;
mod engine;
mod errors;
mod filters;
mod sorter;

pub use criteria::{SearchCriteria, SortDirection, SortField, SortSpec};
pub use engine::QueryEngine;
pub use errors::{QueryError, QueryResult};
pub use filters::Filter;
pub use sorter::ResultSorter;
