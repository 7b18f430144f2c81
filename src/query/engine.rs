//! Search execution over a snapshot of the catalog

use super::criteria::SearchCriteria;
use super::errors::{QueryError, QueryResult};
use super::sorter::ResultSorter;
use crate::catalog::Pokemon;

/// Stateless search engine
pub struct QueryEngine;

impl QueryEngine {
    /// Runs a search over `records`.
    ///
    /// With no filter and no recognized sort, every record is returned (even
    /// when `records` is empty). Otherwise an empty outcome is reported as
    /// `QueryError::NoMatch`.
    pub fn search(records: &[Pokemon], criteria: &SearchCriteria) -> QueryResult<Vec<Pokemon>> {
        if criteria.is_unconstrained() {
            return Ok(records.to_vec());
        }

        let mut active: Vec<&Pokemon> = Vec::new();

        for filter in criteria.filters() {
            active = if active.is_empty() {
                // An empty input, whether from the start or from an earlier
                // step, means the full collection is scanned.
                filter.apply(records)
            } else {
                filter.apply(active)
            };
            tracing::trace!(param = filter.param_name(), remaining = active.len(), "filter applied");
        }

        if let Some(spec) = &criteria.sort {
            if active.is_empty() {
                active = records.iter().collect();
            }
            tracing::trace!(
                sort = spec.field.as_str(),
                order = spec.direction.as_str(),
                candidates = active.len(),
                "sorting"
            );
            ResultSorter::sort(&mut active, spec);
        }

        if active.is_empty() {
            tracing::debug!(?criteria, "search matched nothing");
            return Err(QueryError::NoMatch);
        }

        tracing::debug!(matches = active.len(), "search complete");
        Ok(active.into_iter().cloned().collect())
    }
}
