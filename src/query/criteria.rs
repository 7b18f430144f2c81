//! Search criteria and their parsing from query parameters
//!
//! Recognized parameters: `types`, `evo`, `totalgt`, `totallt`, `sortby`,
//! `order`. Unknown parameters are ignored. An unrecognized `sortby` value
//! disables sorting rather than failing.

use std::collections::HashMap;

use super::errors::{QueryError, QueryResult};
use super::filters::Filter;

/// Field a search can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Total,
}

impl SortField {
    /// Parses a `sortby` value. Returns None for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(SortField::Id),
            "name" => Some(SortField::Name),
            "total" => Some(SortField::Total),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Total => "total",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses an `order` value. Only `desc` selects descending.
    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by
    pub field: SortField,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Optional, independently combinable search criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Labels that must all be present on a match
    pub types: Option<Vec<String>>,
    /// Keep only records with (true) or without (false) an evolution
    pub has_evolution: Option<bool>,
    /// Exclusive lower bound on `total`
    pub total_greater_than: Option<i64>,
    /// Exclusive upper bound on `total`
    pub total_less_than: Option<i64>,
    /// Final ordering
    pub sort: Option<SortSpec>,
}

impl SearchCriteria {
    /// Creates empty criteria (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires every comma-separated label in `types`
    pub fn with_types(mut self, types: &str) -> Self {
        self.types = Some(split_types(types));
        self
    }

    pub fn with_evolution(mut self, has_evolution: bool) -> Self {
        self.has_evolution = Some(has_evolution);
        self
    }

    pub fn with_total_greater_than(mut self, bound: i64) -> Self {
        self.total_greater_than = Some(bound);
        self
    }

    pub fn with_total_less_than(mut self, bound: i64) -> Self {
        self.total_less_than = Some(bound);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Parses criteria from raw query parameters
    pub fn from_params(params: &HashMap<String, String>) -> QueryResult<Self> {
        let mut criteria = SearchCriteria::new();

        if let Some(types) = params.get("types") {
            criteria.types = Some(split_types(types));
        }
        if let Some(evo) = params.get("evo") {
            criteria.has_evolution = Some(parse_bool("evo", evo)?);
        }
        if let Some(bound) = params.get("totalgt") {
            criteria.total_greater_than = Some(parse_bound("totalgt", bound)?);
        }
        if let Some(bound) = params.get("totallt") {
            criteria.total_less_than = Some(parse_bound("totallt", bound)?);
        }
        if let Some(field) = params.get("sortby").and_then(|v| SortField::parse(v)) {
            let direction = params
                .get("order")
                .map(|v| SortDirection::parse(v))
                .unwrap_or_default();
            criteria.sort = Some(SortSpec { field, direction });
        }

        Ok(criteria)
    }

    /// The present filters, in execution order
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(4);
        if let Some(types) = &self.types {
            filters.push(Filter::Types(types.clone()));
        }
        if let Some(has_evolution) = self.has_evolution {
            filters.push(Filter::HasEvolution(has_evolution));
        }
        if let Some(bound) = self.total_greater_than {
            filters.push(Filter::TotalGreaterThan(bound));
        }
        if let Some(bound) = self.total_less_than {
            filters.push(Filter::TotalLessThan(bound));
        }
        filters
    }

    /// True when no filter and no sort was requested
    pub fn is_unconstrained(&self) -> bool {
        self.types.is_none()
            && self.has_evolution.is_none()
            && self.total_greater_than.is_none()
            && self.total_less_than.is_none()
            && self.sort.is_none()
    }
}

/// Labels are taken verbatim between commas.
fn split_types(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

fn parse_bool(name: &str, value: &str) -> QueryResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(QueryError::InvalidParam(format!(
            "{} must be 'true' or 'false', got '{}'",
            name, value
        ))),
    }
}

fn parse_bound(name: &str, value: &str) -> QueryResult<i64> {
    value.trim().parse().map_err(|_| {
        QueryError::InvalidParam(format!("{} must be an integer, got '{}'", name, value))
    })
}
