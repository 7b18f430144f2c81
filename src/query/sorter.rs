//! Result sorting for search execution
//!
//! Sorts by a single field, deterministically.

use std::cmp::Ordering;

use super::criteria::{SortDirection, SortField, SortSpec};
use crate::catalog::Pokemon;

/// Sorts search results
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records according to the sort specification.
    ///
    /// Sort is stable in both directions: records with equal keys keep their
    /// input order even when descending.
    pub fn sort<P: AsRef<Pokemon>>(records: &mut [P], spec: &SortSpec) {
        records.sort_by(|a, b| {
            let ordering = Self::compare(a.as_ref(), b.as_ref(), spec.field);

            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    /// Natural order of the field: numeric for id and total, lexicographic
    /// for name.
    fn compare(a: &Pokemon, b: &Pokemon, field: SortField) -> Ordering {
        match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Total => a.total.cmp(&b.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pokemon(id: u32, name: &str, total: u32) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            types: vec!["Normal".to_string()],
            total,
            hp: 0,
            attack: 0,
            defense: 0,
            attack_special: 0,
            defense_special: 0,
            speed: 0,
            evolution_id: None,
        }
    }

    fn names(records: &[Pokemon]) -> Vec<&str> {
        records.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let mut records = vec![
            make_pokemon(1, "Bulbasaur", 318),
            make_pokemon(4, "Charmander", 309),
            make_pokemon(63, "Abra", 310),
        ];

        ResultSorter::sort(&mut records, &SortSpec::asc(SortField::Name));

        assert_eq!(names(&records), vec!["Abra", "Bulbasaur", "Charmander"]);
    }

    #[test]
    fn test_sort_by_name_descending() {
        let mut records = vec![
            make_pokemon(1, "Bulbasaur", 318),
            make_pokemon(4, "Charmander", 309),
            make_pokemon(63, "Abra", 310),
        ];

        ResultSorter::sort(&mut records, &SortSpec::desc(SortField::Name));

        assert_eq!(names(&records), vec!["Charmander", "Bulbasaur", "Abra"]);
    }

    #[test]
    fn test_sort_by_total_is_numeric() {
        let mut records = vec![
            make_pokemon(1, "a", 1000),
            make_pokemon(2, "b", 95),
            make_pokemon(3, "c", 600),
        ];

        ResultSorter::sort(&mut records, &SortSpec::asc(SortField::Total));

        let totals: Vec<u32> = records.iter().map(|p| p.total).collect();
        assert_eq!(totals, vec![95, 600, 1000]);
    }

    #[test]
    fn test_sort_by_id_descending() {
        let mut records = vec![
            make_pokemon(10, "a", 0),
            make_pokemon(2, "b", 0),
            make_pokemon(33, "c", 0),
        ];

        ResultSorter::sort(&mut records, &SortSpec::desc(SortField::Id));

        let ids: Vec<u32> = records.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![33, 10, 2]);
    }

    #[test]
    fn test_sort_stable_both_directions() {
        let records = vec![
            make_pokemon(1, "first", 500),
            make_pokemon(2, "second", 500),
            make_pokemon(3, "low", 100),
        ];

        let mut asc = records.clone();
        ResultSorter::sort(&mut asc, &SortSpec::asc(SortField::Total));
        assert_eq!(names(&asc), vec!["low", "first", "second"]);

        let mut desc = records;
        ResultSorter::sort(&mut desc, &SortSpec::desc(SortField::Total));
        assert_eq!(names(&desc), vec!["first", "second", "low"]);
    }
}
