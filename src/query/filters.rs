//! Predicate filtering for search execution
//!
//! Each filter is a single predicate over a Pokémon. Filters compose by
//! running one after another; see `QueryEngine` for how inputs are chosen.

use crate::catalog::Pokemon;

/// A single search predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Every listed label must be among the record's types
    Types(Vec<String>),
    /// Evolution presence must equal the flag
    HasEvolution(bool),
    /// `total` strictly greater than the bound
    TotalGreaterThan(i64),
    /// `total` strictly less than the bound
    TotalLessThan(i64),
}

impl Filter {
    /// Checks if a record satisfies this filter
    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        match self {
            Filter::Types(required) => pokemon.has_all_types(required),
            Filter::HasEvolution(expected) => pokemon.has_evolution() == *expected,
            Filter::TotalGreaterThan(bound) => i64::from(pokemon.total) > *bound,
            Filter::TotalLessThan(bound) => i64::from(pokemon.total) < *bound,
        }
    }

    /// Query parameter this filter came from
    pub fn param_name(&self) -> &'static str {
        match self {
            Filter::Types(_) => "types",
            Filter::HasEvolution(_) => "evo",
            Filter::TotalGreaterThan(_) => "totalgt",
            Filter::TotalLessThan(_) => "totallt",
        }
    }

    /// Keeps the records of `candidates` that satisfy this filter, in order
    pub fn apply<'a, I>(&self, candidates: I) -> Vec<&'a Pokemon>
    where
        I: IntoIterator<Item = &'a Pokemon>,
    {
        candidates.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pokemon(id: u32, types: &[&str], total: u32, evolution_id: Option<u32>) -> Pokemon {
        Pokemon {
            id,
            name: format!("pokemon-{}", id),
            types: types.iter().map(|t| t.to_string()).collect(),
            total,
            hp: 0,
            attack: 0,
            defense: 0,
            attack_special: 0,
            defense_special: 0,
            speed: 0,
            evolution_id,
        }
    }

    #[test]
    fn test_types_subset_match() {
        let charizard = make_pokemon(6, &["Fire", "Flying"], 534, None);
        let filter = Filter::Types(vec!["Fire".into(), "Flying".into()]);
        assert!(filter.matches(&charizard));

        let charmander = make_pokemon(4, &["Fire"], 309, Some(5));
        assert!(!filter.matches(&charmander));
    }

    #[test]
    fn test_types_exact_label() {
        let pokemon = make_pokemon(1, &["Fire", "Flying"], 100, None);
        assert!(!Filter::Types(vec![" Flying".into()]).matches(&pokemon));
        assert!(!Filter::Types(vec!["".into()]).matches(&pokemon));
    }

    #[test]
    fn test_evolution_presence() {
        let evolves = make_pokemon(1, &["Grass"], 318, Some(2));
        let final_form = make_pokemon(3, &["Grass"], 525, None);

        assert!(Filter::HasEvolution(true).matches(&evolves));
        assert!(!Filter::HasEvolution(true).matches(&final_form));
        assert!(Filter::HasEvolution(false).matches(&final_form));
        assert!(!Filter::HasEvolution(false).matches(&evolves));
    }

    #[test]
    fn test_total_bounds_are_exclusive() {
        let pokemon = make_pokemon(1, &["Normal"], 500, None);

        assert!(!Filter::TotalGreaterThan(500).matches(&pokemon));
        assert!(Filter::TotalGreaterThan(499).matches(&pokemon));
        assert!(!Filter::TotalLessThan(500).matches(&pokemon));
        assert!(Filter::TotalLessThan(501).matches(&pokemon));
        assert!(Filter::TotalGreaterThan(-10).matches(&pokemon));
    }

    #[test]
    fn test_apply_preserves_order() {
        let records = vec![
            make_pokemon(3, &["Water"], 530, None),
            make_pokemon(1, &["Water"], 314, Some(2)),
            make_pokemon(2, &["Fire"], 405, None),
        ];
        let kept = Filter::Types(vec!["Water".into()]).apply(&records);
        let ids: Vec<u32> = kept.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
