//! Pokémon record type

use serde::{Deserialize, Serialize};

use super::errors::{CatalogError, CatalogResult};

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Unique, positive identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Category labels, in display order
    pub types: Vec<String>,
    /// Sum of the base stats
    pub total: u32,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub attack_special: u32,
    pub defense_special: u32,
    pub speed: u32,
    /// Id of the Pokémon this one evolves into
    #[serde(default)]
    pub evolution_id: Option<u32>,
}

impl Pokemon {
    /// Checks the record against the data model.
    ///
    /// Id must be positive, name and types non-empty.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.id == 0 {
            return Err(CatalogError::InvalidRecord("id must be >= 1".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidRecord(format!(
                "pokemon {} has an empty name",
                self.id
            )));
        }
        if self.types.is_empty() {
            return Err(CatalogError::InvalidRecord(format!(
                "pokemon {} has no types",
                self.id
            )));
        }
        Ok(())
    }

    /// Returns true if every label in `required` is one of this record's types
    pub fn has_all_types<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required
            .iter()
            .all(|label| self.types.iter().any(|t| t == label.as_ref()))
    }

    /// Returns true if an evolution is recorded
    pub fn has_evolution(&self) -> bool {
        self.evolution_id.is_some()
    }
}

impl AsRef<Pokemon> for Pokemon {
    fn as_ref(&self) -> &Pokemon {
        self
    }
}
