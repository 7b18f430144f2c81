//! In-memory Pokémon store
//!
//! Records live in a `BTreeMap` keyed by id behind a `RwLock`, so reads run
//! concurrently and each mutation is exclusive. Listing order is ascending id.

use std::collections::{BTreeMap, BTreeSet};

use tokio::sync::RwLock;

use super::errors::{CatalogError, CatalogResult};
use super::pokemon::Pokemon;

/// Owned, lock-guarded collection of Pokémon keyed by id
#[derive(Debug, Default)]
pub struct CatalogStore {
    records: RwLock<BTreeMap<u32, Pokemon>>,
}

impl CatalogStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from loaded records.
    ///
    /// Fails on the first invalid record or duplicate id.
    pub fn from_records(records: Vec<Pokemon>) -> CatalogResult<Self> {
        let mut map = BTreeMap::new();
        for record in records {
            record.validate()?;
            if map.contains_key(&record.id) {
                return Err(CatalogError::AlreadyExists(record.id));
            }
            map.insert(record.id, record);
        }
        Ok(Self {
            records: RwLock::new(map),
        })
    }

    /// Number of records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Copy of every record in id order.
    ///
    /// Queries run over this snapshot without holding the lock.
    pub async fn snapshot(&self) -> Vec<Pokemon> {
        self.records.read().await.values().cloned().collect()
    }

    /// Fetches a record by id
    pub async fn get(&self, id: u32) -> CatalogResult<Pokemon> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    /// Inserts a new record. Existing ids are never overwritten.
    pub async fn create(&self, pokemon: Pokemon) -> CatalogResult<Pokemon> {
        pokemon.validate()?;

        let mut records = self.records.write().await;
        if records.contains_key(&pokemon.id) {
            return Err(CatalogError::AlreadyExists(pokemon.id));
        }
        records.insert(pokemon.id, pokemon.clone());
        tracing::info!(id = pokemon.id, name = %pokemon.name, "pokemon created");
        Ok(pokemon)
    }

    /// Replaces the record stored under `id`.
    ///
    /// The replacement must carry the same id so keys stay consistent.
    pub async fn update(&self, id: u32, pokemon: Pokemon) -> CatalogResult<Pokemon> {
        pokemon.validate()?;
        if pokemon.id != id {
            return Err(CatalogError::InvalidRecord(format!(
                "body id {} does not match path id {}",
                pokemon.id, id
            )));
        }

        let mut records = self.records.write().await;
        let slot = records.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        *slot = pokemon.clone();
        tracing::info!(id, "pokemon updated");
        Ok(pokemon)
    }

    /// Removes and returns the record stored under `id`
    pub async fn delete(&self, id: u32) -> CatalogResult<Pokemon> {
        let removed = self
            .records
            .write()
            .await
            .remove(&id)
            .ok_or(CatalogError::NotFound(id))?;
        tracing::info!(id, "pokemon deleted");
        Ok(removed)
    }

    /// Every distinct type label, sorted
    pub async fn types(&self) -> Vec<String> {
        let records = self.records.read().await;
        let labels: BTreeSet<&String> = records.values().flat_map(|p| p.types.iter()).collect();
        labels.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pokemon(id: u32, name: &str, types: &[&str]) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            total: 300,
            hp: 50,
            attack: 50,
            defense: 50,
            attack_special: 50,
            defense_special: 50,
            speed: 50,
            evolution_id: None,
        }
    }

    fn seeded() -> CatalogStore {
        CatalogStore::from_records(vec![
            make_pokemon(1, "Bulbasaur", &["Grass", "Poison"]),
            make_pokemon(4, "Charmander", &["Fire"]),
            make_pokemon(7, "Squirtle", &["Water"]),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_from_records_rejects_duplicate_ids() {
        let err = CatalogStore::from_records(vec![
            make_pokemon(1, "Bulbasaur", &["Grass"]),
            make_pokemon(1, "Ivysaur", &["Grass"]),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::AlreadyExists(1));
    }

    #[tokio::test]
    async fn test_snapshot_in_id_order() {
        let store = seeded();
        store.create(make_pokemon(2, "Ivysaur", &["Grass"])).await.unwrap();

        let ids: Vec<u32> = store.snapshot().await.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 7]);
        assert_eq!(store.len().await, 4);
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = CatalogStore::new();
        assert!(store.is_empty().await);

        let pikachu = make_pokemon(25, "Pikachu", &["Electric"]);
        store.create(pikachu.clone()).await.unwrap();
        assert_eq!(store.get(25).await.unwrap(), pikachu);
    }

    #[tokio::test]
    async fn test_create_duplicate_keeps_original() {
        let store = seeded();
        let err = store
            .create(make_pokemon(4, "Impostor", &["Normal"]))
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::AlreadyExists(4));
        assert_eq!(store.get(4).await.unwrap().name, "Charmander");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_record() {
        let store = CatalogStore::new();
        let err = store.create(make_pokemon(3, "", &["Grass"])).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update() {
        let store = seeded();
        let mut charmander = store.get(4).await.unwrap();
        charmander.evolution_id = Some(5);

        store.update(4, charmander.clone()).await.unwrap();
        assert_eq!(store.get(4).await.unwrap(), charmander);
    }

    #[tokio::test]
    async fn test_update_missing_id() {
        let store = seeded();
        let err = store
            .update(99, make_pokemon(99, "Missingno", &["Bird"]))
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::NotFound(99));
    }

    #[tokio::test]
    async fn test_update_rejects_id_mismatch() {
        let store = seeded();
        let err = store
            .update(4, make_pokemon(5, "Charmeleon", &["Fire"]))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord(_)));
        assert!(store.get(5).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let store = seeded();
        let removed = store.delete(7).await.unwrap();
        assert_eq!(removed.name, "Squirtle");
        assert_eq!(store.get(7).await.unwrap_err(), CatalogError::NotFound(7));
        assert_eq!(store.delete(7).await.unwrap_err(), CatalogError::NotFound(7));
    }

    #[tokio::test]
    async fn test_types_sorted_and_distinct() {
        let store = seeded();
        store.create(make_pokemon(10, "Caterpie", &["Bug", "Grass"])).await.unwrap();
        assert_eq!(
            store.types().await,
            vec!["Bug", "Fire", "Grass", "Poison", "Water"]
        );
    }
}
