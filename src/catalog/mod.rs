//! Catalog subsystem for pokedex
//!
//! Owns the Pokémon records served by the HTTP API.
//!
//! # Lifecycle
//!
//! 1. `load_catalog` reads the JSON source file once at startup
//! 2. Records are placed in a `CatalogStore`, keyed by id
//! 3. Handlers mutate the store through create/update/delete
//! 4. Nothing is written back; the store is dropped on exit
//!
//! # Invariants
//!
//! - Store keys always equal the record's own `id`
//! - A create never overwrites an existing id

mod errors;
mod loader;
mod pokemon;
mod store;

pub use errors::{CatalogError, CatalogResult};
pub use loader::{load_catalog, parse_catalog};
pub use pokemon::Pokemon;
pub use store::CatalogStore;
