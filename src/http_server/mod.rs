//! # Pokedex HTTP Server Module
//!
//! Combines the status and Pokémon routers into a single Axum server.
//!
//! # Endpoints
//!
//! - `/`, `/health` - Liveness
//! - `/pokemons`, `/pokemon/{id}`, `/pokemon/` - CRUD
//! - `/types`, `/total_pokemons` - Catalog summaries
//! - `/pokemon/search/` - Filtered, sorted search

pub mod config;
pub mod errors;
pub mod pokemon_routes;
pub mod server;
pub mod status_routes;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, RestError, RestResult};
pub use server::HttpServer;
