//! pokedex - an in-memory Pokémon catalog served over HTTP
//!
//! # Layout
//!
//! - `catalog`: record type, source file loader, lock-guarded store
//! - `query`: search criteria, filters, sorting and the search engine
//! - `http_server`: Axum routes and server
//! - `cli`: `serve` and `search` commands

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod query;
