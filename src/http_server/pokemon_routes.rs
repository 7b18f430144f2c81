//! Pokémon HTTP Routes
//!
//! CRUD endpoints over the catalog store plus type listing, counting and
//! search.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::errors::{RestError, RestResult};
use crate::catalog::{CatalogStore, Pokemon};
use crate::query::{QueryEngine, QueryError, SearchCriteria};

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total: usize,
}

// ==================
// Pokémon Routes
// ==================

/// Create Pokémon routes
pub fn pokemon_routes(store: Arc<CatalogStore>) -> Router {
    Router::new()
        .route("/pokemons", get(list_handler))
        .route("/total_pokemons", get(total_handler))
        .route("/types", get(types_handler))
        .route("/pokemon/", post(create_handler))
        .route("/pokemon/search/", get(search_handler))
        .route(
            "/pokemon/{id}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(store)
}

// ==================
// Helper Functions
// ==================

/// Path ids must be integers >= 1
fn parse_id(raw: &str) -> RestResult<u32> {
    match raw.parse::<u32>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(RestError::InvalidPathId(raw.to_string())),
    }
}

/// Undecodable path segments are reported like any other bad id
fn extract_id(path: Result<Path<String>, PathRejection>) -> RestResult<u32> {
    let Path(raw) = path.map_err(|rejection| RestError::InvalidPathId(rejection.body_text()))?;
    parse_id(&raw)
}

fn extract_params(
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> RestResult<HashMap<String, String>> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| QueryError::InvalidParam(rejection.body_text()).into())
}

fn decode_body(body: Result<Json<Pokemon>, JsonRejection>) -> RestResult<Pokemon> {
    body.map(|Json(pokemon)| pokemon)
        .map_err(|rejection| RestError::InvalidBody(rejection.body_text()))
}

// ==================
// Handlers
// ==================

async fn list_handler(State(store): State<Arc<CatalogStore>>) -> Json<Vec<Pokemon>> {
    Json(store.snapshot().await)
}

async fn total_handler(State(store): State<Arc<CatalogStore>>) -> Json<TotalResponse> {
    Json(TotalResponse {
        total: store.len().await,
    })
}

async fn types_handler(State(store): State<Arc<CatalogStore>>) -> Json<Vec<String>> {
    Json(store.types().await)
}

async fn get_handler(
    State(store): State<Arc<CatalogStore>>,
    path: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Pokemon>> {
    let id = extract_id(path)?;
    Ok(Json(store.get(id).await?))
}

async fn create_handler(
    State(store): State<Arc<CatalogStore>>,
    body: Result<Json<Pokemon>, JsonRejection>,
) -> RestResult<Json<Pokemon>> {
    let pokemon = decode_body(body)?;
    Ok(Json(store.create(pokemon).await?))
}

async fn update_handler(
    State(store): State<Arc<CatalogStore>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Pokemon>, JsonRejection>,
) -> RestResult<Json<Pokemon>> {
    let id = extract_id(path)?;
    let pokemon = decode_body(body)?;
    Ok(Json(store.update(id, pokemon).await?))
}

async fn delete_handler(
    State(store): State<Arc<CatalogStore>>,
    path: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Pokemon>> {
    let id = extract_id(path)?;
    Ok(Json(store.delete(id).await?))
}

async fn search_handler(
    State(store): State<Arc<CatalogStore>>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> RestResult<Json<Vec<Pokemon>>> {
    let params = extract_params(query)?;
    let criteria = SearchCriteria::from_params(&params)?;
    let snapshot = store.snapshot().await;
    Ok(Json(QueryEngine::search(&snapshot, &criteria)?))
}
