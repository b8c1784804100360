//! HTTP REST API routes

mod pokemon_routes;
pub mod xml;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use pokemon_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/get_pokemon", get(pokemon_routes::get_pokemon))
}
