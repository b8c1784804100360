//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::PokedexServiceImpl;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{PgDatabase, PgPokemonRepository};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub pokedex_service: PokedexServiceImpl,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let database = PgDatabase::new(&config.database);

        // The pool is lazy; an unreachable database logs a warning here
        // instead of aborting startup
        if let Err(e) = database.initialize_schema().await {
            tracing::warn!("Skipping schema initialization: {e:#}");
        }

        let repository = Arc::new(PgPokemonRepository::new(database));
        let pokedex_service = PokedexServiceImpl::new(repository);

        Ok(Self {
            config,
            pokedex_service,
        })
    }
}
