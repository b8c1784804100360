//! Pokedex Service - Application service for dataset queries
//!
//! The dataset is read-only, so the single use case is a parameterized
//! search: optional name filter, list or random-one selection.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::application::ports::outbound::{PokemonRepositoryPort, RepositoryError};
use crate::domain::entities::Pokemon;
use crate::domain::value_objects::PokemonQuery;

/// Pokedex service trait defining the application use cases
#[async_trait]
pub trait PokedexService: Send + Sync {
    /// Search the dataset; row order is whatever the repository returned
    async fn search(&self, query: PokemonQuery) -> Result<Vec<Pokemon>, RepositoryError>;
}

/// Default implementation of PokedexService backed by the repository port
pub struct PokedexServiceImpl {
    repository: Arc<dyn PokemonRepositoryPort>,
}

impl PokedexServiceImpl {
    /// Create a new PokedexServiceImpl with the given repository
    pub fn new(repository: Arc<dyn PokemonRepositoryPort>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PokedexService for PokedexServiceImpl {
    #[instrument(skip(self), fields(filter = ?query.name_filter(), random = query.is_random()))]
    async fn search(&self, query: PokemonQuery) -> Result<Vec<Pokemon>, RepositoryError> {
        let pokemon = self.repository.search(&query).await?;
        debug!(count = pokemon.len(), "Fetched pokemon from repository");
        Ok(pokemon)
    }
}
