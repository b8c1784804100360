//! Repository port - Interface for data access
//!
//! The application service depends on this trait, not on a concrete
//! database adapter, so pooled or mocked backends substitute freely.

use async_trait::async_trait;

use crate::domain::entities::Pokemon;
use crate::domain::value_objects::PokemonQuery;

/// Errors an adapter can report.
///
/// Connection failures and query failures are kept apart here; the HTTP
/// layer maps each to its own observable behavior.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database connection failed: {0}")]
    Connection(String),
    #[error("query failed: {0}")]
    Query(String),
}

/// Repository port for the read-only Pokemon dataset
#[async_trait]
pub trait PokemonRepositoryPort: Send + Sync {
    /// Run a parameterized search and return the matching rows
    async fn search(&self, query: &PokemonQuery) -> Result<Vec<Pokemon>, RepositoryError>;
}
