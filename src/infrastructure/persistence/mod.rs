//! PostgreSQL persistence adapters
//!
//! This module implements the repository port against the pokemon table,
//! reached through a shared connection pool.

mod connection;
mod pokemon_repository;

pub use connection::PgDatabase;
pub use pokemon_repository::PgPokemonRepository;
