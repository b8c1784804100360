//! Application services - Use case implementations

pub mod pokedex_service;

pub use pokedex_service::{PokedexService, PokedexServiceImpl};
