//! Outbound ports - Capabilities the application requires from adapters

mod repository_port;

pub use repository_port::{PokemonRepositoryPort, RepositoryError};
