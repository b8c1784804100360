//! Value objects - Immutable objects defined by their attributes

mod query;

pub use query::{PokemonQuery, SelectionMode};
