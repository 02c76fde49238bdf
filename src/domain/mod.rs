//! Domain layer - Core business logic and entities

pub mod error;
pub mod pokemon;

pub use error::DomainError;
pub use pokemon::{
    LookupKey, PayloadMapper, PokemonAbility, PokemonSource, PokemonStat, PokemonSummary,
};
