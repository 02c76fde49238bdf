//! Pokémon domain - lookup keys, summaries and payload mapping

mod entity;
mod key;
mod mapper;
mod source;

pub use entity::{PokemonAbility, PokemonStat, PokemonSummary};
pub use key::{validate_identifier, LookupKey};
pub use mapper::{PayloadMapper, MOVE_DISPLAY_LIMIT};
pub use source::PokemonSource;

#[cfg(test)]
pub use source::MockPokemonSource;
