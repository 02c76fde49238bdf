//! Pokémon summary entities

use serde::{Deserialize, Serialize};

/// An ability slot, flagged when it is the hidden ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub name: String,
    pub hidden: bool,
}

impl PokemonAbility {
    pub fn new(name: impl Into<String>, hidden: bool) -> Self {
        Self {
            name: name.into(),
            hidden,
        }
    }
}

/// A base stat such as `hp` or `speed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: String,
    pub value: i64,
}

impl PokemonStat {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Normalized view of an upstream Pokémon record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSummary {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub base_experience: i64,
    pub order: i64,
    /// Artwork URL, empty when upstream has no sprite at all
    pub sprite: String,
    pub types: Vec<String>,
    pub held_items: Vec<String>,
    pub abilities: Vec<PokemonAbility>,
    pub stats: Vec<PokemonStat>,
    pub moves: Vec<String>,
}
