//! PokeAPI upstream client

mod client;

pub use client::{PokeApiClient, DEFAULT_POKEAPI_BASE_URL};
