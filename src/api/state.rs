//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, PokemonSource, PokemonSummary};
use crate::infrastructure::services::PokemonService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub pokemon_service: Arc<dyn PokemonServiceTrait>,
}

impl AppState {
    pub fn new(pokemon_service: Arc<dyn PokemonServiceTrait>) -> Self {
        Self { pokemon_service }
    }
}

/// Trait for Pokémon lookup operations
#[async_trait::async_trait]
pub trait PokemonServiceTrait: Send + Sync {
    async fn lookup(&self, identifier: &str) -> Result<Arc<PokemonSummary>, DomainError>;

    /// Number of summaries currently cached
    async fn cached_entries(&self) -> u64;
}

#[async_trait::async_trait]
impl<S: PokemonSource + 'static> PokemonServiceTrait for PokemonService<S> {
    async fn lookup(&self, identifier: &str) -> Result<Arc<PokemonSummary>, DomainError> {
        PokemonService::lookup(self, identifier).await
    }

    async fn cached_entries(&self) -> u64 {
        self.cache().entry_count().await
    }
}
