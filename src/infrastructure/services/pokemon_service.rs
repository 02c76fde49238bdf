//! Pokémon lookup service - validate, check cache, fetch and map on miss

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::pokemon::{LookupKey, PayloadMapper, PokemonSource, PokemonSummary};
use crate::domain::DomainError;
use crate::infrastructure::cache::LookupCache;

/// Service resolving Pokémon summaries through the lookup cache
#[derive(Debug)]
pub struct PokemonService<S: PokemonSource> {
    source: Arc<S>,
    cache: LookupCache,
    mapper: PayloadMapper,
}

impl<S: PokemonSource> PokemonService<S> {
    /// Create a new PokemonService with the given upstream source and cache
    pub fn new(source: Arc<S>, cache: LookupCache) -> Self {
        Self {
            source,
            cache,
            mapper: PayloadMapper::new(),
        }
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }

    /// Look up a Pokémon by name or dex number.
    ///
    /// The identifier is re-validated here even though the HTTP layer
    /// already checks it.
    pub async fn lookup(&self, identifier: &str) -> Result<Arc<PokemonSummary>, DomainError> {
        let key = LookupKey::new(identifier)?;
        debug!(key = %key, "Looking up Pokémon");

        self.cache
            .get_or_compute(&key, || self.fetch_summary(&key))
            .await
    }

    async fn fetch_summary(&self, key: &LookupKey) -> Result<PokemonSummary, DomainError> {
        let payload = self.source.fetch(key).await.inspect_err(|e| {
            warn!(key = %key, error = %e, "Upstream lookup failed");
        })?;

        Ok(self.mapper.map(&payload))
    }
}
