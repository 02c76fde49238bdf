//! Upstream data source abstraction

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use super::LookupKey;
use crate::domain::DomainError;

/// Source of raw Pokémon payloads
///
/// Implementations issue exactly one upstream request per call and classify
/// failures: `NotFound` for client errors, `UpstreamUnavailable` for server
/// and transport errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PokemonSource: Send + Sync + std::fmt::Debug {
    /// Fetches the raw payload for the given key
    async fn fetch(&self, key: &LookupKey) -> Result<Value, DomainError>;
}
