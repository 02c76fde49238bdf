//! Pokedex Gateway
//!
//! Looks up Pokémon by name through PokeAPI and serves a normalized summary:
//! - Single upstream GET per cache miss, with status-to-error translation
//! - Pure mapping from the raw payload to a stable summary shape
//! - Bounded, time-expiring, single-flight cache keyed by lower-cased name

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{cache::LookupCache, pokeapi::PokeApiClient, services::PokemonService};
use tracing::info;

/// Create the application state with default configuration
pub fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let client = PokeApiClient::new(&config.upstream)?;
    info!(
        base_url = %client.base_url(),
        timeout_secs = config.upstream.timeout_secs,
        "Upstream client configured"
    );

    let cache = LookupCache::with_config(config.cache.to_cache_config());
    info!(
        max_capacity = config.cache.max_capacity,
        ttl_secs = config.cache.ttl_secs,
        "Lookup cache configured"
    );

    let pokemon_service = Arc::new(PokemonService::new(Arc::new(client), cache));

    Ok(AppState::new(pokemon_service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::create_router_with_state;
    use crate::api::middleware::RESPONSE_TIME_HEADER;

    fn config_for(server: &MockServer) -> AppConfig {
        let mut config = AppConfig::default();
        config.upstream.base_url = server.uri();
        config.upstream.timeout_secs = 2;
        config
    }

    async fn get(router: axum::Router, uri: &str) -> (StatusCode, bool, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let timed = response.headers().contains_key(&RESPONSE_TIME_HEADER);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, timed, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_end_to_end_lookup_is_cached_across_case() {
        let server = MockServer::start().await;
        let moves: Vec<Value> = (1..=10)
            .map(|i| json!({"move": {"name": format!("move-{}", i)}}))
            .collect();
        Mock::given(method("GET"))
            .and(path("/pokemon/pikachu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 25,
                "name": "pikachu",
                "sprites": {"front_default": "https://img.example/25.png"},
                "moves": moves
            })))
            .expect(1)
            .mount(&server)
            .await;

        let state = create_app_state_with_config(&config_for(&server)).unwrap();
        let router = create_router_with_state(state);

        let (status, timed, lower) = get(router.clone(), "/api/pokemon?name=pikachu").await;
        assert_eq!(status, StatusCode::OK);
        assert!(timed);

        let (status, _, upper) = get(router, "/api/pokemon?name=PIKACHU").await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(lower, upper);
        assert_eq!(upper["name"], "pikachu");
        assert_eq!(upper["sprite"], "https://img.example/25.png");
        assert_eq!(upper["moves"].as_array().unwrap().len(), 6);
        assert_eq!(upper["moves"][5], "move-6");
    }

    #[tokio::test]
    async fn test_end_to_end_status_translation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/missingno"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/pokemon/pikachu"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let state = create_app_state_with_config(&config_for(&server)).unwrap();
        let router = create_router_with_state(state);

        let (status, _, body) = get(router.clone(), "/api/pokemon?name=MissingNo").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Pokémon 'missingno' was not found");

        let (status, _, body) = get(router, "/api/pokemon?name=pikachu").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Unexpected error occurred");
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let state = create_app_state().unwrap();
        let router = create_router_with_state(state);

        let (status, timed, body) = get(router.clone(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(timed);
        assert_eq!(body["status"], "up");

        let (status, _, body) = get(router, "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "up");
        assert_eq!(body["cache_entries"], 0);
    }
}
