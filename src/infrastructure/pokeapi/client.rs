use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::domain::pokemon::{LookupKey, PokemonSource};
use crate::domain::DomainError;

/// Public PokeAPI base URL
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

const UPSTREAM_SERVER_ERROR: &str = "PokéAPI server error. Please try again later.";

/// PokeAPI client issuing a single GET per lookup
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Builds a client from upstream configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DomainError::unexpected(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Wraps an existing reqwest client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn pokemon_url(&self, key: &LookupKey) -> String {
        format!("{}/pokemon/{}", self.base_url, key.as_str())
    }
}

/// Maps a non-success upstream status to a domain error
fn classify_status(status: StatusCode, key: &LookupKey) -> DomainError {
    if status.is_client_error() {
        DomainError::not_found(format!("Pokémon '{}' was not found", key))
    } else if status.is_server_error() {
        DomainError::upstream_unavailable(UPSTREAM_SERVER_ERROR)
    } else {
        DomainError::unexpected(format!("Unexpected upstream status {}", status))
    }
}

/// Maps a transport failure to a domain error
fn classify_transport(err: reqwest::Error) -> DomainError {
    if err.is_builder() {
        DomainError::unexpected(format!("Invalid upstream request: {}", err))
    } else {
        DomainError::upstream_unavailable(format!("Request failed: {}", err))
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    async fn fetch(&self, key: &LookupKey) -> Result<Value, DomainError> {
        let url = self.pokemon_url(key);
        debug!(url = %url, "Fetching Pokémon from upstream");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Upstream request failed");
            classify_transport(e)
        })?;

        let status = response.status();

        if !status.is_success() {
            warn!(url = %url, status = %status.as_u16(), "Upstream returned error status");
            return Err(classify_status(status, key));
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                DomainError::unexpected(format!("Failed to parse upstream response: {}", e))
            } else {
                classify_transport(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PokeApiClient {
        PokeApiClient::with_client(reqwest::Client::new(), server.uri())
    }

    fn key(name: &str) -> LookupKey {
        LookupKey::new(name).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = PokeApiClient::with_client(reqwest::Client::new(), "http://localhost/api/v2/");
        assert_eq!(client.base_url(), "http://localhost/api/v2");
        assert_eq!(
            client.pokemon_url(&key("Pikachu")),
            "http://localhost/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn test_new_from_config() {
        let config = UpstreamConfig::default();
        let client = PokeApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), DEFAULT_POKEAPI_BASE_URL);
    }

    #[tokio::test]
    async fn test_fetch_success_uses_lowercased_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/pikachu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 25, "name": "pikachu"})))
            .expect(1)
            .mount(&server)
            .await;

        let payload = client_for(&server).fetch(&key("PIKACHU")).await.unwrap();

        assert_eq!(payload["id"], 25);
        assert_eq!(payload["name"], "pikachu");
    }

    #[tokio::test]
    async fn test_fetch_404_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/missingno"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(&key("missingno")).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::not_found("Pokémon 'missingno' was not found")
        );
    }

    #[tokio::test]
    async fn test_fetch_other_4xx_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(&key("bad-name")).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_500_is_upstream_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(&key("pikachu")).await.unwrap_err();

        assert_eq!(err, DomainError::upstream_unavailable(UPSTREAM_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_fetch_503_is_upstream_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(&key("pikachu")).await.unwrap_err();

        assert!(matches!(err, DomainError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(&key("pikachu")).await.unwrap_err();

        assert!(matches!(err, DomainError::Unexpected { .. }));
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_upstream_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"name": "slowpoke"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = PokeApiClient::with_client(
            reqwest::Client::builder()
                .timeout(Duration::from_millis(50))
                .build()
                .unwrap(),
            server.uri(),
        );

        let err = client.fetch(&key("slowpoke")).await.unwrap_err();

        assert!(matches!(err, DomainError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_upstream_unavailable() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let client =
            PokeApiClient::with_client(reqwest::Client::new(), format!("http://{}", addr));

        let err = client.fetch(&key("pikachu")).await.unwrap_err();

        assert!(matches!(err, DomainError::UpstreamUnavailable { .. }));
    }
}
