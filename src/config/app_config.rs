use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::cache::LookupCacheConfig;
use crate::infrastructure::pokeapi::DEFAULT_POKEAPI_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub upstream: UpstreamConfig,
    pub cache: CacheSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the browser front-end
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Upstream PokeAPI settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// Lookup cache sizing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub max_capacity: u64,
    pub ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: "public".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            timeout_secs: 10,
            user_agent: concat!("pokedex-gateway/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        let defaults = LookupCacheConfig::default();

        Self {
            max_capacity: defaults.max_capacity,
            ttl_secs: defaults.ttl.as_secs(),
        }
    }
}

impl CacheSettings {
    pub fn to_cache_config(&self) -> LookupCacheConfig {
        LookupCacheConfig::default()
            .with_max_capacity(self.max_capacity)
            .with_ttl(Duration::from_secs(self.ttl_secs))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
