//! Liveness and readiness probes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

/// Probe response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Summaries currently held by the lookup cache, reported by `/ready`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_entries: Option<u64>,
}

impl HealthResponse {
    fn up(cache_entries: Option<u64>) -> Self {
        Self {
            status: "up",
            version: env!("CARGO_PKG_VERSION"),
            cache_entries,
        }
    }
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse::up(None))
}

/// GET /ready
///
/// Upstream is not probed: cached lookups keep working during a PokeAPI
/// outage, so the process is ready as soon as its state is built.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let entries = state.pokemon_service.cached_entries().await;

    Json(HealthResponse::up(Some(entries)))
}

/// GET /live
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
