use std::path::Path;

use axum::{middleware, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, response_time_middleware};
use super::pokemon;
use super::state::AppState;

/// Create the API router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    finish(api_routes(), state)
}

/// Create the API router plus the browser front-end served from `static_dir`
pub fn create_router_with_ui(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let ui = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    finish(api_routes().fallback_service(ui), state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Lookup API
        .route("/api/pokemon", get(pokemon::get_pokemon))
}

fn finish(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .with_state(state)
        .layer(middleware::from_fn(response_time_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
