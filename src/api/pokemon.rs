//! Pokémon lookup endpoint

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::pokemon::{validate_identifier, PokemonSummary};

/// Query parameters for `GET /api/pokemon`
#[derive(Debug, Deserialize)]
pub struct PokemonQuery {
    pub name: Option<String>,
}

/// GET /api/pokemon?name={name}
pub async fn get_pokemon(
    State(state): State<AppState>,
    query: Result<Query<PokemonQuery>, QueryRejection>,
) -> Result<Json<PokemonSummary>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let name = query.name.unwrap_or_default();

    validate_identifier(&name)?;
    debug!(name = %name, "Getting Pokémon");

    let summary = state.pokemon_service.lookup(&name).await?;

    Ok(Json(summary.as_ref().clone()))
}
