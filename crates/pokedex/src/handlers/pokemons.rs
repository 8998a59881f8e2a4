//! Pokemon CRUD handlers.
//!
//! Thin request/response mapping over the [`PokemonService`]; every handler
//! delegates immediately and converts errors through [`ApiError`].
//!
//! [`PokemonService`]: crate::service::PokemonService

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use pokedex_core::{Pokemon, PokedexError};

use crate::{
    handlers::ApiError,
    models::{CreatePokemon, UpdatePokemon},
    service::Pagination,
    state::AppState,
};

/// Create a pokemon (POST /pokemons).
///
/// A missing or unparsable body validates as an empty input so the response
/// lists every per-field message rather than a bare parse error.
pub async fn create_pokemon(
    State(state): State<AppState>,
    payload: Result<Json<CreatePokemon>, JsonRejection>,
) -> Result<(StatusCode, Json<Pokemon>), ApiError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Body rejected, validating as empty input");
            CreatePokemon::default()
        }
    };

    let input = payload
        .validate()
        .map_err(|messages| ApiError(PokedexError::Validation { messages }))?;

    let pokemon = state.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(pokemon)))
}

/// List one page of pokemons (GET /pokemons?limit=&page=).
pub async fn list_pokemons(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Pokemon>>, ApiError> {
    let pokemons = state.service.find_all(pagination).await?;
    Ok(Json(pokemons))
}

/// Get a single pokemon by id (GET /pokemons/{id}).
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Pokemon>, ApiError> {
    let pokemon = state.service.find_one(id).await?;
    Ok(Json(pokemon))
}

/// Partially update a pokemon (PATCH /pokemons/{id}).
///
/// A missing or unparsable body merges as an empty update, leaving the
/// record untouched.
pub async fn update_pokemon(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    payload: Result<Json<UpdatePokemon>, JsonRejection>,
) -> Result<Json<Pokemon>, ApiError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Body rejected, merging as empty update");
            UpdatePokemon::default()
        }
    };

    let pokemon = state.service.update(id, payload).await?;
    Ok(Json(pokemon))
}

/// Delete a pokemon (DELETE /pokemons/{id}).
///
/// Returns the plain-text confirmation `Pokemon #{name} removed`.
pub async fn delete_pokemon(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<String, ApiError> {
    let message = state.service.remove(id).await?;
    Ok(message)
}
