//! Upstream pokemon API client.
//!
//! The service talks to the upstream through the [`Upstream`] trait object
//! so tests can substitute a fake. [`PokeApiClient`] is the real
//! implementation, backed by reqwest against the public PokeAPI.
//!
//! The upstream payload is normalized into a [`Pokemon`] record by a single
//! explicit mapping function, [`into_pokemon`]: hp comes from the `hp` slot
//! of the stats list, the type from the first type slot, and sprites are the
//! front/back default URLs in that order.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use pokedex_core::{Pokemon, PokedexError, Result};

/// Trait for fetching pokemon records from the upstream API.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Fetches a single record by id.
    ///
    /// Returns [`PokedexError::NotFound`] when the upstream reports the id
    /// as missing; any other failure surfaces as [`PokedexError::Upstream`].
    async fn fetch_by_id(&self, id: u32) -> Result<Pokemon>;
}

// ============================================================================
// Upstream payload shape
// ============================================================================

/// Raw upstream payload for a single pokemon.
#[derive(Debug, Deserialize)]
pub struct PokemonPayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    pub sprites: SpritesPayload,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SpritesPayload {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
}

/// Normalizes an upstream payload into a [`Pokemon`] record.
pub fn into_pokemon(payload: PokemonPayload) -> Pokemon {
    let hp = payload
        .stats
        .iter()
        .find(|slot| slot.stat.name == "hp")
        .map(|slot| slot.base_stat)
        .unwrap_or(0);

    let kind = payload
        .types
        .first()
        .map(|slot| slot.kind.name.clone())
        .unwrap_or_default();

    let sprites = [payload.sprites.front_default, payload.sprites.back_default]
        .into_iter()
        .flatten()
        .collect();

    Pokemon {
        id: payload.id,
        name: payload.name,
        kind,
        hp,
        sprites,
    }
}

// ============================================================================
// PokeAPI client
// ============================================================================

/// Upstream client for the public PokeAPI.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client against the given base URL (e.g.
    /// `https://pokeapi.co/api/v2`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Upstream for PokeApiClient {
    async fn fetch_by_id(&self, id: u32) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        tracing::debug!(%url, "Fetching pokemon from upstream");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PokedexError::Upstream(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound { id });
        }

        if !response.status().is_success() {
            return Err(PokedexError::Upstream(format!(
                "unexpected status {} for {url}",
                response.status()
            )));
        }

        let payload: PokemonPayload = response
            .json()
            .await
            .map_err(|e| PokedexError::Upstream(e.to_string()))?;

        Ok(into_pokemon(payload))
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Highest id the fake upstream knows about.
    const MAX_KNOWN_ID: u32 = 10_000;

    /// Fake upstream that synthesizes records and counts calls.
    ///
    /// Ids 1 and 4 answer with the bulbasaur/charmander reference fixtures;
    /// every other id up to [`MAX_KNOWN_ID`] gets a synthetic record, and
    /// anything above that is reported as not found.
    #[derive(Debug, Default)]
    pub struct FakeUpstream {
        calls: AtomicUsize,
    }

    impl FakeUpstream {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of `fetch_by_id` calls observed so far.
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Upstream for FakeUpstream {
        async fn fetch_by_id(&self, id: u32) -> Result<Pokemon> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            match id {
                0 => Err(PokedexError::NotFound { id }),
                1 => Ok(Pokemon {
                    id: 1,
                    name: "bulbasaur".to_string(),
                    kind: "grass".to_string(),
                    hp: 45,
                    sprites: vec![
                        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png".to_string(),
                        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/1.png".to_string(),
                    ],
                }),
                4 => Ok(Pokemon {
                    id: 4,
                    name: "charmander".to_string(),
                    kind: "fire".to_string(),
                    hp: 39,
                    sprites: vec![
                        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/4.png".to_string(),
                        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/4.png".to_string(),
                    ],
                }),
                id if id <= MAX_KNOWN_ID => Ok(Pokemon {
                    id,
                    name: format!("pokemon-{id}"),
                    kind: "normal".to_string(),
                    hp: 50,
                    sprites: vec![format!(
                        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png"
                    )],
                }),
                _ => Err(PokedexError::NotFound { id }),
            }
        }
    }
}
