//! Pokemon service.
//!
//! Orchestrates the local store, the two ad-hoc caches, and the upstream
//! client. Lookup order is always single-item cache, then store, then
//! upstream; successful upstream fetches are materialized into both.
//!
//! The paginated-list cache is deliberately never invalidated by create,
//! update, or remove, so a cached page can go stale against the store.

use std::sync::Arc;

use pokedex_core::{Pokemon, PokedexError, Result};

use crate::{
    cache::{page_key, MemoryCache},
    models::{NewPokemon, UpdatePokemon},
    store::PokemonStore,
    upstream::Upstream,
};

/// Pagination parameters for the list endpoint.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct Pagination {
    /// Records per page (default: 10)
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// 1-based page number (default: 1)
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_limit() -> u32 {
    10
}

fn default_page() -> u32 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self { limit: 10, page: 1 }
    }
}

/// Orchestrates store, caches, and upstream client.
///
/// The caches are constructed once at service initialization and owned by
/// the service; there is no ambient global state.
pub struct PokemonService {
    store: PokemonStore,
    pokemons_cache: MemoryCache<u32, Pokemon>,
    paginated_cache: MemoryCache<String, Vec<Pokemon>>,
    upstream: Arc<dyn Upstream>,
}

impl PokemonService {
    /// Creates a service over the given store, caches, and upstream client.
    pub fn new(
        store: PokemonStore,
        pokemons_cache: MemoryCache<u32, Pokemon>,
        paginated_cache: MemoryCache<String, Vec<Pokemon>>,
        upstream: Arc<dyn Upstream>,
    ) -> Self {
        Self {
            store,
            pokemons_cache,
            paginated_cache,
            upstream,
        }
    }

    /// Creates a new record from validated input.
    ///
    /// Fails with [`PokedexError::Duplicate`] when a record with the same
    /// name (case-sensitive) already exists. The check and the insert are
    /// separate lock acquisitions; two concurrent creates with the same
    /// name may both pass the check.
    pub async fn create(&self, input: NewPokemon) -> Result<Pokemon> {
        if self.store.find_by_name(&input.name).await.is_some() {
            return Err(PokedexError::Duplicate { name: input.name });
        }

        let pokemon = Pokemon {
            id: self.store.allocate_id(),
            name: input.name,
            kind: input.kind,
            hp: input.hp,
            sprites: input.sprites,
        };

        self.store.insert(pokemon.clone()).await;
        self.pokemons_cache.insert(pokemon.id, pokemon.clone()).await;

        tracing::info!(id = pokemon.id, name = %pokemon.name, "Created pokemon");
        Ok(pokemon)
    }

    /// Returns the record with this id.
    ///
    /// Consults the single-item cache, then the store, then the upstream.
    /// Repeated calls for the same id hit the cache, so at most one
    /// upstream fetch happens per id per cache lifetime.
    pub async fn find_one(&self, id: u32) -> Result<Pokemon> {
        if let Some(pokemon) = self.pokemons_cache.get(&id).await {
            tracing::debug!(id, "Single-item cache hit");
            return Ok(pokemon);
        }

        if let Some(pokemon) = self.store.get(id).await {
            self.pokemons_cache.insert(id, pokemon.clone()).await;
            return Ok(pokemon);
        }

        let pokemon = self.upstream.fetch_by_id(id).await?;
        self.store.insert(pokemon.clone()).await;
        self.pokemons_cache.insert(id, pokemon.clone()).await;
        Ok(pokemon)
    }

    /// Returns one page of records, exactly `limit` long.
    ///
    /// Pages are cached under `{limit}-{page}`; a miss issues one upstream
    /// fetch per record position (`id = (page - 1) * limit + position`),
    /// preserving upstream order.
    pub async fn find_all(&self, pagination: Pagination) -> Result<Vec<Pokemon>> {
        let Pagination { limit, page } = pagination;
        if limit == 0 || page == 0 {
            return Err(PokedexError::Validation {
                messages: vec![
                    "limit must be a positive number".to_string(),
                    "page must be a positive number".to_string(),
                ],
            });
        }

        let key = page_key(limit, page);
        if let Some(pokemons) = self.paginated_cache.get(&key).await {
            tracing::debug!(%key, "Paginated cache hit");
            return Ok(pokemons);
        }

        // The page window [offset + 1, offset + limit] must stay within u32.
        let offset = match (page - 1).checked_mul(limit) {
            Some(offset) if offset.checked_add(limit).is_some() => offset,
            _ => {
                return Err(PokedexError::Validation {
                    messages: vec!["page window exceeds the valid id range".to_string()],
                })
            }
        };

        let mut pokemons = Vec::with_capacity(limit as usize);
        for position in 1..=limit {
            pokemons.push(self.upstream.fetch_by_id(offset + position).await?);
        }

        self.paginated_cache.insert(key, pokemons.clone()).await;
        Ok(pokemons)
    }

    /// Applies a partial update to the record with this id.
    ///
    /// Resolves the record with [`find_one`](Self::find_one) semantics, so
    /// an unknown id fails with [`PokedexError::NotFound`]. Renaming onto a
    /// name held by a different record fails with
    /// [`PokedexError::Duplicate`].
    pub async fn update(&self, id: u32, update: UpdatePokemon) -> Result<Pokemon> {
        let mut pokemon = self.find_one(id).await?;

        if let Some(name) = update.name.as_deref() {
            if let Some(existing) = self.store.find_by_name(name).await {
                if existing.id != id {
                    return Err(PokedexError::Duplicate {
                        name: name.to_string(),
                    });
                }
            }
        }

        update.merge_into(&mut pokemon);

        self.store.insert(pokemon.clone()).await;
        self.pokemons_cache.insert(id, pokemon.clone()).await;

        tracing::info!(id, name = %pokemon.name, "Updated pokemon");
        Ok(pokemon)
    }

    /// Deletes the record with this id.
    ///
    /// Resolves with [`find_one`](Self::find_one) semantics and purges the
    /// record from the store and the single-item cache. Returns the
    /// confirmation message. Cached pages keep any stale copy.
    pub async fn remove(&self, id: u32) -> Result<String> {
        let pokemon = self.find_one(id).await?;

        self.store.remove(id).await;
        self.pokemons_cache.remove(&id).await;

        tracing::info!(id, name = %pokemon.name, "Removed pokemon");
        Ok(format!("Pokemon #{} removed", pokemon.name))
    }

    /// True if the single-item cache holds this id.
    #[cfg(test)]
    pub async fn is_cached(&self, id: u32) -> bool {
        self.pokemons_cache.contains(&id).await
    }

    /// True if the paginated cache holds this key.
    #[cfg(test)]
    pub async fn is_page_cached(&self, key: &str) -> bool {
        self.paginated_cache.contains(&key.to_string()).await
    }
}
