//! Authoritative local holder of created and fetched records.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
};

use tokio::sync::RwLock;

use pokedex_core::Pokemon;

/// In-memory pokemon store.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access. Data
/// is not persisted and is lost when the store is dropped. Locally assigned
/// ids always stay above any id already materialized from upstream.
#[derive(Debug, Clone)]
pub struct PokemonStore {
    pokemons: Arc<RwLock<HashMap<u32, Pokemon>>>,
    next_id: Arc<AtomicU32>,
}

impl Default for PokemonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PokemonStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            pokemons: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU32::new(1)),
        }
    }

    /// Allocates a fresh id for a locally created record.
    pub fn allocate_id(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Gets a record by id.
    pub async fn get(&self, id: u32) -> Option<Pokemon> {
        let pokemons = self.pokemons.read().await;
        pokemons.get(&id).cloned()
    }

    /// Finds a record by exact, case-sensitive name match.
    pub async fn find_by_name(&self, name: &str) -> Option<Pokemon> {
        let pokemons = self.pokemons.read().await;
        pokemons.values().find(|p| p.name == name).cloned()
    }

    /// Inserts or replaces a record under its id.
    ///
    /// Bumps the id allocator past records materialized from upstream so a
    /// later create never reuses an upstream id.
    pub async fn insert(&self, pokemon: Pokemon) {
        self.next_id.fetch_max(pokemon.id + 1, Ordering::SeqCst);
        let mut pokemons = self.pokemons.write().await;
        pokemons.insert(pokemon.id, pokemon);
    }

    /// Removes a record by id, returning it if present.
    pub async fn remove(&self, id: u32) -> Option<Pokemon> {
        let mut pokemons = self.pokemons.write().await;
        pokemons.remove(&id)
    }
}
