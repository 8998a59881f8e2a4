//! Application state.
//!
//! The state is cloned for each request handler and carries the pokemon
//! service, which in turn owns the store, both caches, and the upstream
//! client. The caches are built exactly once here and handed to the
//! service; nothing is held in ambient globals.

use std::sync::Arc;

use crate::{
    cache::MemoryCache,
    config::Config,
    service::PokemonService,
    store::PokemonStore,
    upstream::PokeApiClient,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Pokemon service orchestrating store, caches, and upstream.
    pub service: Arc<PokemonService>,
}

impl AppState {
    /// Creates the application state against the configured upstream.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let upstream = Arc::new(PokeApiClient::new(
            config.upstream_base_url.clone(),
            config.upstream_timeout(),
        )?);

        let service = PokemonService::new(
            PokemonStore::new(),
            MemoryCache::new(),
            MemoryCache::new(),
            upstream,
        );

        Ok(Self {
            service: Arc::new(service),
        })
    }
}

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::upstream::testing::FakeUpstream;

    impl Default for AppState {
        /// Creates an AppState backed by the fake upstream.
        ///
        /// Only available in test builds; router tests use this to avoid
        /// any network dependency.
        fn default() -> Self {
            let service = PokemonService::new(
                PokemonStore::new(),
                MemoryCache::new(),
                MemoryCache::new(),
                Arc::new(FakeUpstream::new()),
            );

            Self {
                service: Arc::new(service),
            }
        }
    }
}
