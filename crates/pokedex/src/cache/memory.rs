//! Unbounded in-memory key/value cache.
//!
//! Thread-safe via `Arc<RwLock<HashMap>>`. There is deliberately no TTL and
//! no eviction: entries persist for the lifetime of the cache.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::Arc,
};

use tokio::sync::RwLock;

/// Unbounded key/value cache.
///
/// Cloning produces a handle to the same underlying map.
#[derive(Debug, Clone)]
pub struct MemoryCache<K, V> {
    store: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Default for MemoryCache<K, V> {
    fn default() -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<K, V> MemoryCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a value from the cache by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let store = self.store.read().await;
        store.get(key).cloned()
    }

    /// Inserts a value, replacing any previous entry under the same key.
    pub async fn insert(&self, key: K, value: V) {
        let mut store = self.store.write().await;
        store.insert(key, value);
    }

    /// Removes a value from the cache by key.
    pub async fn remove(&self, key: &K) {
        let mut store = self.store.write().await;
        store.remove(key);
    }

    /// Returns true if the key is present.
    pub async fn contains(&self, key: &K) -> bool {
        let store = self.store.read().await;
        store.contains_key(key)
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
