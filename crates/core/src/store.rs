//! Key-value store abstraction
//!
//! Session-scoped caches (e.g. LLM reply caching) go through this trait
//! instead of module-level maps, so the owning service decides where the
//! state lives. The default backend is an in-memory map with a simple
//! insertion-order eviction bound; a Redis-backed implementation can be
//! swapped in without touching the callers.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::Result;

/// Pluggable key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Evict a key (no-op when absent)
    async fn evict(&self, key: &str) -> Result<()>;
}

/// In-memory store bounded to `max_entries`
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
    /// Insertion order, for eviction of the oldest key at capacity
    order: RwLock<Vec<String>>,
    max_entries: usize,
}

impl InMemoryStore {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
            max_entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(100)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        let mut order = self.order.write();

        if !entries.contains_key(key) {
            if entries.len() >= self.max_entries {
                if let Some(oldest) = order.first().cloned() {
                    entries.remove(&oldest);
                    order.remove(0);
                }
            }
            order.push(key.to_string());
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn evict(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        self.order.write().retain(|k| k != key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_evict() {
        let store = InMemoryStore::default();

        store.set("en:broom", "reply text").await.unwrap();
        assert_eq!(
            store.get("en:broom").await.unwrap(),
            Some("reply text".to_string())
        );

        store.evict("en:broom").await.unwrap();
        assert_eq!(store.get("en:broom").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let store = InMemoryStore::new(2);

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.set("c", "3").await.unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a").await.unwrap(), None);
        assert_eq!(store.get("c").await.unwrap(), Some("3".to_string()));
    }

    #[tokio::test]
    async fn test_overwrite_does_not_grow() {
        let store = InMemoryStore::new(2);

        store.set("a", "1").await.unwrap();
        store.set("a", "2").await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").await.unwrap(), Some("2".to_string()));
    }
}
