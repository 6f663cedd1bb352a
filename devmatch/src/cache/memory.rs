use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CacheBackend, CacheEntry};

/// Process-local cache store.
///
/// Entries are never evicted; a stale entry stays in the map until the next
/// write for the same key replaces it. Concurrent writers to one key resolve
/// as last-writer-wins.
pub struct MemoryCacheBackend<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
}

impl<T> MemoryCacheBackend<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for MemoryCacheBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> CacheBackend<T> for MemoryCacheBackend<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<CacheEntry<T>> {
        let entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.get(key).cloned()
    }

    async fn set(&self, key: String, entry: CacheEntry<T>) {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.insert(key, entry);
    }
}
