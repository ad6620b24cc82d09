//! In-memory store implementation
//!
//! Backs tests and throwaway sessions; nothing is persisted.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::result::{Error, Result};
use crate::ports::KeyValueStore;

/// Volatile key-value store
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self
            .map
            .lock()
            .map_err(|e| Error::storage(format!("store lock poisoned: {}", e)))?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut map = self
            .map
            .lock()
            .map_err(|e| Error::storage(format!("store lock poisoned: {}", e)))?;
        map.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", "v".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
    }
}
