//! Key-value store port - persistence abstraction
//!
//! All collections are persisted as JSON-encoded arrays under per-user keys
//! (`user_<ownerId>_categorias`, `user_<ownerId>_produtos`,
//! `user_<ownerId>_transacoes`). The store itself only sees opaque strings,
//! so the storage engine is swappable without touching domain logic.

use async_trait::async_trait;

use crate::domain::result::Result;

/// Asynchronous string key-value store
///
/// `get` distinguishes "no record" (`Ok(None)`) from an empty value; callers
/// treat a missing key as an empty collection.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: String) -> Result<()>;
}

/// Storage key for a user's category collection
pub fn categories_key(owner_id: &str) -> String {
    format!("user_{}_categorias", owner_id)
}

/// Storage key for a user's product collection
pub fn products_key(owner_id: &str) -> String {
    format!("user_{}_produtos", owner_id)
}

/// Storage key for a user's transaction history
pub fn transactions_key(owner_id: &str) -> String {
    format!("user_{}_transacoes", owner_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced_per_user() {
        assert_eq!(categories_key("u1"), "user_u1_categorias");
        assert_eq!(products_key("u1"), "user_u1_produtos");
        assert_eq!(transactions_key("u1"), "user_u1_transacoes");
        assert_ne!(categories_key("u1"), categories_key("u2"));
    }
}
