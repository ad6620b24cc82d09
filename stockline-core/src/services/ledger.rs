//! Ledger service - append-only transaction logging
//!
//! Every domain mutation appends one record to the owning user's history
//! list. Appends are best-effort from the caller's point of view: the domain
//! mutation is already durable by the time the ledger is written, so callers
//! swallow ledger failures instead of rolling back.

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::{TransactionEvent, TransactionRecord};
use crate::ports::{transactions_key, KeyValueStore};
use crate::services::require_owner;

/// Default retention cap when none is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// Service for the per-user transaction ledger
pub struct LedgerService {
    store: Arc<dyn KeyValueStore>,
    history_limit: usize,
}

impl LedgerService {
    pub fn new(store: Arc<dyn KeyValueStore>, history_limit: usize) -> Self {
        Self {
            store,
            history_limit: history_limit.max(1),
        }
    }

    /// Append an event to the owner's history
    ///
    /// Assigns a fresh id and the current timestamp. The history is trimmed
    /// to the newest `history_limit` records on every append so it cannot
    /// grow without bound.
    pub async fn log(&self, owner_id: &str, event: TransactionEvent) -> Result<TransactionRecord> {
        require_owner(owner_id)?;

        let key = transactions_key(owner_id);
        let mut records = self.load(&key).await?;

        let record = TransactionRecord::new(owner_id, event);
        records.push(record.clone());

        if records.len() > self.history_limit {
            let excess = records.len() - self.history_limit;
            records.drain(..excess);
        }

        self.store.set(&key, serde_json::to_string(&records)?).await?;
        Ok(record)
    }

    /// Load the owner's full history, newest first
    ///
    /// A missing key reads as an empty history.
    pub async fn history(&self, owner_id: &str) -> Result<Vec<TransactionRecord>> {
        require_owner(owner_id)?;

        let mut records = self.load(&transactions_key(owner_id)).await?;
        records.reverse();
        Ok(records)
    }

    /// Number of records currently retained for the owner
    pub async fn count(&self, owner_id: &str) -> Result<usize> {
        require_owner(owner_id)?;
        Ok(self.load(&transactions_key(owner_id)).await?.len())
    }

    async fn load(&self, key: &str) -> Result<Vec<TransactionRecord>> {
        match self.store.get(key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}
