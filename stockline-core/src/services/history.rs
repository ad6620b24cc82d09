//! History service - renders the transaction ledger for display
//!
//! Maps each event type to a human-readable description and a display kind
//! through a fixed dispatch table. Unknown types render a generic fallback so
//! histories written by newer app versions still display.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::currency::format_amount;
use crate::domain::result::Result;
use crate::domain::{TransactionEvent, TransactionRecord};
use crate::services::LedgerService;

/// Display classification of a history entry (icon/severity hint for the UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Added,
    Removed,
    Edited,
    Security,
    Session,
    Other,
}

/// A rendered history entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    pub kind: EntryKind,
    pub description: String,
}

/// Service for reading and rendering the transaction history
pub struct HistoryService {
    ledger: Arc<LedgerService>,
}

impl HistoryService {
    pub fn new(ledger: Arc<LedgerService>) -> Self {
        Self { ledger }
    }

    /// Load the owner's rendered history, newest first
    pub async fn history(&self, owner_id: &str) -> Result<Vec<HistoryEntry>> {
        let records = self.ledger.history(owner_id).await?;
        Ok(records.iter().map(render).collect())
    }
}

/// Render one record to its display form
pub fn render(record: &TransactionRecord) -> HistoryEntry {
    let (kind, description) = match &record.event {
        TransactionEvent::AddCategory { category_name } => (
            EntryKind::Added,
            format!("Category \"{}\" added.", category_name),
        ),
        TransactionEvent::DeleteCategory { category_name } => (
            EntryKind::Removed,
            format!("Category \"{}\" deleted.", category_name),
        ),
        TransactionEvent::AddProduct {
            product_name,
            quantity_added,
            product_category_name,
        } => (
            EntryKind::Added,
            format!(
                "Product \"{}\" ({} un.) added to category \"{}\".",
                product_name, quantity_added, product_category_name
            ),
        ),
        TransactionEvent::EditProduct {
            product_name,
            old_quantity,
            new_quantity,
            old_price,
            new_price,
            ..
        } => (
            EntryKind::Edited,
            format!(
                "Product \"{}\" edited. Qty: {} -> {}. Price: {} -> {}.",
                product_name,
                old_quantity,
                new_quantity,
                format_amount(*old_price),
                format_amount(*new_price)
            ),
        ),
        TransactionEvent::DeleteProduct {
            product_name,
            quantity_removed,
            product_category_name,
            ..
        } => (
            EntryKind::Removed,
            format!(
                "Product \"{}\" ({} un.) deleted from category \"{}\".",
                product_name, quantity_removed, product_category_name
            ),
        ),
        TransactionEvent::EditProfile { .. } => {
            (EntryKind::Session, "Profile updated.".to_string())
        }
        TransactionEvent::ChangePassword => {
            (EntryKind::Security, "Password changed.".to_string())
        }
        TransactionEvent::Logout => (EntryKind::Session, "Signed out.".to_string()),
        TransactionEvent::Unknown => (EntryKind::Other, "Unknown transaction.".to_string()),
    };

    HistoryEntry {
        id: record.id.clone(),
        timestamp: record.timestamp,
        event_type: record.event.type_name().to_string(),
        kind,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use rust_decimal::Decimal;

    #[test]
    fn test_render_add_product() {
        let record = TransactionRecord::new(
            "u1",
            TransactionEvent::AddProduct {
                product_name: "TV".to_string(),
                quantity_added: 3,
                product_category_name: "Electronics".to_string(),
            },
        );
        let entry = render(&record);
        assert_eq!(entry.kind, EntryKind::Added);
        assert_eq!(
            entry.description,
            "Product \"TV\" (3 un.) added to category \"Electronics\"."
        );
    }

    #[test]
    fn test_render_edit_product_shows_deltas() {
        let record = TransactionRecord::new(
            "u1",
            TransactionEvent::EditProduct {
                product_name: "TV".to_string(),
                old_quantity: 3,
                new_quantity: 5,
                old_price: Decimal::new(1234, 2),
                new_price: Decimal::new(1500, 2),
                product_category_name: "Electronics".to_string(),
            },
        );
        let entry = render(&record);
        assert_eq!(entry.kind, EntryKind::Edited);
        assert_eq!(
            entry.description,
            "Product \"TV\" edited. Qty: 3 -> 5. Price: $12.34 -> $15.00."
        );
    }

    #[test]
    fn test_render_unknown_type() {
        let record = TransactionRecord::new("u1", TransactionEvent::Unknown);
        let entry = render(&record);
        assert_eq!(entry.kind, EntryKind::Other);
        assert_eq!(entry.description, "Unknown transaction.");
    }

    #[tokio::test]
    async fn test_history_is_newest_first() {
        let store = Arc::new(MemoryStore::new());
        let ledger = Arc::new(LedgerService::new(store, 100));
        let history = HistoryService::new(ledger.clone());

        ledger
            .log(
                "u1",
                TransactionEvent::AddCategory {
                    category_name: "Electronics".to_string(),
                },
            )
            .await
            .unwrap();
        ledger.log("u1", TransactionEvent::Logout).await.unwrap();

        let entries = history.history("u1").await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event_type, "logout");
        assert_eq!(entries[1].event_type, "add_category");
    }
}
