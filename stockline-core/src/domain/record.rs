//! Transaction record domain model
//!
//! Every mutation to the category and product collections appends exactly one
//! record to the owner's ledger. The payload is a tagged union keyed by the
//! `type` field, one variant per event kind, so readers never reach into an
//! untyped detail grab-bag.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::id::next_id;

/// A single ledger entry
///
/// Records are append-only: never mutated or deleted once written (the ledger
/// itself trims oldest entries past the retention cap).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub owner_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: TransactionEvent,
}

impl TransactionRecord {
    /// Create a new record with a generated id and the current timestamp
    pub fn new(owner_id: impl Into<String>, event: TransactionEvent) -> Self {
        Self {
            id: next_id(),
            owner_id: owner_id.into(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// The event carried by a transaction record
///
/// Serialized as `{"type": ..., "details": {...}}`. Types written by newer
/// app versions deserialize to [`TransactionEvent::Unknown`] instead of
/// failing, so old readers can still display the rest of the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "snake_case")]
pub enum TransactionEvent {
    #[serde(rename_all = "camelCase")]
    AddCategory { category_name: String },
    #[serde(rename_all = "camelCase")]
    DeleteCategory { category_name: String },
    #[serde(rename_all = "camelCase")]
    AddProduct {
        product_name: String,
        quantity_added: i64,
        product_category_name: String,
    },
    #[serde(rename_all = "camelCase")]
    EditProduct {
        product_name: String,
        old_quantity: i64,
        new_quantity: i64,
        old_price: Decimal,
        new_price: Decimal,
        product_category_name: String,
    },
    #[serde(rename_all = "camelCase")]
    DeleteProduct {
        product_name: String,
        quantity_removed: i64,
        product_category_name: String,
        old_price: Decimal,
    },
    #[serde(rename_all = "camelCase")]
    EditProfile {
        old_first_name: Option<String>,
        new_first_name: Option<String>,
        old_last_name: Option<String>,
        new_last_name: Option<String>,
        old_company_name: Option<String>,
        new_company_name: Option<String>,
    },
    ChangePassword,
    Logout,
    #[serde(other)]
    Unknown,
}

impl TransactionEvent {
    /// The wire name of this event type
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::AddCategory { .. } => "add_category",
            Self::DeleteCategory { .. } => "delete_category",
            Self::AddProduct { .. } => "add_product",
            Self::EditProduct { .. } => "edit_product",
            Self::DeleteProduct { .. } => "delete_product",
            Self::EditProfile { .. } => "edit_profile",
            Self::ChangePassword => "change_password",
            Self::Logout => "logout",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let record = TransactionRecord::new(
            "u1",
            TransactionEvent::AddProduct {
                product_name: "TV".to_string(),
                quantity_added: 3,
                product_category_name: "Electronics".to_string(),
            },
        );

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"add_product\""));
        assert!(json.contains("\"productName\":\"TV\""));
        assert!(json.contains("\"quantityAdded\":3"));
        assert!(json.contains("\"productCategoryName\":\"Electronics\""));
    }

    #[test]
    fn test_unit_events_round_trip() {
        let record = TransactionRecord::new("u1", TransactionEvent::Logout);
        let json = serde_json::to_string(&record).unwrap();
        let back: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.event, TransactionEvent::Logout);
    }

    #[test]
    fn test_edit_product_round_trip() {
        let event = TransactionEvent::EditProduct {
            product_name: "TV".to_string(),
            old_quantity: 3,
            new_quantity: 5,
            old_price: Decimal::new(1234, 2),
            new_price: Decimal::new(1500, 2),
            product_category_name: "Electronics".to_string(),
        };
        let record = TransactionRecord::new("u1", event.clone());
        let json = serde_json::to_string(&record).unwrap();
        let back: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.event, event);
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let json = r#"{
            "id": "1",
            "ownerId": "u1",
            "timestamp": "2025-01-15T12:00:00Z",
            "type": "bulk_restock",
            "details": {"whatever": true}
        }"#;
        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.event, TransactionEvent::Unknown);
        assert_eq!(record.event.type_name(), "unknown");
    }
}
