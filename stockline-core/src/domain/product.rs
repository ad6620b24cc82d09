//! Product domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::id::next_id;

/// A stocked product belonging to a user
///
/// `unit_price` is the stored decimal amount; input parsing and display go
/// through the integer-cents helpers in [`crate::domain::currency`].
/// `category_id` should reference an existing [`crate::domain::Category`] but
/// may dangle after that category is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub category_id: String,
    pub owner_id: String,
}

impl Product {
    /// Create a new product with a generated time-based id
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            quantity,
            unit_price,
            category_id: category_id.into(),
            owner_id: owner_id.into(),
        }
    }

    /// Validate product data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("product name cannot be empty");
        }
        if self.quantity <= 0 {
            return Err("quantity must be positive");
        }
        if self.unit_price <= Decimal::ZERO {
            return Err("unit price must be positive");
        }
        Ok(())
    }

    /// Total value of this line of stock (quantity * unit price)
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}
