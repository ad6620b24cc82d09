//! Category domain model

use serde::{Deserialize, Serialize};

use crate::domain::id::next_id;

/// Display label used wherever a product's category reference does not resolve.
///
/// Deleting a category never cascades to its products, so dangling
/// `category_id` values are expected and must render as this label.
pub const NO_CATEGORY_LABEL: &str = "no category";

/// A product category owned by a user
///
/// Categories are created and deleted explicitly but never renamed in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub owner_id: String,
}

impl Category {
    /// Create a new category with a generated time-based id
    pub fn new(owner_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            owner_id: owner_id.into(),
        }
    }

    /// Validate category data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("category name cannot be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_validation() {
        let mut category = Category::new("u1", "Electronics");
        assert!(category.validate().is_ok());

        category.name = "   ".to_string();
        assert!(category.validate().is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        let category = Category::new("u1", "Electronics");
        let json = serde_json::to_string(&category).unwrap();
        assert!(json.contains("\"ownerId\":\"u1\""));
        assert!(json.contains("\"name\":\"Electronics\""));
    }
}
