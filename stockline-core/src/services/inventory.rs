//! Inventory service - category and product repository
//!
//! Owns the canonical per-user category and product collections. Each
//! operation is a whole-collection read-modify-write against the key-value
//! store; successful mutations emit one ledger record each. Ledger writes are
//! best-effort and never undo an already-persisted mutation.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Category, Product, TransactionEvent, NO_CATEGORY_LABEL};
use crate::ports::{categories_key, products_key, KeyValueStore};
use crate::services::{require_owner, LedgerService};

/// Resolve a category reference to its display name
///
/// Dangling references (deleted or blank category id) resolve to the
/// "no category" label.
pub fn category_label(categories: &[Category], category_id: &str) -> String {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| NO_CATEGORY_LABEL.to_string())
}

/// Aggregate stock numbers for the status display and report footer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub category_count: usize,
    pub product_count: usize,
    pub total_units: i64,
    pub total_stock_value: Decimal,
}

/// Service for category and product CRUD
pub struct InventoryService {
    store: Arc<dyn KeyValueStore>,
    ledger: Arc<LedgerService>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn KeyValueStore>, ledger: Arc<LedgerService>) -> Self {
        Self { store, ledger }
    }

    // === Categories ===

    /// List the owner's categories
    ///
    /// A missing or unreadable blob reads as "no data yet".
    pub async fn list_categories(&self, owner_id: &str) -> Result<Vec<Category>> {
        require_owner(owner_id)?;
        Ok(self.read_list_lenient(&categories_key(owner_id)).await)
    }

    /// Add a category
    pub async fn add_category(&self, owner_id: &str, name: &str) -> Result<Category> {
        require_owner(owner_id)?;

        let category = Category::new(owner_id, name.trim());
        category.validate().map_err(Error::validation)?;

        let key = categories_key(owner_id);
        let mut categories: Vec<Category> = self.read_list(&key).await?;
        categories.push(category.clone());
        self.write_list(&key, &categories).await?;

        // Best-effort: the category is already durable
        let _ = self
            .ledger
            .log(
                owner_id,
                TransactionEvent::AddCategory {
                    category_name: category.name.clone(),
                },
            )
            .await;

        Ok(category)
    }

    /// Delete a category
    ///
    /// Products referencing it are left untouched; their category renders as
    /// "no category" from here on.
    pub async fn delete_category(&self, owner_id: &str, category_id: &str) -> Result<()> {
        require_owner(owner_id)?;

        let key = categories_key(owner_id);
        let mut categories: Vec<Category> = self.read_list(&key).await?;

        let index = categories
            .iter()
            .position(|c| c.id == category_id)
            .ok_or_else(|| Error::not_found(format!("category {}", category_id)))?;

        let removed = categories.remove(index);
        self.write_list(&key, &categories).await?;

        let _ = self
            .ledger
            .log(
                owner_id,
                TransactionEvent::DeleteCategory {
                    category_name: removed.name,
                },
            )
            .await;

        Ok(())
    }

    // === Products ===

    /// List the owner's products
    pub async fn list_products(&self, owner_id: &str) -> Result<Vec<Product>> {
        require_owner(owner_id)?;
        Ok(self.read_list_lenient(&products_key(owner_id)).await)
    }

    /// Get one product by id
    pub async fn get_product(&self, owner_id: &str, product_id: &str) -> Result<Product> {
        self.list_products(owner_id)
            .await?
            .into_iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| Error::not_found(format!("product {}", product_id)))
    }

    /// Add a product
    ///
    /// The category must exist for this owner at creation time.
    pub async fn add_product(
        &self,
        owner_id: &str,
        name: &str,
        quantity: i64,
        unit_price: Decimal,
        category_id: &str,
    ) -> Result<Product> {
        require_owner(owner_id)?;

        let product = Product::new(owner_id, name.trim(), quantity, unit_price, category_id);
        product.validate().map_err(Error::validation)?;

        let categories: Vec<Category> = self.read_list(&categories_key(owner_id)).await?;
        let category = categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| Error::validation(format!("category {} does not exist", category_id)))?;
        let category_name = category.name.clone();

        let key = products_key(owner_id);
        let mut products: Vec<Product> = self.read_list(&key).await?;
        products.push(product.clone());
        self.write_list(&key, &products).await?;

        let _ = self
            .ledger
            .log(
                owner_id,
                TransactionEvent::AddProduct {
                    product_name: product.name.clone(),
                    quantity_added: product.quantity,
                    product_category_name: category_name,
                },
            )
            .await;

        Ok(product)
    }

    /// Replace a product's name, quantity, price, and category
    pub async fn edit_product(
        &self,
        owner_id: &str,
        product_id: &str,
        new_name: &str,
        new_quantity: i64,
        new_unit_price: Decimal,
        new_category_id: &str,
    ) -> Result<Product> {
        require_owner(owner_id)?;

        let updated = Product {
            id: product_id.to_string(),
            name: new_name.trim().to_string(),
            quantity: new_quantity,
            unit_price: new_unit_price,
            category_id: new_category_id.to_string(),
            owner_id: owner_id.to_string(),
        };
        updated.validate().map_err(Error::validation)?;

        let categories: Vec<Category> = self.read_list(&categories_key(owner_id)).await?;
        let category_name = categories
            .iter()
            .find(|c| c.id == new_category_id)
            .map(|c| c.name.clone())
            .ok_or_else(|| {
                Error::validation(format!("category {} does not exist", new_category_id))
            })?;

        let key = products_key(owner_id);
        let mut products: Vec<Product> = self.read_list(&key).await?;
        let index = products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or_else(|| Error::not_found(format!("product {}", product_id)))?;

        let old = products[index].clone();
        products[index] = updated.clone();
        self.write_list(&key, &products).await?;

        let _ = self
            .ledger
            .log(
                owner_id,
                TransactionEvent::EditProduct {
                    product_name: updated.name.clone(),
                    old_quantity: old.quantity,
                    new_quantity: updated.quantity,
                    old_price: old.unit_price,
                    new_price: updated.unit_price,
                    product_category_name: category_name,
                },
            )
            .await;

        Ok(updated)
    }

    /// Delete a product
    pub async fn delete_product(&self, owner_id: &str, product_id: &str) -> Result<()> {
        require_owner(owner_id)?;

        let key = products_key(owner_id);
        let mut products: Vec<Product> = self.read_list(&key).await?;
        let index = products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or_else(|| Error::not_found(format!("product {}", product_id)))?;

        let removed = products.remove(index);
        self.write_list(&key, &products).await?;

        let categories = self.read_list_lenient(&categories_key(owner_id)).await;
        let _ = self
            .ledger
            .log(
                owner_id,
                TransactionEvent::DeleteProduct {
                    product_name: removed.name,
                    quantity_removed: removed.quantity,
                    product_category_name: category_label(&categories, &removed.category_id),
                    old_price: removed.unit_price,
                },
            )
            .await;

        Ok(())
    }

    /// Aggregate counts and totals over the owner's stock
    pub async fn summary(&self, owner_id: &str) -> Result<InventorySummary> {
        let categories = self.list_categories(owner_id).await?;
        let products = self.list_products(owner_id).await?;

        let total_units = products.iter().map(|p| p.quantity).sum();
        let total_stock_value = products.iter().map(|p| p.stock_value()).sum();

        Ok(InventorySummary {
            category_count: categories.len(),
            product_count: products.len(),
            total_units,
            total_stock_value,
        })
    }

    // === Storage helpers ===

    /// Strict read for the read half of a mutation: a failure here aborts the
    /// operation instead of silently replacing the collection.
    async fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.store.get(key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Lenient read for listing: read or parse failures degrade to "no data
    /// yet" rather than surfacing an error.
    async fn read_list_lenient<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.store.get(key).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    async fn write_list<T: Serialize>(&self, key: &str, list: &[T]) -> Result<()> {
        self.store.set(key, serde_json::to_string(list)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::ports::transactions_key;

    fn service() -> (InventoryService, Arc<LedgerService>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let ledger = Arc::new(LedgerService::new(store.clone(), 100));
        (
            InventoryService::new(store.clone(), ledger.clone()),
            ledger,
            store,
        )
    }

    #[tokio::test]
    async fn test_list_categories_empty_when_no_data() {
        let (inventory, _, _) = service();
        assert!(inventory.list_categories("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_category_validates_name() {
        let (inventory, _, _) = service();
        let result = inventory.add_category("u1", "   ").await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_category_persists_and_logs() {
        let (inventory, ledger, _) = service();
        let category = inventory.add_category("u1", " Electronics ").await.unwrap();
        assert_eq!(category.name, "Electronics");

        let listed = inventory.list_categories("u1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, category.id);

        let history = ledger.history("u1").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(
            history[0].event,
            TransactionEvent::AddCategory {
                category_name: "Electronics".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_delete_category_leaves_products_dangling() {
        let (inventory, _, _) = service();
        let category = inventory.add_category("u1", "Electronics").await.unwrap();
        let product = inventory
            .add_product("u1", "TV", 3, Decimal::new(150000, 2), &category.id)
            .await
            .unwrap();

        inventory.delete_category("u1", &category.id).await.unwrap();

        let products = inventory.list_products("u1").await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, product.id);

        let categories = inventory.list_categories("u1").await.unwrap();
        assert_eq!(
            category_label(&categories, &products[0].category_id),
            NO_CATEGORY_LABEL
        );
    }

    #[tokio::test]
    async fn test_delete_missing_category_is_not_found() {
        let (inventory, ledger, _) = service();
        let result = inventory.delete_category("u1", "nope").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(ledger.history("u1").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_add_product_requires_existing_category() {
        let (inventory, _, _) = service();
        let result = inventory
            .add_product("u1", "TV", 3, Decimal::new(150000, 2), "nope")
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_product_rejects_bad_input() {
        let (inventory, _, _) = service();
        let category = inventory.add_category("u1", "Electronics").await.unwrap();

        let result = inventory
            .add_product("u1", "", 3, Decimal::new(100, 2), &category.id)
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));

        let result = inventory
            .add_product("u1", "TV", 0, Decimal::new(100, 2), &category.id)
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));

        let result = inventory
            .add_product("u1", "TV", 3, Decimal::ZERO, &category.id)
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_product_logs_with_category_name() {
        let (inventory, ledger, _) = service();
        let category = inventory.add_category("u1", "Electronics").await.unwrap();
        inventory
            .add_product("u1", "TV", 3, Decimal::new(150000, 2), &category.id)
            .await
            .unwrap();

        let history = ledger.history("u1").await.unwrap();
        assert_eq!(
            history[0].event,
            TransactionEvent::AddProduct {
                product_name: "TV".to_string(),
                quantity_added: 3,
                product_category_name: "Electronics".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_edit_product_captures_old_values() {
        let (inventory, ledger, _) = service();
        let category = inventory.add_category("u1", "Electronics").await.unwrap();
        let product = inventory
            .add_product("u1", "TV", 3, Decimal::new(150000, 2), &category.id)
            .await
            .unwrap();

        let updated = inventory
            .edit_product(
                "u1",
                &product.id,
                "Smart TV",
                5,
                Decimal::new(180000, 2),
                &category.id,
            )
            .await
            .unwrap();
        assert_eq!(updated.quantity, 5);

        let history = ledger.history("u1").await.unwrap();
        assert_eq!(
            history[0].event,
            TransactionEvent::EditProduct {
                product_name: "Smart TV".to_string(),
                old_quantity: 3,
                new_quantity: 5,
                old_price: Decimal::new(150000, 2),
                new_price: Decimal::new(180000, 2),
                product_category_name: "Electronics".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_edit_missing_product_is_not_found() {
        let (inventory, _, _) = service();
        let category = inventory.add_category("u1", "Electronics").await.unwrap();
        let result = inventory
            .edit_product("u1", "nope", "TV", 3, Decimal::new(100, 2), &category.id)
            .await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_product_twice_is_not_found() {
        let (inventory, _, _) = service();
        let category = inventory.add_category("u1", "Electronics").await.unwrap();
        let product = inventory
            .add_product("u1", "TV", 3, Decimal::new(150000, 2), &category.id)
            .await
            .unwrap();

        inventory.delete_product("u1", &product.id).await.unwrap();
        assert!(inventory.list_products("u1").await.unwrap().is_empty());

        let result = inventory.delete_product("u1", &product.id).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(inventory.list_products("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_is_lenient_over_corrupt_blob() {
        let (inventory, _, store) = service();
        store
            .set(&products_key("u1"), "{corrupt".to_string())
            .await
            .unwrap();

        assert!(inventory.list_products("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mutation_is_strict_over_corrupt_blob() {
        let (inventory, _, store) = service();
        store
            .set(&categories_key("u1"), "{corrupt".to_string())
            .await
            .unwrap();

        let result = inventory.add_category("u1", "Electronics").await;
        assert!(matches!(result, Err(Error::Json(_))));

        // The corrupt blob was not replaced
        let raw = store.get(&categories_key("u1")).await.unwrap();
        assert_eq!(raw, Some("{corrupt".to_string()));
    }

    #[tokio::test]
    async fn test_ledger_failure_does_not_block_mutation() {
        // Store that rejects writes to the transaction history key only
        struct NoLedgerStore(MemoryStore);

        #[async_trait::async_trait]
        impl KeyValueStore for NoLedgerStore {
            async fn get(&self, key: &str) -> Result<Option<String>> {
                self.0.get(key).await
            }
            async fn set(&self, key: &str, value: String) -> Result<()> {
                if key == transactions_key("u1") {
                    return Err(Error::storage("ledger write refused"));
                }
                self.0.set(key, value).await
            }
        }

        let store = Arc::new(NoLedgerStore(MemoryStore::new()));
        let ledger = Arc::new(LedgerService::new(store.clone(), 100));
        let inventory = InventoryService::new(store, ledger.clone());

        let category = inventory.add_category("u1", "Electronics").await.unwrap();
        assert_eq!(inventory.list_categories("u1").await.unwrap().len(), 1);
        assert_eq!(category.name, "Electronics");
        assert_eq!(ledger.history("u1").await.unwrap().len(), 0);
    }
}
