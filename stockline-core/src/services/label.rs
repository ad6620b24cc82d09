//! Label service - printable label stubs
//!
//! Produces the data side of product labels: the JSON payload an external QR
//! encoder turns into a code, plus a short printable label code derived from
//! the product identity. QR encoding itself is out of scope.

use std::sync::Arc;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::result::Result;
use crate::domain::Product;
use crate::services::InventoryService;

/// A label stub for one product
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStub {
    pub product_id: String,
    pub product_name: String,
    /// Short printable code (16 hex chars of the product identity hash)
    pub code: String,
    /// JSON payload for the QR encoder
    pub payload: String,
}

/// Service for building label stubs
pub struct LabelService {
    inventory: Arc<InventoryService>,
}

impl LabelService {
    pub fn new(inventory: Arc<InventoryService>) -> Self {
        Self { inventory }
    }

    /// Build a label stub for one product
    pub async fn build(&self, owner_id: &str, product_id: &str) -> Result<LabelStub> {
        let product = self.inventory.get_product(owner_id, product_id).await?;
        stub_for(&product)
    }

    /// Build label stubs for all of the owner's products
    pub async fn build_all(&self, owner_id: &str) -> Result<Vec<LabelStub>> {
        let products = self.inventory.list_products(owner_id).await?;
        products.iter().map(stub_for).collect()
    }
}

fn stub_for(product: &Product) -> Result<LabelStub> {
    Ok(LabelStub {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        code: label_code(&product.owner_id, &product.id),
        payload: serde_json::to_string(product)?,
    })
}

/// Derive the printable label code: SHA256 of "owner|product", truncated
fn label_code(owner_id: &str, product_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}|{}", owner_id, product_id).as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..8]) // 16 hex chars
}
