//! Stockline Core - Business logic for inventory tracking
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Category, Product, TransactionRecord)
//! - **ports**: Trait definitions for external dependencies (KeyValueStore, IdentityProvider)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (JSON file store, env identity)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{EnvIdentity, JsonFileStore};
use config::Config;
use ports::{IdentityProvider, KeyValueStore};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result as CoreResult};
pub use domain::{Category, Product, TransactionEvent, TransactionRecord, NO_CATEGORY_LABEL};

/// Main context for Stockline operations
///
/// This is the primary entry point for all business logic. It holds the
/// store, configuration, and all services.
pub struct StocklineContext {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub ledger: Arc<LedgerService>,
    pub inventory: Arc<InventoryService>,
    pub history: HistoryService,
    pub report: ReportService,
    pub label: LabelService,
}

impl StocklineContext {
    /// Create a new Stockline context
    pub fn new(stockline_dir: &Path) -> Result<Self> {
        let config = Config::load(stockline_dir)?;

        let store: Arc<dyn KeyValueStore> =
            Arc::new(JsonFileStore::open(&stockline_dir.join("stockline.json"))?);
        let identity: Arc<dyn IdentityProvider> =
            Arc::new(EnvIdentity::new(config.default_user.clone()));

        let ledger = Arc::new(LedgerService::new(Arc::clone(&store), config.history_limit));
        let inventory = Arc::new(InventoryService::new(
            Arc::clone(&store),
            Arc::clone(&ledger),
        ));
        let history = HistoryService::new(Arc::clone(&ledger));
        let report = ReportService::new(Arc::clone(&inventory));
        let label = LabelService::new(Arc::clone(&inventory));

        Ok(Self {
            config,
            store,
            identity,
            ledger,
            inventory,
            history,
            report,
            label,
        })
    }
}
