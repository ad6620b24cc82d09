//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod history;
mod inventory;
mod label;
mod ledger;
mod report;

pub use history::{EntryKind, HistoryEntry, HistoryService};
pub use inventory::{category_label, InventoryService, InventorySummary};
pub use label::{LabelService, LabelStub};
pub use ledger::{LedgerService, DEFAULT_HISTORY_LIMIT};
pub use report::{ReportLine, ReportSection, ReportService, StockReport};

use crate::domain::result::{Error, Result};

/// Every operation is scoped to an owner; a blank id means no authenticated
/// user and fails before any storage access.
pub(crate) fn require_owner(owner_id: &str) -> Result<()> {
    if owner_id.trim().is_empty() {
        return Err(Error::NotAuthenticated);
    }
    Ok(())
}
