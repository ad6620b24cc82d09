//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod category;
pub mod currency;
mod id;
mod product;
mod record;
pub mod result;

pub use category::{Category, NO_CATEGORY_LABEL};
pub use product::Product;
pub use record::{TransactionEvent, TransactionRecord};
