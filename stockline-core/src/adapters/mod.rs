//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSON file store for the KeyValueStore port
//! - In-memory store for tests
//! - Environment-based identity for the CLI

mod env;
mod json_file;
mod memory;

pub use env::EnvIdentity;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
