//! JSON file store implementation
//!
//! Persists the whole key-value map as a single pretty-printed JSON object.
//! Writes go through a temp file in the same directory followed by an atomic
//! rename, so a crash mid-write never corrupts the blob. An exclusive file
//! lock is held for the lifetime of the open store to guard against a second
//! process mutating the same file.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use fs2::FileExt;

use crate::domain::result::{Error, Result};
use crate::ports::KeyValueStore;

/// Maximum number of retries when the store file is locked
const MAX_RETRIES: u32 = 5;

/// Initial retry delay in milliseconds (doubles each retry: 50, 100, 200, 400ms)
const INITIAL_RETRY_DELAY_MS: u64 = 50;

/// File-backed key-value store
pub struct JsonFileStore {
    path: PathBuf,
    map: Mutex<HashMap<String, String>>,
    // Held for the lifetime of the store; the lock releases on drop
    _lock_file: File,
}

impl JsonFileStore {
    /// Open the store file, creating it if it doesn't exist
    ///
    /// Includes retry logic with exponential backoff for lock contention,
    /// which can occur when a second invocation starts before the previous
    /// one has released the store.
    pub fn open(path: &Path) -> Result<Self> {
        let lock_file = Self::acquire_lock(path)?;

        let map = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    Error::storage(format!("store file {} is corrupt: {}", path.display(), e))
                })?
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            map: Mutex::new(map),
            _lock_file: lock_file,
        })
    }

    /// Acquire the exclusive lock next to the store file
    fn acquire_lock(path: &Path) -> Result<File> {
        let lock_path = path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        for attempt in 0..MAX_RETRIES {
            match lock_file.try_lock_exclusive() {
                Ok(()) => return Ok(lock_file),
                Err(_) if attempt < MAX_RETRIES - 1 => {
                    let delay = Duration::from_millis(INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt));
                    thread::sleep(delay);
                }
                Err(e) => {
                    return Err(Error::storage(format!(
                        "store {} is locked by another process: {}",
                        path.display(),
                        e
                    )));
                }
            }
        }

        Err(Error::storage(format!(
            "store {} is locked after {} attempts",
            path.display(),
            MAX_RETRIES
        )))
    }

    /// Write the in-memory map to disk atomically
    fn persist(&self, map: &HashMap<String, String>) -> Result<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| Error::storage("store path has no parent directory"))?;

        let content = serde_json::to_string_pretty(map)?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| Error::storage(format!("failed to replace store file: {}", e)))?;
        Ok(())
    }

    /// Path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self
            .map
            .lock()
            .map_err(|e| Error::storage(format!("store lock poisoned: {}", e)))?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut map = self
            .map
            .lock()
            .map_err(|e| Error::storage(format!("store lock poisoned: {}", e)))?;
        map.insert(key.to_string(), value);
        self.persist(&map)
    }
}
