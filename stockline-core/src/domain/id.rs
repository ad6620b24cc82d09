//! Time-based record id generation
//!
//! Ids are unix milliseconds shifted into the upper bits with a per-process
//! counter in the lower 16 bits, rendered as a decimal string. The mobile app
//! this format replaces used bare `Date.now()` strings, so ids stay sortable
//! by creation time but no longer collide within a millisecond.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for generating unique ids within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique time-based id string
///
/// Lower 48 bits of the millisecond timestamp (good for ~8900 years) plus a
/// 16-bit counter, so up to 65536 unique ids per millisecond.
pub fn next_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    ((timestamp << 16) | counter).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<String> = (0..1000).map(|_| next_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_ids_sort_by_creation_time() {
        let a: u64 = next_id().parse().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b: u64 = next_id().parse().unwrap();
        assert!(b > a);
    }
}
