//! Ordered store
//!
//! The sorted container underneath the concurrency envelope. A BTreeMap
//! keyed by the full seven-attribute key: logarithmic insert, ordered
//! traversal, lower-bound positioning for cursors.
//!
//! Tombstones are ordinary entries here; the merging reader above the map
//! interprets them.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::data::{Key, Value};

/// Estimated structural overhead per entry (tree node bookkeeping)
const ENTRY_OVERHEAD: usize = 32;

/// Sorted mapping from Key to Value
///
/// Grows only through `apply`; shrinks only on `clear` or teardown. An
/// entry is never modified in place — a second `apply` with a fully-equal
/// key replaces the value.
#[derive(Debug, Default)]
pub(crate) struct OrderedStore {
    entries: BTreeMap<Key, Value>,
    bytes: usize,
}

impl OrderedStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite one entry
    pub(crate) fn apply(&mut self, key: Key, value: Value) {
        let key_size = key.size();
        let value_size = value.len();
        match self.entries.insert(key, value) {
            Some(old) => {
                // key bytes unchanged on overwrite, only the value delta
                self.bytes -= old.len();
                self.bytes += value_size;
            }
            None => self.bytes += key_size + value_size + ENTRY_OVERHEAD,
        }
    }

    /// Number of entries
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Approximate resident bytes: keys, values, structural overhead
    pub(crate) fn memory_used(&self) -> usize {
        self.bytes
    }

    /// The smallest entry whose key satisfies `lower`, or None
    pub(crate) fn first_from(&self, lower: Bound<&Key>) -> Option<(&Key, &Value)> {
        self.entries.range((lower, Bound::Unbounded)).next()
    }

    /// Drop every entry
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.bytes = 0;
    }
}
