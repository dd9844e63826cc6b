//! Raw iterator
//!
//! A forward cursor over the ordered store, valid only while the shared
//! lock is held. The cursor snapshots the map's modification counter at
//! creation; `pre_check` reports `ConcurrentModification` when a writer
//! has run since, and the batched iterator recovers by re-seeking.
//!
//! Tablets commonly accumulate many cells for one row, and row bytes can
//! dwarf the rest of the key, so consecutive entries sharing row bytes are
//! rewritten to alias one row buffer instead of carrying separate handles.

use std::ops::Bound;

use bytes::Bytes;

use crate::data::{Key, Value};
use crate::error::{MapError, Result};

use super::MapCore;

/// Forward cursor positioned by a start key
///
/// Holds the next entry to return plus the counter snapshot. Every method
/// that touches the store takes the core by reference, which forces the
/// caller to hold the shared lock.
#[derive(Debug)]
pub(crate) struct RawIterator {
    expected_mod_count: u64,
    pending: Option<(Key, Value)>,
    last_row: Option<Bytes>,
}

impl RawIterator {
    /// Position at the first entry whose key satisfies `start`
    ///
    /// Shared lock must be held.
    pub(crate) fn new(core: &MapCore, start: Bound<&Key>) -> Self {
        let pending = core
            .store
            .first_from(start)
            .map(|(k, v)| (k.clone(), v.clone()));
        Self {
            expected_mod_count: core.mod_count,
            pending,
            last_row: None,
        }
    }

    /// Fresh vs stale: has a writer run since this cursor was created?
    ///
    /// Called once per batch of advances, not per advance — a single batch
    /// under one shared-lock acquisition cannot be surprised mid-stream.
    pub(crate) fn pre_check(&self, core: &MapCore) -> Result<()> {
        if core.mod_count != self.expected_mod_count {
            return Err(MapError::ConcurrentModification);
        }
        Ok(())
    }

    pub(crate) fn has_next(&self) -> bool {
        self.pending.is_some()
    }

    /// Return the current entry and move one position forward
    ///
    /// Shared lock must be held.
    pub(crate) fn advance(&mut self, core: &MapCore) -> Result<(Key, Value)> {
        let (mut key, value) = self.pending.take().ok_or(MapError::Exhausted)?;

        self.pending = core
            .store
            .first_from(Bound::Excluded(&key))
            .map(|(k, v)| (k.clone(), v.clone()));

        match &self.last_row {
            Some(row) if *row == *key.row() => key.reuse_row(row.clone()),
            _ => self.last_row = Some(key.row().clone()),
        }

        Ok((key, value))
    }

    /// Release cursor state
    ///
    /// Dropping an unclosed iterator reclaims everything too; explicit
    /// close keeps the batched iterator's replace-on-recovery explicit.
    pub(crate) fn close(&mut self) {
        self.pending = None;
        self.last_row = None;
    }
}
