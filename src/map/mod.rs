//! Sorted Map Module
//!
//! The write buffer of a tablet: an in-memory sorted map where recent
//! mutations accumulate before being flushed to immutable on-disk files.
//!
//! ## Responsibilities
//! - Sorted storage in the tablet key order (see `data::key`)
//! - Single-writer/multi-reader access behind one RwLock
//! - Modification counter for iterator invalidation detection
//! - Bulk mutation application with bounded lock-hold time
//! - Explicit teardown with process-wide leak accounting
//!
//! ## Concurrency
//! Readers share the lock and buffer entries in batches; writers take it
//! exclusively and bump the modification counter once per visible write
//! event. Iterators borrow the map and re-acquire the shared lock on every
//! refill, so a closed map fails them with `Closed` rather than dangling.

mod batched;
mod raw;
mod registry;
mod store;

use std::ops::Bound;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::config::MapConfig;
use crate::data::{Key, Mutation, Value};
use crate::error::{MapError, Result};
use crate::scan::RangeScanner;

pub use batched::BatchedIterator;
pub use registry::shutdown_report;

use raw::RawIterator;
use store::OrderedStore;

/// Store plus modification counter, guarded together by the map's RwLock
///
/// The counter must only ever be observed under the lock, shared or
/// exclusive, which falls out of it living inside the lock.
#[derive(Debug)]
pub(crate) struct MapCore {
    pub(crate) store: OrderedStore,
    pub(crate) mod_count: u64,
}

impl MapCore {
    fn apply_mutation(&mut self, mutation: &Mutation, mutation_count: u32) {
        let row = mutation.row().clone();
        for update in mutation.updates() {
            let key = Key::from_parts(
                row.clone(),
                update.family.clone(),
                update.qualifier.clone(),
                update.visibility.clone(),
                update.timestamp,
                update.deleted,
                mutation_count,
            );
            self.store.apply(key, update.value.clone());
        }
    }
}

/// In-memory sorted key-value map with snapshot-consistent scans
///
/// Live after construction; `close()` tears it down, and every operation
/// on a closed map fails with [`MapError::Closed`]. Dropping an unclosed
/// map reclaims it but logs a warning — explicit close is the contract,
/// drop is the safety net.
#[derive(Debug)]
pub struct SortedMap {
    config: MapConfig,
    id: u64,
    inner: RwLock<Option<MapCore>>,
}

impl SortedMap {
    /// Create an empty map with default tuning
    pub fn new() -> Self {
        Self::with_config(MapConfig::default())
    }

    /// Create an empty map with explicit tuning
    pub fn with_config(config: MapConfig) -> Self {
        let id = registry::register();
        tracing::debug!("allocated sorted map {:#018x}", id);

        Self {
            config,
            id,
            inner: RwLock::new(Some(MapCore {
                store: OrderedStore::new(),
                mod_count: 0,
            })),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Writes (exclusive lock)
    // -------------------------------------------------------------------------

    /// Insert or overwrite a single entry
    ///
    /// One externally-visible write event: bumps the modification counter.
    pub fn put(&self, key: Key, value: Value) -> Result<()> {
        let mut guard = self.inner.write();
        let core = guard.as_mut().ok_or(MapError::Closed)?;

        core.mod_count += 1;
        core.store.apply(key, value);
        Ok(())
    }

    /// Apply one mutation atomically
    ///
    /// Every column update is tagged with `mutation_count` and becomes
    /// visible at a single counter increment; no reader observes a partial
    /// mutation.
    pub fn mutate(&self, mutation: &Mutation, mutation_count: u32) -> Result<()> {
        let mut guard = self.inner.write();
        let core = guard.as_mut().ok_or(MapError::Closed)?;

        core.mod_count += 1;
        core.apply_mutation(mutation, mutation_count);
        Ok(())
    }

    /// Apply a list of mutations, bounding lock-hold time
    ///
    /// `mutation_count` increments by one per mutation starting from
    /// `start_count`. The exclusive lock is released and re-acquired once
    /// the running sum of `Mutation::size()` reaches the configured batch
    /// size, so readers progress between batches; earlier batches are
    /// fully visible before later ones. Each batch is one counter bump.
    pub fn mutate_all(&self, mutations: &[Mutation], start_count: u32) -> Result<()> {
        let mut mutation_count = start_count;
        let mut pos = 0;

        while pos < mutations.len() {
            let mut guard = self.inner.write();
            let core = guard.as_mut().ok_or(MapError::Closed)?;

            core.mod_count += 1;

            let mut applied = 0;
            while pos < mutations.len() && applied < self.config.mutation_batch_size {
                let mutation = &mutations[pos];
                core.apply_mutation(mutation, mutation_count);
                mutation_count = mutation_count.wrapping_add(1);
                applied += mutation.size();
                pos += 1;
            }
        }

        Ok(())
    }

    /// Drop every entry
    pub fn clear(&self) -> Result<()> {
        let mut guard = self.inner.write();
        let core = guard.as_mut().ok_or(MapError::Closed)?;

        core.mod_count += 1;
        core.store.clear();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reads (shared lock)
    // -------------------------------------------------------------------------

    /// Exact lookup, ignoring the writer-assigned mutation count
    ///
    /// Absent keys are `Ok(None)`, not an error.
    pub fn get(&self, key: &Key) -> Result<Option<Value>> {
        let guard = self.inner.read();
        let core = guard.as_ref().ok_or(MapError::Closed)?;

        // counts order entries with the same cell identity; seek from the
        // smallest so the first candidate is the first stored match
        let probe = key.clone().with_mutation_count(0);
        let mut raw = RawIterator::new(core, Bound::Included(&probe));
        if raw.has_next() {
            let (candidate, value) = raw.advance(core)?;
            if candidate.eq_ignoring_count(key) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Number of entries
    pub fn len(&self) -> Result<usize> {
        let guard = self.inner.read();
        let core = guard.as_ref().ok_or(MapError::Closed)?;
        Ok(core.store.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        let guard = self.inner.read();
        let core = guard.as_ref().ok_or(MapError::Closed)?;
        Ok(core.store.is_empty())
    }

    /// Approximate resident bytes: keys, values, structural overhead
    pub fn memory_used(&self) -> Result<usize> {
        let guard = self.inner.read();
        let core = guard.as_ref().ok_or(MapError::Closed)?;
        Ok(core.store.memory_used())
    }

    /// Iterate the whole map in key order
    pub fn iter(&self) -> Result<BatchedIterator<'_>> {
        BatchedIterator::new(self, Bound::Unbounded)
    }

    /// Iterate from the first entry whose key is >= `start`
    pub fn iter_from(&self, start: &Key) -> Result<BatchedIterator<'_>> {
        BatchedIterator::new(self, Bound::Included(start))
    }

    /// Open a range scan positioned at the first entry
    pub fn scanner(&self) -> Result<RangeScanner<'_>> {
        RangeScanner::new(self, None)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Tear down the map and release its registry identity
    ///
    /// Idempotent; every other operation afterwards fails with `Closed`.
    pub fn close(&self) -> Result<()> {
        let mut guard = self.inner.write();
        if guard.take().is_some() {
            registry::deregister(self.id);
            tracing::debug!("deallocated sorted map {:#018x}", self.id);
        }
        Ok(())
    }

    /// Shared-lock access for iterators
    pub(crate) fn lock_shared(&self) -> RwLockReadGuard<'_, Option<MapCore>> {
        self.inner.read()
    }
}

impl Default for SortedMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SortedMap {
    fn drop(&mut self) {
        if self.inner.get_mut().take().is_some() {
            tracing::warn!(
                "deallocating sorted map {:#018x} on drop; call close() on long-lived maps",
                self.id
            );
            registry::deregister(self.id);
        }
    }
}
