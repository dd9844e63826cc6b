//! Key definition and comparison
//!
//! A key addresses one cell version: (row, column family, column qualifier,
//! column visibility, timestamp), plus a tombstone flag and the mutation
//! count assigned at insertion time.
//!
//! ## Ordering
//!
//! The first five attributes order lexicographically / naturally, with one
//! reversal: later timestamps sort **before** earlier ones, so a forward
//! scan yields the newest version of a cell first. The tombstone flag and
//! mutation count do not participate in user-key ordering; they complete
//! the total order over stored entries (tombstones first, then smaller
//! mutation counts first, preserving column-update application order
//! within a bulk write).

use std::cmp::Ordering;

use bytes::Bytes;

/// Fixed per-key overhead: 8-byte timestamp, 4-byte mutation count,
/// 1-byte tombstone flag.
const FIXED_LEN: usize = 13;

/// A cell key in the sorted map
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    row: Bytes,
    family: Bytes,
    qualifier: Bytes,
    visibility: Bytes,
    timestamp: i64,
    deleted: bool,
    mutation_count: u32,
}

impl Key {
    /// Create a key for a live cell with mutation count 0
    pub fn new(
        row: impl Into<Bytes>,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        visibility: impl Into<Bytes>,
        timestamp: i64,
    ) -> Self {
        Self {
            row: row.into(),
            family: family.into(),
            qualifier: qualifier.into(),
            visibility: visibility.into(),
            timestamp,
            deleted: false,
            mutation_count: 0,
        }
    }

    /// Create a key from already-shared byte handles
    ///
    /// Used by mutation application so all column updates of one mutation
    /// reference the same row buffer.
    pub(crate) fn from_parts(
        row: Bytes,
        family: Bytes,
        qualifier: Bytes,
        visibility: Bytes,
        timestamp: i64,
        deleted: bool,
        mutation_count: u32,
    ) -> Self {
        Self {
            row,
            family,
            qualifier,
            visibility,
            timestamp,
            deleted,
            mutation_count,
        }
    }

    /// The smallest possible key for a row: sorts at or before every
    /// stored key of that row
    pub fn first_for_row(row: impl Into<Bytes>) -> Self {
        Self {
            row: row.into(),
            family: Bytes::new(),
            qualifier: Bytes::new(),
            visibility: Bytes::new(),
            timestamp: i64::MAX,
            deleted: true,
            mutation_count: 0,
        }
    }

    /// Mark this key as a tombstone
    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Tag this key with a mutation count
    pub fn with_mutation_count(mut self, count: u32) -> Self {
        self.mutation_count = count;
        self
    }

    pub fn row(&self) -> &Bytes {
        &self.row
    }

    pub fn family(&self) -> &[u8] {
        &self.family
    }

    pub fn qualifier(&self) -> &[u8] {
        &self.qualifier
    }

    pub fn visibility(&self) -> &[u8] {
        &self.visibility
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn mutation_count(&self) -> u32 {
        self.mutation_count
    }

    /// Approximate in-memory size of this key in bytes
    pub fn size(&self) -> usize {
        self.row.len() + self.family.len() + self.qualifier.len() + self.visibility.len() + FIXED_LEN
    }

    /// Equality on everything except the mutation count
    ///
    /// This is the identity exact lookups use: the count is a tie-breaker
    /// assigned by the writer, not part of what the caller asked for.
    pub fn eq_ignoring_count(&self, other: &Key) -> bool {
        self.row == other.row
            && self.family == other.family
            && self.qualifier == other.qualifier
            && self.visibility == other.visibility
            && self.timestamp == other.timestamp
            && self.deleted == other.deleted
    }

    /// Replace the row handle with `row`, which must be byte-equal
    ///
    /// Lets iterators alias one row buffer across consecutive entries.
    pub(crate) fn reuse_row(&mut self, row: Bytes) {
        debug_assert_eq!(self.row, row);
        self.row = row;
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.family.cmp(&other.family))
            .then_with(|| self.qualifier.cmp(&other.qualifier))
            .then_with(|| self.visibility.cmp(&other.visibility))
            // later timestamps sort first
            .then_with(|| other.timestamp.cmp(&self.timestamp))
            // tombstones sort before live cells at the same timestamp
            .then_with(|| other.deleted.cmp(&self.deleted))
            .then_with(|| self.mutation_count.cmp(&other.mutation_count))
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{} ts={} del={}",
            String::from_utf8_lossy(&self.row),
            String::from_utf8_lossy(&self.family),
            String::from_utf8_lossy(&self.qualifier),
            String::from_utf8_lossy(&self.visibility),
            self.timestamp,
            self.deleted,
        )
    }
}
