//! Mutation definition
//!
//! A mutation is one row plus an ordered list of column updates. The map
//! applies all updates of a mutation under a single exclusive-lock
//! acquisition, so readers never observe a partial mutation.

use bytes::Bytes;

use super::Value;

/// One column update within a mutation
#[derive(Debug, Clone)]
pub struct ColumnUpdate {
    pub(crate) family: Bytes,
    pub(crate) qualifier: Bytes,
    pub(crate) visibility: Bytes,
    pub(crate) timestamp: i64,
    pub(crate) deleted: bool,
    pub(crate) value: Value,
}

impl ColumnUpdate {
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

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A row plus its ordered column updates
#[derive(Debug, Clone)]
pub struct Mutation {
    row: Bytes,
    updates: Vec<ColumnUpdate>,
}

impl Mutation {
    /// Start a mutation for a row
    pub fn new(row: impl Into<Bytes>) -> Self {
        Self {
            row: row.into(),
            updates: Vec::new(),
        }
    }

    /// Append a column write
    pub fn put(
        &mut self,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        visibility: impl Into<Bytes>,
        timestamp: i64,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.updates.push(ColumnUpdate {
            family: family.into(),
            qualifier: qualifier.into(),
            visibility: visibility.into(),
            timestamp,
            deleted: false,
            value: value.into(),
        });
        self
    }

    /// Append a column delete (tombstone)
    pub fn delete(
        &mut self,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        visibility: impl Into<Bytes>,
        timestamp: i64,
    ) -> &mut Self {
        self.updates.push(ColumnUpdate {
            family: family.into(),
            qualifier: qualifier.into(),
            visibility: visibility.into(),
            timestamp,
            deleted: true,
            value: Value::empty(),
        });
        self
    }

    pub fn row(&self) -> &Bytes {
        &self.row
    }

    /// The column updates, in application order
    pub fn updates(&self) -> &[ColumnUpdate] {
        &self.updates
    }

    /// Number of column updates; drives bulk-write lock pacing
    pub fn size(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}
