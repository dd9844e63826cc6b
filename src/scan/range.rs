//! Key ranges
//!
//! A range is an optional start key and an optional end key, each with an
//! inclusivity flag. An absent start means the beginning of the map, an
//! absent end means no upper bound.

use bytes::Bytes;

use crate::data::Key;
use crate::error::{MapError, Result};

/// A bounded or unbounded key range
#[derive(Debug, Clone, Default)]
pub struct Range {
    start: Option<Key>,
    start_inclusive: bool,
    end: Option<Key>,
    end_inclusive: bool,
}

impl Range {
    /// The full map
    pub fn all() -> Self {
        Self::default()
    }

    /// A range with explicit bounds
    ///
    /// Fails with `InvalidArgument` when the start key sorts after the end
    /// key.
    pub fn new(
        start: Option<Key>,
        start_inclusive: bool,
        end: Option<Key>,
        end_inclusive: bool,
    ) -> Result<Self> {
        if let (Some(s), Some(e)) = (&start, &end) {
            if s > e {
                return Err(MapError::InvalidArgument(format!(
                    "range start ({s}) is after end ({e})"
                )));
            }
        }

        Ok(Self {
            start,
            start_inclusive,
            end,
            end_inclusive,
        })
    }

    /// The half-open row range `[start_row, end_row)`
    pub fn rows(start_row: impl Into<Bytes>, end_row: impl Into<Bytes>) -> Result<Self> {
        Self::new(
            Some(Key::first_for_row(start_row)),
            true,
            Some(Key::first_for_row(end_row)),
            false,
        )
    }

    /// Everything from the first key of `row` onward
    pub fn from_row(row: impl Into<Bytes>) -> Self {
        Self {
            start: Some(Key::first_for_row(row)),
            start_inclusive: true,
            end: None,
            end_inclusive: false,
        }
    }

    pub fn start_key(&self) -> Option<&Key> {
        self.start.as_ref()
    }

    pub fn end_key(&self) -> Option<&Key> {
        self.end.as_ref()
    }

    pub fn is_start_inclusive(&self) -> bool {
        self.start_inclusive
    }

    pub fn is_end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    /// Does `key` fall before the start of this range?
    pub fn before_start(&self, key: &Key) -> bool {
        match &self.start {
            Some(start) if self.start_inclusive => key < start,
            Some(start) => key <= start,
            None => false,
        }
    }

    /// Does `key` fall after the end of this range?
    pub fn after_end(&self, key: &Key) -> bool {
        match &self.end {
            Some(end) if self.end_inclusive => key > end,
            Some(end) => key >= end,
            None => false,
        }
    }
}
