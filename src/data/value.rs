//! Value definition
//!
//! Values are opaque byte payloads. The map never interprets them; the
//! merging reader above decides what a tombstone's empty value means.

use bytes::Bytes;

/// An immutable value payload
///
/// Construction from `Bytes`, `Vec<u8>`, or a static slice takes ownership
/// of the buffer without copying; use [`Value::copy_from`] to copy a
/// borrowed slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Value(Bytes);

impl Value {
    /// Wrap an owned buffer without copying
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Copy a borrowed slice into a new value
    pub fn copy_from(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }

    /// An empty value (the payload of a tombstone)
    pub fn empty() -> Self {
        Self(Bytes::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<&'static [u8]> for Value {
    fn from(bytes: &'static [u8]) -> Self {
        Self(Bytes::from_static(bytes))
    }
}

impl From<&'static str> for Value {
    fn from(text: &'static str) -> Self {
        Self(Bytes::from_static(text.as_bytes()))
    }
}

impl AsRef<[u8]> for Value {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
