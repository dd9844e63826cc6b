//! Data Model Module
//!
//! The key, value, and mutation types stored in the sorted map.
//!
//! ## Responsibilities
//! - Multi-attribute keys with the tablet comparison order
//! - Opaque immutable value payloads
//! - Row mutations: an ordered list of column updates applied atomically
//!
//! All byte fields are `bytes::Bytes` handles, so the keys produced by one
//! mutation share a single row buffer and cloning a key during iteration
//! never copies payload bytes.

mod key;
mod mutation;
mod value;

pub use key::Key;
pub use mutation::{ColumnUpdate, Mutation};
pub use value::Value;
