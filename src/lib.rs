//! # tabletmap
//!
//! The in-memory sorted write buffer of a tablet store: recent mutations
//! accumulate here, sorted in tablet key order, until an external flusher
//! writes them to immutable on-disk files. Reads merge this live buffer
//! with on-disk data through the range-scan surface.
//!
//! - Multi-attribute keys with timestamp-descending ordering
//! - Single-writer/multi-reader concurrency with batched read-ahead
//! - Snapshot-consistent scans that recover from concurrent writes
//! - Interruptible range scans for server-side cancellation
//!
//! ## Architecture Overview
//!
//! ```text
//! writers                              readers
//!    │                                    │
//!    ▼                                    ▼
//! ┌─────────────┐                  ┌──────────────┐
//! │  Mutation   │                  │ RangeScanner │  seek / top / advance
//! └──────┬──────┘                  └──────┬───────┘  + interrupt polling
//!        │                               │
//! ┌──────▼───────────────────────────────▼───────┐
//! │                 SortedMap                     │
//! │   RwLock ── modification counter ── registry  │
//! └──────┬───────────────────────────────┬───────┘
//!        │                               │
//! ┌──────▼───────┐               ┌───────▼─────────┐
//! │ OrderedStore │◄──────────────│ BatchedIterator │  read-ahead buffer
//! │  (BTreeMap)  │  RawIterator  └─────────────────┘  + recovery
//! └──────────────┘
//! ```
//!
//! Durability is deliberately absent: a write-ahead log outside this crate
//! provides recovery, and the on-disk formats, compactor, and RPC surface
//! are external collaborators.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod data;
pub mod map;
pub mod scan;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::MapConfig;
pub use data::{ColumnUpdate, Key, Mutation, Value};
pub use error::{MapError, Result};
pub use map::{shutdown_report, BatchedIterator, SortedMap};
pub use scan::{Range, RangeScanner, ScanSource};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tabletmap
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
