//! Error types for tabletmap
//!
//! Provides a unified error type for all operations.
//!
//! Absent keys are not errors: `get` returns `Ok(None)`. Fatal internal
//! consistency violations (duplicate allocation identity) abort via panic
//! instead of surfacing here.

use thiserror::Error;

/// Result type alias using MapError
pub type Result<T> = std::result::Result<T, MapError>;

/// Unified error type for tabletmap operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("sorted map is closed")]
    Closed,

    // -------------------------------------------------------------------------
    // Iteration Errors
    // -------------------------------------------------------------------------
    /// Advance called on an iterator with nothing left to return
    #[error("iterator exhausted")]
    Exhausted,

    /// A writer modified the map since the iterator snapshotted the
    /// modification counter. Recovered internally by the batched iterator;
    /// never surfaces to callers.
    #[error("map modified concurrently with iteration")]
    ConcurrentModification,

    // -------------------------------------------------------------------------
    // Scan Errors
    // -------------------------------------------------------------------------
    /// The scan's interrupt flag was set
    #[error("scan interrupted")]
    Interrupted,

    // -------------------------------------------------------------------------
    // Contract Errors
    // -------------------------------------------------------------------------
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
