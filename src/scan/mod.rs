//! Scan Module
//!
//! The range-bounded, interruptible scan surface consumed by the tablet's
//! merging reader.
//!
//! ## Responsibilities
//! - Key ranges with inclusive/exclusive bounds
//! - Seek / top / advance semantics over the batched iterator
//! - Cooperative cancellation through a shared interrupt flag
//!
//! The map is always a leaf scan source: it never stacks on another
//! source, and column-family filtering belongs to the merging layer above.

mod range;
mod scanner;

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use bytes::Bytes;

use crate::data::{Key, Value};
use crate::error::Result;

pub use range::Range;
pub use scanner::RangeScanner;

/// The scan contract exported to the merging reader
///
/// Callers position with `seek`, inspect the current entry through the
/// `top_*` accessors, and step with `advance`. A scan holding an interrupt
/// flag fails with `Interrupted` once the flag is raised.
pub trait ScanSource {
    /// Accepted for interface compatibility only; leaf sources fail with
    /// `Unsupported`.
    fn init(&mut self, options: &HashMap<String, String>) -> Result<()>;

    /// (Re)position the scan over `range`
    ///
    /// The column-family filter must be empty and `inclusive` false; the
    /// merging layer performs column filtering.
    fn seek(&mut self, range: Range, column_families: &[Bytes], inclusive: bool) -> Result<()>;

    fn has_top(&self) -> bool;

    fn top_key(&self) -> Option<&Key>;

    fn top_value(&self) -> Option<&Value>;

    /// Move to the next entry within the range
    fn advance(&mut self) -> Result<()>;

    /// An independent scan over the same store sharing the interrupt flag
    fn deep_copy(&self) -> Result<Self>
    where
        Self: Sized;

    /// Attach or replace the interrupt signal
    fn set_interrupt_flag(&mut self, flag: Arc<AtomicBool>);
}
