//! Range scanner
//!
//! Layers seek/top/advance semantics, end-of-range filtering, and
//! interrupt polling on top of the batched iterator. This is what the
//! merging reader holds for the in-memory side of a tablet read.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;

use crate::data::{Key, Value};
use crate::error::{MapError, Result};
use crate::map::{BatchedIterator, SortedMap};

use super::{Range, ScanSource};

/// Range-bounded, interruptible scan over a sorted map
///
/// Construct through [`SortedMap::scanner`]. Newly constructed scanners
/// cover the full map and sit on its first entry; `seek` repositions.
#[derive(Debug)]
pub struct RangeScanner<'a> {
    map: &'a SortedMap,
    iter: BatchedIterator<'a>,
    top: Option<(Key, Value)>,
    range: Range,
    interrupt_flag: Option<Arc<AtomicBool>>,
    interrupt_checks: u32,
}

impl<'a> RangeScanner<'a> {
    pub(crate) fn new(
        map: &'a SortedMap,
        interrupt_flag: Option<Arc<AtomicBool>>,
    ) -> Result<RangeScanner<'a>> {
        let mut iter = map.iter()?;
        let top = if iter.has_next() {
            Some(iter.next_entry()?)
        } else {
            None
        };

        Ok(RangeScanner {
            map,
            iter,
            top,
            range: Range::all(),
            interrupt_flag,
            interrupt_checks: 0,
        })
    }

    fn interrupted(&self) -> bool {
        self.interrupt_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Pull the next entry off the iterator, clearing top past range end
    fn pull(&mut self) -> Result<()> {
        self.top = if self.iter.has_next() {
            let entry = self.iter.next_entry()?;
            if self.range.after_end(&entry.0) {
                None
            } else {
                Some(entry)
            }
        } else {
            None
        };
        Ok(())
    }
}

impl ScanSource for RangeScanner<'_> {
    fn init(&mut self, _options: &HashMap<String, String>) -> Result<()> {
        Err(MapError::Unsupported(
            "the sorted map is always a leaf scan source",
        ))
    }

    fn seek(&mut self, range: Range, column_families: &[Bytes], inclusive: bool) -> Result<()> {
        if !column_families.is_empty() || inclusive {
            return Err(MapError::InvalidArgument(
                "column family filtering is performed by the merging layer".to_string(),
            ));
        }

        if self.interrupted() {
            return Err(MapError::Interrupted);
        }

        self.iter.close();
        self.iter = match range.start_key() {
            Some(start) => self.map.iter_from(start)?,
            None => self.map.iter()?,
        };
        self.range = range;

        self.pull()?;

        // exclusive-start semantics: step past entries before the range
        loop {
            let skip = match &self.top {
                Some((key, _)) => self.range.before_start(key),
                None => false,
            };
            if !skip {
                break;
            }
            self.advance()?;
        }

        Ok(())
    }

    fn has_top(&self) -> bool {
        self.top.is_some()
    }

    fn top_key(&self) -> Option<&Key> {
        self.top.as_ref().map(|(key, _)| key)
    }

    fn top_value(&self) -> Option<&Value> {
        self.top.as_ref().map(|(_, value)| value)
    }

    fn advance(&mut self) -> Result<()> {
        if self.top.is_none() {
            return Err(MapError::Exhausted);
        }

        // checking the interrupt flag on every call costs too much on the
        // hot path; every `interrupt_check_stride` calls bounds
        // cancellation latency without the steady-state cost
        if let Some(flag) = &self.interrupt_flag {
            let count = self.interrupt_checks;
            self.interrupt_checks = count.wrapping_add(1);
            if count % self.map.config().interrupt_check_stride == 0
                && flag.load(Ordering::Relaxed)
            {
                return Err(MapError::Interrupted);
            }
        }

        self.pull()
    }

    fn deep_copy(&self) -> Result<Self> {
        RangeScanner::new(self.map, self.interrupt_flag.clone())
    }

    fn set_interrupt_flag(&mut self, flag: Arc<AtomicBool>) {
        self.interrupt_flag = Some(flag);
    }
}
