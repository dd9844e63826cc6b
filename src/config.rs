//! Configuration for tabletmap
//!
//! Centralized tuning knobs with sensible defaults.
//!
//! The defaults come from measured tablet workloads: a 16-entry read-ahead
//! buffer with a 4 KiB byte cap amortizes read-lock acquisition on
//! small-cell scans without letting a batch of large values pin the lock;
//! re-taking the write lock every ~10 column updates keeps bulk writes from
//! starving readers; polling the interrupt flag every 100 advances keeps
//! the check off the hot path while bounding cancellation latency.

/// Max entries buffered per read-lock acquisition
pub const DEFAULT_READ_AHEAD_ENTRIES: usize = 16;

/// Max cumulative key+value bytes buffered per read-lock acquisition
pub const DEFAULT_READ_AHEAD_BYTES: usize = 4096;

/// Scan advances between interrupt-flag checks
pub const DEFAULT_INTERRUPT_CHECK_STRIDE: u32 = 100;

/// Column updates applied per write-lock acquisition in bulk mutate
pub const DEFAULT_MUTATION_BATCH_SIZE: usize = 10;

/// Tuning configuration for a sorted map instance
#[derive(Debug, Clone)]
pub struct MapConfig {
    // -------------------------------------------------------------------------
    // Scan Configuration
    // -------------------------------------------------------------------------
    /// Read-ahead buffer cap, in entries
    pub read_ahead_entries: usize,

    /// Read-ahead buffer cap, in key+value bytes
    pub read_ahead_bytes: usize,

    /// How many scan advances pass between interrupt-flag checks
    pub interrupt_check_stride: u32,

    // -------------------------------------------------------------------------
    // Write Configuration
    // -------------------------------------------------------------------------
    /// Column updates applied per exclusive-lock acquisition in `mutate_all`
    pub mutation_batch_size: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            read_ahead_entries: DEFAULT_READ_AHEAD_ENTRIES,
            read_ahead_bytes: DEFAULT_READ_AHEAD_BYTES,
            interrupt_check_stride: DEFAULT_INTERRUPT_CHECK_STRIDE,
            mutation_batch_size: DEFAULT_MUTATION_BATCH_SIZE,
        }
    }
}

impl MapConfig {
    /// Create a new config builder
    pub fn builder() -> MapConfigBuilder {
        MapConfigBuilder::default()
    }
}

/// Builder for MapConfig
#[derive(Default)]
pub struct MapConfigBuilder {
    config: MapConfig,
}

impl MapConfigBuilder {
    pub fn read_ahead_entries(mut self, entries: usize) -> Self {
        self.config.read_ahead_entries = entries.max(1);
        self
    }

    pub fn read_ahead_bytes(mut self, bytes: usize) -> Self {
        self.config.read_ahead_bytes = bytes;
        self
    }

    pub fn interrupt_check_stride(mut self, stride: u32) -> Self {
        self.config.interrupt_check_stride = stride.max(1);
        self
    }

    pub fn mutation_batch_size(mut self, updates: usize) -> Self {
        self.config.mutation_batch_size = updates.max(1);
        self
    }

    pub fn build(self) -> MapConfig {
        self.config
    }
}
