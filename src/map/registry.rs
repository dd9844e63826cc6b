//! Allocation registry
//!
//! Sorted maps are long-lived, fleet-wide resources; waiting for automatic
//! reclamation of a forgotten one wastes memory for the rest of the
//! process lifetime. Every map registers an identity here at construction
//! and deregisters on close, so a teardown hook can report leaks.
//!
//! Identity violations (registering a live identity twice, deregistering
//! an unknown one) mean the process state is corrupt; both abort.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use parking_lot::Mutex;

struct Registry {
    next_id: AtomicU64,
    total: AtomicU64,
    live: Mutex<HashSet<u64>>,
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| Registry {
        next_id: AtomicU64::new(1),
        total: AtomicU64::new(0),
        live: Mutex::new(HashSet::new()),
    })
}

/// Allocate a fresh map identity
pub(crate) fn register() -> u64 {
    let registry = registry();
    let id = registry.next_id.fetch_add(1, Ordering::Relaxed);

    let mut live = registry.live.lock();
    if !live.insert(id) {
        // something is really screwy, this should not happen
        panic!("duplicate sorted map identity {id:#018x}");
    }
    registry.total.fetch_add(1, Ordering::Relaxed);

    id
}

/// Release a map identity recorded by [`register`]
pub(crate) fn deregister(id: u64) {
    if !registry().live.lock().remove(&id) {
        panic!("attempt to release sorted map identity {id:#018x} that is not allocated");
    }
}

/// Log and return lifecycle diagnostics: (still-open maps, total ever allocated)
///
/// Hosts call this from their process-teardown hook; a non-zero open count
/// means some map was dropped or leaked without `close()`.
pub fn shutdown_report() -> (usize, u64) {
    let registry = registry();
    let open = registry.live.lock().len();
    let total = registry.total.load(Ordering::Relaxed);

    if open > 0 {
        tracing::warn!("there are {} open sorted maps", open);
    }
    tracing::debug!("{} sorted maps were allocated", total);

    (open, total)
}
