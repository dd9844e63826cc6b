//! Interrupt Tests
//!
//! Tests verify:
//! - Bounded cancellation latency under the polling stride
//! - Seek-time interrupt checks
//! - Flag sharing across deep copies

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tabletmap::{Key, MapError, Range, ScanSource, SortedMap, Value};

fn large_map(entries: usize) -> SortedMap {
    let map = SortedMap::new();
    for i in 0..entries {
        map.put(
            Key::new(format!("row{i:06}").into_bytes(), "", "", "", 0),
            Value::from("v"),
        )
        .unwrap();
    }
    map
}

#[test]
fn test_interrupt_stops_scan_within_stride() {
    let map = large_map(10_000);
    let flag = Arc::new(AtomicBool::new(false));

    let mut scanner = map.scanner().unwrap();
    scanner.set_interrupt_flag(Arc::clone(&flag));

    for _ in 0..50 {
        scanner.advance().unwrap();
    }

    flag.store(true, Ordering::Relaxed);

    let mut further = 0;
    let result = loop {
        match scanner.advance() {
            Ok(()) => further += 1,
            Err(e) => break e,
        }
    };

    assert_eq!(result, MapError::Interrupted);
    // cancellation latency is bounded by the polling stride
    assert!(further <= 100, "scan ran {further} advances past the flag");

    map.close().unwrap();
}

#[test]
fn test_interrupt_checked_on_first_advance() {
    let map = large_map(10);
    let flag = Arc::new(AtomicBool::new(true));

    let mut scanner = map.scanner().unwrap();
    scanner.set_interrupt_flag(flag);

    assert_eq!(scanner.advance(), Err(MapError::Interrupted));

    map.close().unwrap();
}

#[test]
fn test_seek_fails_when_already_interrupted() {
    let map = large_map(10);
    let flag = Arc::new(AtomicBool::new(true));

    let mut scanner = map.scanner().unwrap();
    scanner.set_interrupt_flag(flag);

    assert_eq!(scanner.seek(Range::all(), &[], false), Err(MapError::Interrupted));

    map.close().unwrap();
}

#[test]
fn test_scan_without_flag_is_never_interrupted() {
    let map = large_map(500);

    let mut scanner = map.scanner().unwrap();
    let mut count = 0;
    while scanner.has_top() {
        scanner.advance().unwrap();
        count += 1;
    }
    assert_eq!(count, 500);

    map.close().unwrap();
}

#[test]
fn test_deep_copy_shares_interrupt_flag() {
    let map = large_map(10);
    let flag = Arc::new(AtomicBool::new(false));

    let mut scanner = map.scanner().unwrap();
    scanner.set_interrupt_flag(Arc::clone(&flag));

    let mut copy = scanner.deep_copy().unwrap();

    flag.store(true, Ordering::Relaxed);

    // both scans observe the one flag
    assert_eq!(copy.seek(Range::all(), &[], false), Err(MapError::Interrupted));
    assert_eq!(scanner.seek(Range::all(), &[], false), Err(MapError::Interrupted));

    map.close().unwrap();
}

#[test]
fn test_replacing_flag_detaches_the_old_one() {
    let map = large_map(10);
    let old = Arc::new(AtomicBool::new(false));
    let new = Arc::new(AtomicBool::new(false));

    let mut scanner = map.scanner().unwrap();
    scanner.set_interrupt_flag(Arc::clone(&old));
    scanner.set_interrupt_flag(Arc::clone(&new));

    old.store(true, Ordering::Relaxed);
    scanner.advance().unwrap();

    new.store(true, Ordering::Relaxed);
    assert_eq!(scanner.seek(Range::all(), &[], false), Err(MapError::Interrupted));

    map.close().unwrap();
}
