//! Key Tests
//!
//! Tests verify:
//! - Attribute-by-attribute lexicographic ordering
//! - Timestamp-descending ordering within a cell
//! - Tombstone and mutation-count tie-breaking
//! - Exact-lookup equality semantics
//! - Size accounting

use tabletmap::{Key, Value};

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_row_ordering() {
    let a = Key::new("a", "", "", "", 0);
    let b = Key::new("b", "", "", "", 0);

    assert!(a < b);
    assert!(b > a);
}

#[test]
fn test_family_ordering_within_row() {
    let a = Key::new("r", "cf1", "", "", 0);
    let b = Key::new("r", "cf2", "", "", 0);

    assert!(a < b);
}

#[test]
fn test_qualifier_ordering_within_family() {
    let a = Key::new("r", "cf", "cq1", "", 0);
    let b = Key::new("r", "cf", "cq2", "", 0);

    assert!(a < b);
}

#[test]
fn test_visibility_ordering_within_qualifier() {
    let a = Key::new("r", "cf", "cq", "private", 0);
    let b = Key::new("r", "cf", "cq", "public", 0);

    assert!(a < b);
}

#[test]
fn test_row_dominates_other_attributes() {
    // a later row wins no matter what the rest of the key says
    let a = Key::new("a", "zzz", "zzz", "zzz", 0);
    let b = Key::new("b", "aaa", "aaa", "aaa", 100);

    assert!(a < b);
}

#[test]
fn test_timestamp_descending() {
    let newer = Key::new("r", "cf", "cq", "", 2);
    let older = Key::new("r", "cf", "cq", "", 1);

    // later timestamps sort first
    assert!(newer < older);
}

#[test]
fn test_tombstone_sorts_before_live_cell() {
    let live = Key::new("r", "cf", "cq", "", 5);
    let dead = Key::new("r", "cf", "cq", "", 5).with_deleted(true);

    assert!(dead < live);
}

#[test]
fn test_mutation_count_breaks_final_tie() {
    let first = Key::new("r", "cf", "cq", "", 5).with_mutation_count(1);
    let second = Key::new("r", "cf", "cq", "", 5).with_mutation_count(2);

    // smaller count (applied earlier) sorts first
    assert!(first < second);
}

#[test]
fn test_equal_keys_compare_equal() {
    let a = Key::new("r", "cf", "cq", "cv", 7).with_mutation_count(3);
    let b = Key::new("r", "cf", "cq", "cv", 7).with_mutation_count(3);

    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
}

#[test]
fn test_first_for_row_sorts_before_every_key_of_row() {
    let first = Key::first_for_row("r");

    let candidates = [
        Key::new("r", "", "", "", i64::MAX),
        Key::new("r", "", "", "", i64::MAX).with_deleted(true),
        Key::new("r", "cf", "cq", "cv", 0),
        Key::new("r", "", "", "", i64::MIN),
    ];
    for key in &candidates {
        assert!(first <= *key, "expected {first} <= {key}");
    }

    // but after every key of any earlier row
    assert!(first > Key::new("q", "zzz", "zzz", "zzz", i64::MIN));
}

// =============================================================================
// Equality Tests
// =============================================================================

#[test]
fn test_eq_ignoring_count() {
    let a = Key::new("r", "cf", "cq", "", 5).with_mutation_count(1);
    let b = Key::new("r", "cf", "cq", "", 5).with_mutation_count(99);

    assert_ne!(a, b);
    assert!(a.eq_ignoring_count(&b));
}

#[test]
fn test_eq_ignoring_count_respects_tombstone_flag() {
    let live = Key::new("r", "cf", "cq", "", 5);
    let dead = Key::new("r", "cf", "cq", "", 5).with_deleted(true);

    assert!(!live.eq_ignoring_count(&dead));
}

// =============================================================================
// Accessor / Size Tests
// =============================================================================

#[test]
fn test_accessors() {
    let key = Key::new("row", "fam", "qual", "vis", 42)
        .with_deleted(true)
        .with_mutation_count(7);

    assert_eq!(&key.row()[..], b"row");
    assert_eq!(key.family(), b"fam");
    assert_eq!(key.qualifier(), b"qual");
    assert_eq!(key.visibility(), b"vis");
    assert_eq!(key.timestamp(), 42);
    assert!(key.is_deleted());
    assert_eq!(key.mutation_count(), 7);
}

#[test]
fn test_size_counts_bytes_and_fixed_fields() {
    let key = Key::new("row", "fam", "qual", "vis", 42);

    // 3 + 3 + 4 + 3 variable bytes plus the fixed-width fields
    assert_eq!(key.size(), 13 + 13);
}

// =============================================================================
// Value Tests
// =============================================================================

#[test]
fn test_value_round_trip() {
    let value = Value::from(b"payload".to_vec());

    assert_eq!(value.as_bytes(), b"payload");
    assert_eq!(value.len(), 7);
    assert!(!value.is_empty());
}

#[test]
fn test_value_copy_from_copies() {
    let buffer = vec![1u8, 2, 3];
    let value = Value::copy_from(&buffer);
    drop(buffer);

    assert_eq!(value.as_bytes(), &[1, 2, 3]);
}

#[test]
fn test_empty_value() {
    assert!(Value::empty().is_empty());
    assert_eq!(Value::empty().len(), 0);
}
