//! Sorted map test harness
//!
//! - Store operations: tests/map_tests/store_tests.rs
//! - Mutation application: tests/map_tests/mutate_tests.rs
//! - Batched iteration: tests/map_tests/iterator_tests.rs
