//! Data model test harness
//!
//! - Key tests: tests/data_tests/key_tests.rs
//! - Mutation tests: tests/data_tests/mutation_tests.rs

mod key_tests;
