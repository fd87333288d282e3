//! Integration test suite entry point.
//!
//! Exercises every matrix operation through the library API against
//! file-backed stores.

mod overview_tests;
mod persistence_tests;
mod reader_tests;
mod search_tests;
mod seed_tests;
mod writer_tests;
