//! Shared test utilities for ladder.
//!
//! Public so integration tests, benches and the unit tests can share the same
//! stores and sample data.

pub mod fixtures;
pub mod logging;

pub use fixtures::MatrixFixture;
pub use logging::TestLogger;
