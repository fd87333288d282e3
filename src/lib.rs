pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod search;
pub mod storage;
pub mod test_utils;

pub use error::{LadderError, Result};
pub use matrix::LevelMatrix;
pub use storage::Database;

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
