//! Storage layer for ladder
//!
//! SQLite holds levels and criteria; every query the matrix needs is a typed
//! method on [`Database`].

pub mod migrations;
pub mod sqlite;

pub use sqlite::{Database, LevelRow, SearchRow};
