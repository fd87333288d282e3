//! The leveling matrix operations
//!
//! [`LevelMatrix`] borrows an open [`Database`] and exposes every read and
//! write the matrix supports. Failures are logged with the operation name and
//! returned unchanged.

mod overview;
mod reader;
mod search;
pub mod seed;
mod writer;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::Result;
use crate::storage::Database;

pub use seed::SeedSummary;

/// Operations over the levels and criteria held in one store.
#[derive(Debug, Clone, Copy)]
pub struct LevelMatrix<'a> {
    db: &'a Database,
}

impl<'a> LevelMatrix<'a> {
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub const fn db(&self) -> &'a Database {
        self.db
    }

    /// Liveness report with store counts.
    pub fn health(&self) -> Result<HealthReport> {
        logged("health", self.build_health())
    }

    fn build_health(&self) -> Result<HealthReport> {
        let integrity_ok = self.db.integrity_check()?;
        Ok(HealthReport {
            status: if integrity_ok { "ok" } else { "degraded" }.to_string(),
            timestamp: Utc::now(),
            schema_version: self.db.schema_version(),
            levels: self.db.count_levels()?,
            criteria: self.db.count_criteria()?,
            integrity_ok,
        })
    }
}

/// Result of [`LevelMatrix::health`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub schema_version: u32,
    pub levels: u64,
    pub criteria: u64,
    pub integrity_ok: bool,
}

/// Log a failed operation with its name, then hand the error back untouched.
fn logged<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    result.inspect_err(|err| {
        error!(operation, error = %err, code = %err.code(), "matrix operation failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LadderError;

    #[test]
    fn health_on_empty_store() {
        let db = Database::open_in_memory().unwrap();
        let report = LevelMatrix::new(&db).health().unwrap();
        assert_eq!(report.status, "ok");
        assert!(report.integrity_ok);
        assert_eq!(report.levels, 0);
        assert_eq!(report.criteria, 0);
        assert_eq!(report.schema_version, crate::storage::migrations::SCHEMA_VERSION);
    }

    #[test]
    fn logged_returns_error_unchanged() {
        let result: Result<()> = logged("test", Err(LadderError::LevelNotFound("X".into())));
        assert!(matches!(result, Err(LadderError::LevelNotFound(ref id)) if id == "X"));
        assert_eq!(logged("test", Ok(7)).unwrap(), 7);
    }
}
