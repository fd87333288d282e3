//! SQLite database layer

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params, params_from_iter};
use tracing::debug;

use crate::core::{EngineeringLevel, LevelCriterion, NewEngineeringLevel, NewLevelCriterion};
use crate::error::{LadderError, Result};
use crate::storage::migrations;

const LEVEL_COLUMNS: &str = "l.id, l.title, l.job_title, l.one_sentence_description, \
     l.scope_of_influence_summary, l.ownership_summary, l.trajectory_notes, l.created_at";

const CRITERION_COLUMNS: &str = "c.id, c.engineering_level_id, c.category, c.sub_category, c.description";

/// Number of columns produced by `LEVEL_COLUMNS`; criterion columns follow.
const LEVEL_WIDTH: usize = 8;

/// SQLite database wrapper for the leveling matrix
pub struct Database {
    conn: Connection,
    schema_version: u32,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("schema_version", &self.schema_version)
            .finish_non_exhaustive()
    }
}

/// A criterion joined with the level fields that search inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRow {
    pub level_id: String,
    pub level_title: String,
    pub job_title: Option<String>,
    pub one_sentence_description: Option<String>,
    pub category: String,
    pub sub_category: String,
    pub description: Option<String>,
}

/// Left-join row: a level and at most one of its criteria.
pub type LevelRow = (EngineeringLevel, Option<LevelCriterion>);

impl Database {
    /// Open database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        Self::configure_pragmas(&conn)?;
        let schema_version = migrations::run_migrations(&conn)?;
        Ok(Self {
            conn,
            schema_version,
        })
    }

    /// Get a reference to the connection
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Current schema version after migrations.
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// Wait up to `timeout` for a competing writer before failing with `SQLITE_BUSY`.
    pub fn set_busy_timeout(&self, timeout: Duration) -> Result<()> {
        self.conn.busy_timeout(timeout)?;
        Ok(())
    }

    /// Run `f` inside a single transaction; any error rolls everything back.
    pub fn in_transaction<T>(&self, f: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(self)?;
        tx.commit()?;
        Ok(value)
    }

    // =========================================================================
    // WRITES
    // =========================================================================

    /// Insert a level. The primary key is the uniqueness check: a duplicate id
    /// surfaces as [`LadderError::LevelConflict`].
    pub fn insert_level(&self, input: &NewEngineeringLevel) -> Result<EngineeringLevel> {
        let created_at = Utc::now();

        self.conn
            .execute(
                "INSERT INTO engineering_levels (
                    id, title, job_title, one_sentence_description,
                    scope_of_influence_summary, ownership_summary, trajectory_notes, created_at
                 ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    input.id,
                    input.title,
                    input.job_title,
                    input.one_sentence_description,
                    input.scope_of_influence_summary,
                    input.ownership_summary,
                    input.trajectory_notes,
                    created_at.to_rfc3339(),
                ],
            )
            .map_err(|err| match constraint_violation(&err) {
                Some(Constraint::Unique) => LadderError::LevelConflict(input.id.clone()),
                _ => LadderError::Database(err),
            })?;

        Ok(EngineeringLevel {
            id: input.id.clone(),
            title: input.title.clone(),
            job_title: input.job_title.clone(),
            one_sentence_description: input.one_sentence_description.clone(),
            scope_of_influence_summary: input.scope_of_influence_summary.clone(),
            ownership_summary: input.ownership_summary.clone(),
            trajectory_notes: input.trajectory_notes.clone(),
            created_at,
        })
    }

    /// Insert a criterion. The foreign key is the existence check: an unknown
    /// level surfaces as [`LadderError::LevelNotFound`].
    pub fn insert_criterion(&self, input: &NewLevelCriterion) -> Result<LevelCriterion> {
        self.conn
            .execute(
                "INSERT INTO level_criteria (engineering_level_id, category, sub_category, description)
                 VALUES (?, ?, ?, ?)",
                params![
                    input.engineering_level_id,
                    input.category,
                    input.sub_category,
                    input.description,
                ],
            )
            .map_err(|err| match constraint_violation(&err) {
                Some(Constraint::ForeignKey) => {
                    LadderError::LevelNotFound(input.engineering_level_id.clone())
                }
                _ => LadderError::Database(err),
            })?;

        Ok(LevelCriterion {
            id: self.conn.last_insert_rowid(),
            engineering_level_id: input.engineering_level_id.clone(),
            category: input.category.clone(),
            sub_category: input.sub_category.clone(),
            description: input.description.clone(),
        })
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub fn get_level(&self, id: &str) -> Result<Option<EngineeringLevel>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {LEVEL_COLUMNS} FROM engineering_levels l WHERE l.id = ?"
        ))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(level_from_row(row)?));
        }
        Ok(None)
    }

    /// All levels ordered by id.
    pub fn list_levels(&self) -> Result<Vec<EngineeringLevel>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {LEVEL_COLUMNS} FROM engineering_levels l ORDER BY l.id"
        ))?;
        let rows = stmt.query_map([], level_from_row)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        debug!(count = results.len(), "listed levels");
        Ok(results)
    }

    /// All criteria ordered by category, then sub-category.
    pub fn list_criteria_by_taxonomy(&self) -> Result<Vec<LevelCriterion>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CRITERION_COLUMNS} FROM level_criteria c
             ORDER BY c.category, c.sub_category, c.id"
        ))?;
        let rows = stmt.query_map([], |row| criterion_from_row(row, 0))?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        debug!(count = results.len(), "listed criteria");
        Ok(results)
    }

    /// Every level left-joined with its criteria, ordered by level id.
    pub fn level_rows(&self) -> Result<Vec<LevelRow>> {
        self.query_level_rows(
            &format!(
                "SELECT {LEVEL_COLUMNS}, {CRITERION_COLUMNS}
                 FROM engineering_levels l
                 LEFT JOIN level_criteria c ON c.engineering_level_id = l.id
                 ORDER BY l.id, c.id"
            ),
            Vec::new(),
        )
    }

    /// One level left-joined with its criteria; empty when the level is unknown.
    pub fn level_rows_for(&self, id: &str) -> Result<Vec<LevelRow>> {
        self.query_level_rows(
            &format!(
                "SELECT {LEVEL_COLUMNS}, {CRITERION_COLUMNS}
                 FROM engineering_levels l
                 LEFT JOIN level_criteria c ON c.engineering_level_id = l.id
                 WHERE l.id = ?
                 ORDER BY c.id"
            ),
            vec![id],
        )
    }

    /// The listed levels left-joined with their criteria, in one query.
    pub fn level_rows_in(&self, ids: &[String]) -> Result<Vec<LevelRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; ids.len()].join(", ");
        self.query_level_rows(
            &format!(
                "SELECT {LEVEL_COLUMNS}, {CRITERION_COLUMNS}
                 FROM engineering_levels l
                 LEFT JOIN level_criteria c ON c.engineering_level_id = l.id
                 WHERE l.id IN ({placeholders})
                 ORDER BY l.id, c.id"
            ),
            ids.iter().map(String::as_str).collect(),
        )
    }

    /// Every criterion inner-joined with its level.
    pub fn search_rows(&self) -> Result<Vec<SearchRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT l.id, l.title, l.job_title, l.one_sentence_description,
                    c.category, c.sub_category, c.description
             FROM engineering_levels l
             INNER JOIN level_criteria c ON c.engineering_level_id = l.id
             ORDER BY l.id, c.id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(SearchRow {
                level_id: row.get(0)?,
                level_title: row.get(1)?,
                job_title: row.get(2)?,
                one_sentence_description: row.get(3)?,
                category: row.get(4)?,
                sub_category: row.get(5)?,
                description: row.get(6)?,
            })
        })?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        debug!(count = results.len(), "fetched search rows");
        Ok(results)
    }

    /// Distinct `(category, sub_category)` pairs ordered by both.
    pub fn taxonomy_pairs(&self) -> Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT category, sub_category FROM level_criteria
             ORDER BY category, sub_category",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let mut pairs = Vec::new();
        for row in rows {
            pairs.push(row?);
        }
        Ok(pairs)
    }

    /// All level ids in ascending order.
    pub fn level_ids(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM engineering_levels ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids)
    }

    pub fn count_levels(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM engineering_levels", [], |row| row.get(0))?;
        Ok(count.max(0).unsigned_abs())
    }

    pub fn count_criteria(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM level_criteria", [], |row| row.get(0))?;
        Ok(count.max(0).unsigned_abs())
    }

    /// Run SQLite integrity check
    pub fn integrity_check(&self) -> Result<bool> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        Ok(result == "ok")
    }

    fn query_level_rows(&self, sql: &str, args: Vec<&str>) -> Result<Vec<LevelRow>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(args), |row| {
            let level = level_from_row(row)?;
            let criterion_id: Option<i64> = row.get(LEVEL_WIDTH)?;
            let criterion = match criterion_id {
                Some(_) => Some(criterion_from_row(row, LEVEL_WIDTH)?),
                None => None,
            };
            Ok((level, criterion))
        })?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        debug!(count = results.len(), "fetched level rows");
        Ok(results)
    }

    fn configure_pragmas(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA temp_store = MEMORY;
             PRAGMA foreign_keys = ON;",
        )?;
        Ok(())
    }
}

/// Store constraints that map onto domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constraint {
    Unique,
    ForeignKey,
}

fn constraint_violation(err: &rusqlite::Error) -> Option<Constraint> {
    let rusqlite::Error::SqliteFailure(failure, _) = err else {
        return None;
    };
    if failure.code != rusqlite::ErrorCode::ConstraintViolation {
        return None;
    }
    match failure.extended_code {
        rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY | rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE => {
            Some(Constraint::Unique)
        }
        rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Constraint::ForeignKey),
        _ => None,
    }
}

fn level_from_row(row: &Row<'_>) -> rusqlite::Result<EngineeringLevel> {
    let created_at: String = row.get(7)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(err))
        })?
        .with_timezone(&Utc);

    Ok(EngineeringLevel {
        id: row.get(0)?,
        title: row.get(1)?,
        job_title: row.get(2)?,
        one_sentence_description: row.get(3)?,
        scope_of_influence_summary: row.get(4)?,
        ownership_summary: row.get(5)?,
        trajectory_notes: row.get(6)?,
        created_at,
    })
}

fn criterion_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<LevelCriterion> {
    Ok(LevelCriterion {
        id: row.get(offset)?,
        engineering_level_id: row.get(offset + 1)?,
        category: row.get(offset + 2)?,
        sub_category: row.get(offset + 3)?,
        description: row.get(offset + 4)?,
    })
}
