use std::path::PathBuf;

use tempfile::TempDir;

use crate::core::{EngineeringLevel, LevelCriterion, NewEngineeringLevel, NewLevelCriterion};
use crate::matrix::LevelMatrix;
use crate::storage::Database;

/// A file-backed store in its own temp directory.
pub struct MatrixFixture {
    pub temp_dir: TempDir,
    pub db_path: PathBuf,
    pub db: Database,
}

impl MatrixFixture {
    /// Empty, migrated store.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("ladder.db");
        let db = Database::open(&db_path).expect("Failed to open test database");

        println!("[FIXTURE] Created database: {}", db_path.display());

        Self {
            temp_dir,
            db_path,
            db,
        }
    }

    /// Store loaded with the sample matrix.
    pub fn seeded() -> Self {
        let fixture = Self::new();
        let summary = fixture
            .matrix()
            .seed_database()
            .expect("Failed to seed test database");
        println!(
            "[FIXTURE] Seeded {} levels, {} criteria",
            summary.levels, summary.criteria
        );
        fixture
    }

    pub const fn matrix(&self) -> LevelMatrix<'_> {
        LevelMatrix::new(&self.db)
    }

    /// Insert a level whose title equals its id.
    pub fn add_level(&self, id: &str) -> EngineeringLevel {
        self.db
            .insert_level(&NewEngineeringLevel::new(id, id))
            .expect("Failed to insert level")
    }

    pub fn add_criterion(
        &self,
        level_id: &str,
        category: &str,
        sub_category: &str,
        description: Option<&str>,
    ) -> LevelCriterion {
        self.db
            .insert_criterion(&NewLevelCriterion::new(
                level_id,
                category,
                sub_category,
                description,
            ))
            .expect("Failed to insert criterion")
    }
}

impl Default for MatrixFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MatrixFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up: {}", self.temp_dir.path().display());
    }
}
