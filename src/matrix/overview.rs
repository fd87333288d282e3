use crate::core::{MatrixOverview, build_overview};
use crate::error::Result;

use super::{LevelMatrix, logged};

impl LevelMatrix<'_> {
    /// Taxonomy and level-id summary for navigation.
    pub fn get_matrix_overview(&self) -> Result<MatrixOverview> {
        logged("get_matrix_overview", self.read_overview())
    }

    fn read_overview(&self) -> Result<MatrixOverview> {
        let taxonomy = self.db.taxonomy_pairs()?;
        let level_ids = self.db.level_ids()?;
        Ok(build_overview(taxonomy, level_ids))
    }
}
