//! Level reads: all, by id, filtered, compared

use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::core::{LevelWithCriteria, assemble_levels, group_by_key};
use crate::error::Result;
use crate::search::CriteriaFilter;

use super::{LevelMatrix, logged};

impl LevelMatrix<'_> {
    /// Every level ordered by id, criteria ordered by category then
    /// sub-category.
    pub fn get_all_levels(&self) -> Result<Vec<LevelWithCriteria>> {
        logged("get_all_levels", self.read_all_levels())
    }

    /// One level with its criteria; `None` when the id is unknown.
    pub fn get_level_by_id(&self, id: &str) -> Result<Option<LevelWithCriteria>> {
        logged(
            "get_level_by_id",
            self.db
                .level_rows_for(id)
                .map(|rows| assemble_levels(rows, |_| true).into_iter().next()),
        )
    }

    /// Every level, with only the criteria the filter allows.
    pub fn get_filtered_levels(&self, filter: &CriteriaFilter) -> Result<Vec<LevelWithCriteria>> {
        logged("get_filtered_levels", self.read_filtered_levels(filter))
    }

    /// The requested levels in request order. Unknown ids are skipped and
    /// repeated ids appear once, at their first position.
    pub fn compare_levels(&self, level_ids: &[String]) -> Result<Vec<LevelWithCriteria>> {
        logged("compare_levels", self.read_compared_levels(level_ids))
    }

    fn read_all_levels(&self) -> Result<Vec<LevelWithCriteria>> {
        let levels = self.db.list_levels()?;
        let criteria = self.db.list_criteria_by_taxonomy()?;

        let mut by_level: HashMap<String, _> =
            group_by_key(criteria, |c| c.engineering_level_id.clone())
                .into_iter()
                .collect();

        Ok(levels
            .into_iter()
            .map(|level| {
                let criteria = by_level.remove(&level.id).unwrap_or_default();
                LevelWithCriteria { level, criteria }
            })
            .collect())
    }

    fn read_filtered_levels(&self, filter: &CriteriaFilter) -> Result<Vec<LevelWithCriteria>> {
        let mut levels = assemble_levels(self.db.level_rows()?, |c| filter.matches(c));
        levels.sort_by(|a, b| a.id().cmp(b.id()));
        debug!(
            levels = levels.len(),
            unfiltered = filter.is_empty(),
            "filtered levels"
        );
        Ok(levels)
    }

    fn read_compared_levels(&self, level_ids: &[String]) -> Result<Vec<LevelWithCriteria>> {
        let requested: Vec<String> = level_ids.iter().unique().cloned().collect();
        let rows = self.db.level_rows_in(&requested)?;

        let mut found: HashMap<String, LevelWithCriteria> = assemble_levels(rows, |_| true)
            .into_iter()
            .map(|level| (level.id().to_string(), level))
            .collect();

        Ok(requested.iter().filter_map(|id| found.remove(id)).collect())
    }
}
