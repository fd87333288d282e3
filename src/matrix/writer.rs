//! Level and criterion creation

use tracing::info;

use crate::core::{EngineeringLevel, LevelCriterion, NewEngineeringLevel, NewLevelCriterion};
use crate::error::Result;

use super::{LevelMatrix, logged};

impl LevelMatrix<'_> {
    /// Store a new level.
    ///
    /// Fails with [`LevelConflict`](crate::error::LadderError::LevelConflict)
    /// when the id is taken; the store is left unchanged. Any other string,
    /// empty included, is accepted as the id.
    pub fn create_engineering_level(&self, input: &NewEngineeringLevel) -> Result<EngineeringLevel> {
        logged("create_engineering_level", self.insert_level(input))
    }

    /// Attach a criterion to an existing level.
    ///
    /// Fails with [`LevelNotFound`](crate::error::LadderError::LevelNotFound)
    /// when the level does not exist.
    pub fn create_level_criterion(&self, input: &NewLevelCriterion) -> Result<LevelCriterion> {
        logged("create_level_criterion", self.insert_criterion(input))
    }

    fn insert_level(&self, input: &NewEngineeringLevel) -> Result<EngineeringLevel> {
        let level = self.db.insert_level(input)?;
        info!(level_id = %level.id, "created engineering level");
        Ok(level)
    }

    fn insert_criterion(&self, input: &NewLevelCriterion) -> Result<LevelCriterion> {
        let criterion = self.db.insert_criterion(input)?;
        info!(
            criterion_id = criterion.id,
            level_id = %criterion.engineering_level_id,
            category = %criterion.category,
            sub_category = %criterion.sub_category,
            "created level criterion"
        );
        Ok(criterion)
    }
}
