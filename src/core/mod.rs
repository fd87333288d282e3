//! Core leveling matrix types and logic

pub mod grouping;
pub mod level;
pub mod overview;

pub use grouping::{assemble_levels, group_by_key};
pub use level::{
    EngineeringLevel, LevelCriterion, LevelGroups, LevelWithCriteria, MatrixOverview,
    NewEngineeringLevel, NewLevelCriterion, SearchResult,
};
pub use overview::{LevelTrack, build_overview};
