//! Taxonomy summary and level track classification

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::grouping::group_by_key;
use super::level::{LevelGroups, MatrixOverview};

/// Naming-convention track of a level id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelTrack {
    /// Individual contributor
    #[serde(rename = "IC")]
    Ic,
    /// Tech lead
    #[serde(rename = "TL")]
    Tl,
    /// Engineering manager
    #[serde(rename = "EM")]
    Em,
}

impl LevelTrack {
    /// Classify a level id. First match wins: `L…` or anything containing
    /// `L1/L2` is IC, then `TL…`, then `EM…`. Other ids belong to no track.
    pub fn classify(level_id: &str) -> Option<Self> {
        if level_id.starts_with('L') || level_id.contains("L1/L2") {
            Some(Self::Ic)
        } else if level_id.starts_with("TL") {
            Some(Self::Tl)
        } else if level_id.starts_with("EM") {
            Some(Self::Em)
        } else {
            None
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ic => "IC",
            Self::Tl => "TL",
            Self::Em => "EM",
        }
    }
}

impl std::fmt::Display for LevelTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl LevelGroups {
    /// Partition ids by track, keeping input order within each group.
    pub fn from_ids<'a>(level_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut groups = Self::default();
        for id in level_ids {
            match LevelTrack::classify(id) {
                Some(LevelTrack::Ic) => groups.ic.push(id.to_string()),
                Some(LevelTrack::Tl) => groups.tl.push(id.to_string()),
                Some(LevelTrack::Em) => groups.em.push(id.to_string()),
                None => {}
            }
        }
        groups
    }
}

/// Build the overview from `(category, sub_category)` pairs ordered by
/// category then sub-category, and level ids in ascending order.
pub fn build_overview(
    taxonomy: impl IntoIterator<Item = (String, String)>,
    level_ids: Vec<String>,
) -> MatrixOverview {
    let grouped = group_by_key(taxonomy, |(category, _)| category.clone());
    let level_groups = LevelGroups::from_ids(level_ids.iter().map(String::as_str));

    let mut overview = MatrixOverview {
        level_ids,
        level_groups,
        ..MatrixOverview::default()
    };

    for (category, pairs) in grouped {
        let subs = pairs.into_iter().map(|(_, sub)| sub).unique().collect();
        overview.categories.push(category.clone());
        overview.sub_categories.insert(category, subs);
    }

    overview
}
