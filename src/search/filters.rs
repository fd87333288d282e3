//! Category / sub-category filters for criteria
//!
//! Filters prune criteria inside a level. They never remove the level itself.

use serde::{Deserialize, Serialize};

use crate::core::LevelCriterion;

/// Allow-lists over the criterion taxonomy.
///
/// An empty list places no restriction on its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaFilter {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub sub_categories: Vec<String>,
}

impl CriteriaFilter {
    /// Create new empty filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set category filter
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set sub-category filter
    #[must_use]
    pub fn with_sub_categories<I, S>(mut self, sub_categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_categories = sub_categories.into_iter().map(Into::into).collect();
        self
    }

    /// Check if any filters are set
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.sub_categories.is_empty()
    }

    /// Check if a criterion passes both allow-lists
    pub fn matches(&self, criterion: &LevelCriterion) -> bool {
        allows(&self.categories, &criterion.category)
            && allows(&self.sub_categories, &criterion.sub_category)
    }
}

fn allows(allowed: &[String], value: &str) -> bool {
    allowed.is_empty() || allowed.iter().any(|a| a == value)
}
