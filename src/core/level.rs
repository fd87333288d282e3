//! Leveling matrix data structures

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rung on the engineering career ladder (e.g. "L3", "TL1", "EM1", "L1/L2").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineeringLevel {
    /// Human-assigned unique id, never generated
    pub id: String,
    pub title: String,
    pub job_title: Option<String>,
    pub one_sentence_description: Option<String>,
    pub scope_of_influence_summary: Option<String>,
    pub ownership_summary: Option<String>,
    pub trajectory_notes: Option<String>,
    /// Set by the store on insert; never updated
    pub created_at: DateTime<Utc>,
}

/// One graded expectation attached to a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCriterion {
    /// Store-assigned, monotonically increasing
    pub id: i64,
    pub engineering_level_id: String,
    pub category: String,
    pub sub_category: String,
    pub description: Option<String>,
}

/// A level together with its criteria, as returned by every read operation.
///
/// `criteria` is always present; a level without criteria carries an empty
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelWithCriteria {
    #[serde(flatten)]
    pub level: EngineeringLevel,
    pub criteria: Vec<LevelCriterion>,
}

impl LevelWithCriteria {
    pub fn new(level: EngineeringLevel) -> Self {
        Self {
            level,
            criteria: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.level.id
    }
}

/// Input for creating a level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEngineeringLevel {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub one_sentence_description: Option<String>,
    #[serde(default)]
    pub scope_of_influence_summary: Option<String>,
    #[serde(default)]
    pub ownership_summary: Option<String>,
    #[serde(default)]
    pub trajectory_notes: Option<String>,
}

impl NewEngineeringLevel {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn job_title(mut self, value: impl Into<String>) -> Self {
        self.job_title = Some(value.into());
        self
    }

    #[must_use]
    pub fn one_sentence_description(mut self, value: impl Into<String>) -> Self {
        self.one_sentence_description = Some(value.into());
        self
    }

    #[must_use]
    pub fn scope_of_influence_summary(mut self, value: impl Into<String>) -> Self {
        self.scope_of_influence_summary = Some(value.into());
        self
    }

    #[must_use]
    pub fn ownership_summary(mut self, value: impl Into<String>) -> Self {
        self.ownership_summary = Some(value.into());
        self
    }

    #[must_use]
    pub fn trajectory_notes(mut self, value: impl Into<String>) -> Self {
        self.trajectory_notes = Some(value.into());
        self
    }
}

/// Input for creating a criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLevelCriterion {
    pub engineering_level_id: String,
    pub category: String,
    pub sub_category: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewLevelCriterion {
    pub fn new(
        engineering_level_id: impl Into<String>,
        category: impl Into<String>,
        sub_category: impl Into<String>,
        description: Option<&str>,
    ) -> Self {
        Self {
            engineering_level_id: engineering_level_id.into(),
            category: category.into(),
            sub_category: sub_category.into(),
            description: description.map(str::to_string),
        }
    }
}

/// A single search hit, one per (level, category, sub-category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub level_id: String,
    pub level_title: String,
    pub category: String,
    pub sub_category: String,
    /// Criterion description, empty when the criterion has none
    pub description: String,
    /// Context around the first matching field with the query wrapped in `**`
    pub match_snippet: String,
}

/// Level ids partitioned by naming convention.
///
/// All three keys are always serialized, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelGroups {
    #[serde(rename = "IC")]
    pub ic: Vec<String>,
    #[serde(rename = "TL")]
    pub tl: Vec<String>,
    #[serde(rename = "EM")]
    pub em: Vec<String>,
}

/// Navigation summary of the taxonomy and level ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixOverview {
    pub categories: Vec<String>,
    pub sub_categories: BTreeMap<String, Vec<String>>,
    pub level_ids: Vec<String>,
    pub level_groups: LevelGroups,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(id: &str) -> EngineeringLevel {
        EngineeringLevel {
            id: id.to_string(),
            title: id.to_string(),
            job_title: None,
            one_sentence_description: None,
            scope_of_influence_summary: None,
            ownership_summary: None,
            trajectory_notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn level_with_criteria_serializes_flat_with_criteria_key() {
        let value = serde_json::to_value(LevelWithCriteria::new(level("L3"))).unwrap();
        assert_eq!(value["id"], "L3");
        assert_eq!(value["job_title"], serde_json::Value::Null);
        assert_eq!(value["criteria"], serde_json::json!([]));
        assert!(value.get("level").is_none());
    }

    #[test]
    fn empty_overview_keeps_all_group_keys() {
        let value = serde_json::to_value(MatrixOverview::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "categories": [],
                "sub_categories": {},
                "level_ids": [],
                "level_groups": { "IC": [], "TL": [], "EM": [] }
            })
        );
    }

    #[test]
    fn new_level_builder_sets_optional_fields() {
        let input = NewEngineeringLevel::new("EM1", "EM1")
            .job_title("Engineering Manager")
            .trajectory_notes("Requires business need");
        assert_eq!(input.job_title.as_deref(), Some("Engineering Manager"));
        assert_eq!(input.trajectory_notes.as_deref(), Some("Requires business need"));
        assert!(input.ownership_summary.is_none());
    }

    #[test]
    fn new_level_deserializes_with_missing_optionals() {
        let input: NewEngineeringLevel =
            serde_json::from_str(r#"{"id": "L4", "title": "Senior"}"#).unwrap();
        assert_eq!(input, NewEngineeringLevel::new("L4", "Senior"));
    }
}
