//! Sample leveling matrix used to bootstrap an empty store

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{NewEngineeringLevel, NewLevelCriterion};
use crate::error::Result;

use super::{LevelMatrix, logged};

struct SeedLevel {
    id: &'static str,
    job_title: Option<&'static str>,
    one_sentence_description: Option<&'static str>,
    scope_of_influence_summary: Option<&'static str>,
    ownership_summary: Option<&'static str>,
    trajectory_notes: Option<&'static str>,
}

struct SeedCriterion {
    level_id: &'static str,
    category: &'static str,
    sub_category: &'static str,
    description: Option<&'static str>,
}

const SEED_LEVELS: &[SeedLevel] = &[
    SeedLevel {
        id: "L1/L2",
        job_title: None,
        one_sentence_description: Some(
            "Entry level engineer learning fundamentals and contributing to small tasks",
        ),
        scope_of_influence_summary: Some("Themselves and their tasks"),
        ownership_summary: Some(
            "No ownership responsibility. Learning and being actively developed by others",
        ),
        trajectory_notes: Some("Expected to progress to L3 within 1-2 years"),
    },
    SeedLevel {
        id: "L3",
        job_title: None,
        one_sentence_description: None,
        scope_of_influence_summary: Some("Their area and strategy"),
        ownership_summary: Some(
            "Consistent record of very strong ownership for their area. Accountable for results in that area.",
        ),
        trajectory_notes: Some("We expect Engineers to remain at this level for 2 years on average"),
    },
    SeedLevel {
        id: "L5",
        job_title: None,
        one_sentence_description: Some(
            "Leads projects and some cross-team efforts inside their team. An expert in the areas owned by their team. Mentors and guides juniors",
        ),
        scope_of_influence_summary: Some("industry"),
        ownership_summary: Some(
            "Fully responsible for all aspects of their area. This person is rare. This takes an exceptional level of dedication to the craft and is a big jump from Level 4. Very few companies will have someone at this skill level.",
        ),
        trajectory_notes: Some(
            "Progression beyond this level is optional. L5 Engineers may follow the IC track (L6) or TL path (Lead Engineer)",
        ),
    },
    SeedLevel {
        id: "EM1",
        job_title: Some("Engineering Manager"),
        one_sentence_description: Some(
            "An Eng Manager supports Lead Engineers, and is responsible for technical decisions and outcomes on their teams (target max reports: 3 TLs)",
        ),
        scope_of_influence_summary: None,
        ownership_summary: None,
        trajectory_notes: Some(
            "Promotion to EM and above requires there to be a business need for the role",
        ),
    },
];

const SEED_CRITERIA: &[SeedCriterion] = &[
    SeedCriterion {
        level_id: "L3",
        category: "Craft",
        sub_category: "Technical Expertise",
        description: Some(
            "Has sufficient practical and foundational knowledge to be able to understand and implement features with guidance. Learns best-practices and tools",
        ),
    },
    SeedCriterion {
        level_id: "L3",
        category: "Craft",
        sub_category: "Scope",
        description: Some("Owns tasks and small projects"),
    },
    SeedCriterion {
        level_id: "L3",
        category: "Impact",
        sub_category: "Planning",
        description: Some("Plans execution of their tasks to reliably deliver changes."),
    },
    SeedCriterion {
        level_id: "L3",
        category: "Impact",
        sub_category: "Execution",
        description: Some(
            "Completes individual tasks or small features independently in a timely fashion; is productive and seeks support from team-members",
        ),
    },
    SeedCriterion {
        level_id: "L3",
        category: "Growth",
        sub_category: "Mentoring & Feedback",
        description: Some(
            "Open to guidance and mentorship from others. Provides feedback to peers and Lead Eager to learn and expand responsibilities",
        ),
    },
    SeedCriterion {
        level_id: "L5",
        category: "Craft",
        sub_category: "Technical Expertise",
        description: Some(
            "A domain expert. Able to contribute across many teams areas of expertise. Follows relevant research Raises the bar of what we can achieve.",
        ),
    },
    SeedCriterion {
        level_id: "L5",
        category: "Craft",
        sub_category: "Scope",
        description: Some(
            "Large systems, aware of APIs and responsibility-boundaries between services",
        ),
    },
    SeedCriterion {
        level_id: "L5",
        category: "Impact",
        sub_category: "Planning",
        description: Some(
            "Writes specs and scopes tasks for large systems and work break down for several people. Able to create RFCs and negotiate with stakeholders",
        ),
    },
    SeedCriterion {
        level_id: "L5",
        category: "Impact",
        sub_category: "Execution",
        description: Some(
            "Can lead a medium or large project, supporting team members with guidance from their Lead Makes good decisions on prioritization",
        ),
    },
    SeedCriterion {
        level_id: "L5",
        category: "Growth",
        sub_category: "Mentoring & Feedback",
        description: Some(
            "Mentors new hires and peers; other team members look up to their technical expertise to solve their challenges",
        ),
    },
    SeedCriterion {
        level_id: "EM1",
        category: "Craft",
        sub_category: "Technical Expertise",
        description: Some("As L5+"),
    },
    SeedCriterion {
        level_id: "EM1",
        category: "Craft",
        sub_category: "Scope",
        description: Some("Owns the problem-domain of their teams"),
    },
    SeedCriterion {
        level_id: "EM1",
        category: "Impact",
        sub_category: "Planning",
        description: None,
    },
    SeedCriterion {
        level_id: "EM1",
        category: "Impact",
        sub_category: "Execution",
        description: None,
    },
    SeedCriterion {
        level_id: "EM1",
        category: "Growth",
        sub_category: "Mentoring & Feedback",
        description: Some(
            "Supports TLs in coaching and performance management, ensuring that verbal and written feedback is fair, delivered clearly and frequently alongside support-to-improve. Provides additional coaching through skip-levels Sets clear expectations, solicits, synthesizes and delivers feedback for growth. Demonstrates good judgement and ability when handling complex employee issues Conducts regular performance evaluations, offering constructive feedback for improvement.",
        ),
    },
];

impl SeedLevel {
    fn to_input(&self) -> NewEngineeringLevel {
        NewEngineeringLevel {
            id: self.id.to_string(),
            title: self.id.to_string(),
            job_title: self.job_title.map(str::to_string),
            one_sentence_description: self.one_sentence_description.map(str::to_string),
            scope_of_influence_summary: self.scope_of_influence_summary.map(str::to_string),
            ownership_summary: self.ownership_summary.map(str::to_string),
            trajectory_notes: self.trajectory_notes.map(str::to_string),
        }
    }
}

impl SeedCriterion {
    fn to_input(&self) -> NewLevelCriterion {
        NewLevelCriterion::new(
            self.level_id,
            self.category,
            self.sub_category,
            self.description,
        )
    }
}

/// The sample levels, in insertion order.
pub fn seed_levels() -> Vec<NewEngineeringLevel> {
    SEED_LEVELS.iter().map(SeedLevel::to_input).collect()
}

/// The sample criteria, in insertion order.
pub fn seed_criteria() -> Vec<NewLevelCriterion> {
    SEED_CRITERIA.iter().map(SeedCriterion::to_input).collect()
}

/// What [`LevelMatrix::seed_database`] inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub levels: usize,
    pub criteria: usize,
}

impl LevelMatrix<'_> {
    /// Load the sample matrix in a single transaction.
    ///
    /// If any sample level id already exists nothing is written and the call
    /// fails with [`crate::error::LadderError::LevelConflict`].
    pub fn seed_database(&self) -> Result<SeedSummary> {
        logged("seed_database", self.insert_seed())
    }

    fn insert_seed(&self) -> Result<SeedSummary> {
        let levels = seed_levels();
        let criteria = seed_criteria();

        let summary = self.db.in_transaction(|db| {
            for level in &levels {
                db.insert_level(level)?;
            }
            for criterion in &criteria {
                db.insert_criterion(criterion)?;
            }
            Ok(SeedSummary {
                levels: levels.len(),
                criteria: criteria.len(),
            })
        })?;

        info!(
            levels = summary.levels,
            criteria = summary.criteria,
            "seeded leveling matrix"
        );
        Ok(summary)
    }
}
