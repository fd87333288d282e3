//! Reads over a seeded store never lose levels or reorder requests.

use std::collections::HashSet;

use proptest::prelude::*;

use ladder::search::CriteriaFilter;
use ladder::{Database, LevelMatrix};

const SEEDED_IDS: [&str; 4] = ["EM1", "L1/L2", "L3", "L5"];

fn seeded_db() -> Database {
    let db = Database::open_in_memory().unwrap();
    LevelMatrix::new(&db).seed_database().unwrap();
    db
}

fn arb_level_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("EM1".to_string()),
        Just("L1/L2".to_string()),
        Just("L3".to_string()),
        Just("L5".to_string()),
        Just("TL1".to_string()),
        "[A-Z]{1,2}[0-9]",
    ]
}

fn arb_names(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(pool).prop_map(str::to_string), 0..3)
}

const CATEGORIES: &[&str] = &["Craft", "Impact", "Growth", "Leadership"];
const SUB_CATEGORIES: &[&str] = &[
    "Scope",
    "Technical Expertise",
    "Planning",
    "Execution",
    "Mentoring & Feedback",
    "Hiring",
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn filtering_never_drops_levels(
        categories in arb_names(CATEGORIES),
        sub_categories in arb_names(SUB_CATEGORIES),
    ) {
        let db = seeded_db();
        let filter = CriteriaFilter::new()
            .with_categories(categories.clone())
            .with_sub_categories(sub_categories.clone());
        let levels = LevelMatrix::new(&db).get_filtered_levels(&filter).unwrap();

        let ids: Vec<&str> = levels.iter().map(|l| l.id()).collect();
        prop_assert_eq!(ids, SEEDED_IDS.to_vec());

        for criterion in levels.iter().flat_map(|l| &l.criteria) {
            prop_assert!(categories.is_empty() || categories.contains(&criterion.category));
            prop_assert!(
                sub_categories.is_empty() || sub_categories.contains(&criterion.sub_category)
            );
        }
    }

    #[test]
    fn compare_keeps_first_occurrence_order(request in prop::collection::vec(arb_level_id(), 0..6)) {
        let db = seeded_db();
        let levels = LevelMatrix::new(&db).compare_levels(&request).unwrap();

        let mut seen = HashSet::new();
        let expected: Vec<&str> = request
            .iter()
            .map(String::as_str)
            .filter(|id| SEEDED_IDS.contains(id))
            .filter(|id| seen.insert(*id))
            .collect();
        let actual: Vec<&str> = levels.iter().map(|l| l.id()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn search_accepts_any_query(query in "\\PC{0,24}") {
        let db = seeded_db();
        let results = LevelMatrix::new(&db).search_levels(&query).unwrap();

        let mut slots = HashSet::new();
        for result in &results {
            prop_assert!(slots.insert((
                result.level_id.clone(),
                result.category.clone(),
                result.sub_category.clone(),
            )));
            prop_assert!(!result.match_snippet.is_empty());
        }
    }
}
