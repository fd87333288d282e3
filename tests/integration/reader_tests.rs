use ladder::search::CriteriaFilter;
use ladder::test_utils::{MatrixFixture, TestLogger};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn all_levels_include_empty_criteria_lists() {
    let log = TestLogger::new("all_levels_include_empty_criteria_lists");
    let fixture = MatrixFixture::seeded();

    let levels = fixture.matrix().get_all_levels().unwrap();
    log.log_ids("levels", levels.iter().map(|l| l.id()));

    assert_eq!(levels.len(), 4);
    let l1 = levels.iter().find(|l| l.id() == "L1/L2").unwrap();
    assert!(l1.criteria.is_empty());

    let json = serde_json::to_value(l1).unwrap();
    assert_eq!(json["criteria"], serde_json::json!([]));
    log.pass();
}

#[test]
fn all_levels_order_criteria_by_taxonomy() {
    let fixture = MatrixFixture::seeded();
    let levels = fixture.matrix().get_all_levels().unwrap();

    for level in &levels {
        let keys: Vec<_> = level
            .criteria
            .iter()
            .map(|c| (c.category.clone(), c.sub_category.clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted, "criteria of {} out of order", level.id());
    }

    let l3 = levels.iter().find(|l| l.id() == "L3").unwrap();
    let subs: Vec<_> = l3.criteria.iter().map(|c| c.sub_category.as_str()).collect();
    assert_eq!(
        subs,
        ["Scope", "Technical Expertise", "Mentoring & Feedback", "Execution", "Planning"]
    );
}

#[test]
fn level_by_id_returns_none_for_unknown() {
    let fixture = MatrixFixture::seeded();
    let matrix = fixture.matrix();

    let em1 = matrix.get_level_by_id("EM1").unwrap().unwrap();
    assert_eq!(em1.level.job_title.as_deref(), Some("Engineering Manager"));
    assert_eq!(em1.criteria.len(), 5);
    assert!(em1.criteria.iter().any(|c| c.description.is_none()));

    assert!(matrix.get_level_by_id("TL9").unwrap().is_none());
    assert!(matrix.get_level_by_id("").unwrap().is_none());
}

#[test]
fn empty_filter_is_a_noop() {
    let fixture = MatrixFixture::seeded();
    let matrix = fixture.matrix();

    let filtered = matrix.get_filtered_levels(&CriteriaFilter::new()).unwrap();
    let all = matrix.get_all_levels().unwrap();

    assert_eq!(filtered.len(), all.len());
    for (f, a) in filtered.iter().zip(&all) {
        assert_eq!(f.id(), a.id());
        assert_eq!(f.criteria.len(), a.criteria.len());
    }
}

#[test]
fn filter_by_category_and_sub_category() {
    let fixture = MatrixFixture::seeded();
    let filter = CriteriaFilter::new()
        .with_categories(["Impact"])
        .with_sub_categories(["Planning", "Scope"]);
    let levels = fixture.matrix().get_filtered_levels(&filter).unwrap();

    let order: Vec<_> = levels.iter().map(|l| l.id()).collect();
    assert_eq!(order, ["EM1", "L1/L2", "L3", "L5"]);
    for level in &levels {
        assert!(
            level
                .criteria
                .iter()
                .all(|c| c.category == "Impact" && c.sub_category == "Planning")
        );
    }
    assert_eq!(levels[2].criteria.len(), 1);
    assert!(levels[1].criteria.is_empty());
}

#[test]
fn compare_follows_request_order() {
    let log = TestLogger::new("compare_follows_request_order");
    let fixture = MatrixFixture::seeded();

    let request = ids(&["L5", "EM1", "L3"]);
    log.log_input("request", &request);
    let levels = fixture.matrix().compare_levels(&request).unwrap();
    log.log_ids("result", levels.iter().map(|l| l.id()));

    let order: Vec<_> = levels.iter().map(|l| l.id()).collect();
    assert_eq!(order, ["L5", "EM1", "L3"]);
    assert!(levels.iter().all(|l| l.criteria.len() == 5));
    log.pass();
}

#[test]
fn compare_collapses_duplicates_and_skips_unknown() {
    let fixture = MatrixFixture::seeded();
    let levels = fixture
        .matrix()
        .compare_levels(&ids(&["L3", "L3", "NOPE", "L1/L2"]))
        .unwrap();

    let order: Vec<_> = levels.iter().map(|l| l.id()).collect();
    assert_eq!(order, ["L3", "L1/L2"]);
    assert!(levels[1].criteria.is_empty());
}
