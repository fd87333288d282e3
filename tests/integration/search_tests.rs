use std::collections::HashSet;

use ladder::test_utils::{MatrixFixture, TestLogger};

#[test]
fn search_is_case_insensitive() {
    let fixture = MatrixFixture::seeded();
    let matrix = fixture.matrix();

    let upper = matrix.search_levels("TECHNICAL").unwrap();
    let lower = matrix.search_levels("technical").unwrap();
    assert!(!upper.is_empty());
    assert_eq!(upper, lower);
}

#[test]
fn search_results_are_unique_per_taxonomy_slot() {
    let fixture = MatrixFixture::seeded();
    let results = fixture.matrix().search_levels("e").unwrap();

    let mut seen = HashSet::new();
    for result in &results {
        assert!(
            seen.insert((&result.level_id, &result.category, &result.sub_category)),
            "duplicate result for {result:?}"
        );
    }
    // Every seeded criterion contains an "e" somewhere.
    assert_eq!(results.len(), 15);
}

#[test]
fn snippet_comes_from_job_title_first() {
    let fixture = MatrixFixture::seeded();
    let results = fixture.matrix().search_levels("manager").unwrap();

    assert_eq!(results.len(), 5);
    for result in &results {
        assert_eq!(result.level_id, "EM1");
        assert_eq!(result.match_snippet, "Engineering **Manager**");
    }
}

#[test]
fn snippet_is_truncated_around_match() {
    let log = TestLogger::new("snippet_is_truncated_around_match");
    let fixture = MatrixFixture::seeded();
    let results = fixture.matrix().search_levels("skip-levels").unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    log.log_input("snippet", &result.match_snippet);
    assert_eq!(result.level_id, "EM1");
    assert_eq!(result.sub_category, "Mentoring & Feedback");
    assert!(result.match_snippet.starts_with("..."));
    assert!(result.match_snippet.ends_with("..."));
    assert!(result.match_snippet.contains("**skip-levels**"));
    log.pass();
}

#[test]
fn missing_description_becomes_empty_string() {
    let fixture = MatrixFixture::seeded();
    let results = fixture.matrix().search_levels("execution").unwrap();

    let em1 = results
        .iter()
        .find(|r| r.level_id == "EM1" && r.sub_category == "Execution")
        .unwrap();
    assert_eq!(em1.description, "");
}

#[test]
fn blank_and_unmatched_queries() {
    let fixture = MatrixFixture::seeded();
    let matrix = fixture.matrix();
    assert!(matrix.search_levels("").unwrap().is_empty());
    assert!(matrix.search_levels(" \n ").unwrap().is_empty());
    assert!(matrix.search_levels("zzzz-not-present").unwrap().is_empty());
    assert!(matrix.search_levels("(.*)").unwrap().is_empty());
}

#[test]
fn levels_without_criteria_are_not_searched() {
    let fixture = MatrixFixture::seeded();
    // Only L1/L2 mentions "fundamentals", and it has no criteria.
    assert!(fixture.matrix().search_levels("fundamentals").unwrap().is_empty());
}
