use ladder::LadderError;
use ladder::matrix::seed::{seed_criteria, seed_levels};
use ladder::test_utils::MatrixFixture;

#[test]
fn seed_loads_sample_matrix() {
    let fixture = MatrixFixture::new();
    let summary = fixture.matrix().seed_database().unwrap();

    assert_eq!(summary.levels, seed_levels().len());
    assert_eq!(summary.criteria, seed_criteria().len());
    assert_eq!(fixture.db.count_levels().unwrap(), 4);
    assert_eq!(fixture.db.count_criteria().unwrap(), 15);
}

#[test]
fn seed_over_existing_level_is_atomic() {
    let fixture = MatrixFixture::new();
    fixture.add_level("L5");
    fixture.add_criterion("L5", "Craft", "Scope", Some("custom"));

    let err = fixture.matrix().seed_database().unwrap_err();
    assert!(matches!(err, LadderError::LevelConflict(ref id) if id == "L5"));

    assert_eq!(fixture.db.count_levels().unwrap(), 1);
    assert_eq!(fixture.db.count_criteria().unwrap(), 1);
    assert!(fixture.matrix().get_level_by_id("L3").unwrap().is_none());
}

#[test]
fn health_reflects_seeded_counts() {
    let fixture = MatrixFixture::seeded();
    let report = fixture.matrix().health().unwrap();
    assert_eq!(report.status, "ok");
    assert_eq!(report.levels, 4);
    assert_eq!(report.criteria, 15);
}
