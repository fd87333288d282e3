use ladder::LadderError;
use ladder::core::{NewEngineeringLevel, NewLevelCriterion};
use ladder::test_utils::MatrixFixture;

#[test]
fn created_level_is_readable() {
    let fixture = MatrixFixture::new();
    let matrix = fixture.matrix();

    let input = NewEngineeringLevel::new("TL1", "TL1")
        .job_title("Lead Engineer")
        .scope_of_influence_summary("Their team")
        .ownership_summary("Team deliverables");
    let created = matrix.create_engineering_level(&input).unwrap();

    let fetched = matrix.get_level_by_id("TL1").unwrap().unwrap();
    assert_eq!(fetched.level, created);
    assert!(fetched.criteria.is_empty());
    assert!(fetched.level.trajectory_notes.is_none());
}

#[test]
fn duplicate_level_leaves_store_unchanged() {
    let fixture = MatrixFixture::seeded();
    let matrix = fixture.matrix();
    let before = matrix.get_level_by_id("L3").unwrap().unwrap();

    let err = matrix
        .create_engineering_level(&NewEngineeringLevel::new("L3", "Replacement"))
        .unwrap_err();

    assert!(matches!(err, LadderError::LevelConflict(ref id) if id == "L3"));
    assert_eq!(err.to_string(), "Engineering level with ID 'L3' already exists");
    assert_eq!(fixture.db.count_levels().unwrap(), 4);
    assert_eq!(matrix.get_level_by_id("L3").unwrap().unwrap(), before);
}

#[test]
fn criterion_requires_existing_level() {
    let fixture = MatrixFixture::seeded();
    let err = fixture
        .matrix()
        .create_level_criterion(&NewLevelCriterion::new("TL1", "Craft", "Scope", Some("x")))
        .unwrap_err();

    assert!(matches!(err, LadderError::LevelNotFound(ref id) if id == "TL1"));
    assert_eq!(fixture.db.count_criteria().unwrap(), 15);
}

#[test]
fn created_criterion_gets_new_id() {
    let fixture = MatrixFixture::seeded();
    let matrix = fixture.matrix();

    let criterion = matrix
        .create_level_criterion(&NewLevelCriterion::new(
            "L1/L2",
            "Craft",
            "Scope",
            Some("Owns small tasks with guidance"),
        ))
        .unwrap();
    assert!(criterion.id > 15);

    let level = matrix.get_level_by_id("L1/L2").unwrap().unwrap();
    assert_eq!(level.criteria, vec![criterion]);
}
