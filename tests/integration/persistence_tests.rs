use ladder::Database;
use ladder::storage::migrations::SCHEMA_VERSION;
use ladder::test_utils::MatrixFixture;

#[test]
fn data_survives_reopen() {
    let fixture = MatrixFixture::seeded();
    let before = fixture.matrix().get_all_levels().unwrap();

    let reopened = Database::open(&fixture.db_path).unwrap();
    assert_eq!(reopened.schema_version(), SCHEMA_VERSION);

    let after = ladder::LevelMatrix::new(&reopened).get_all_levels().unwrap();
    assert_eq!(before, after);
}

#[test]
fn created_at_round_trips_exactly() {
    let fixture = MatrixFixture::new();
    let created = fixture.add_level("L4");

    let reopened = Database::open(&fixture.db_path).unwrap();
    let stored = reopened.get_level("L4").unwrap().unwrap();
    assert_eq!(stored.created_at, created.created_at);
}

#[test]
fn store_passes_integrity_check() {
    let fixture = MatrixFixture::seeded();
    assert!(fixture.db.integrity_check().unwrap());
}
