use ladder::core::MatrixOverview;
use ladder::test_utils::MatrixFixture;

#[test]
fn empty_store_overview_serializes_all_keys() {
    let fixture = MatrixFixture::new();
    let overview = fixture.matrix().get_matrix_overview().unwrap();
    assert_eq!(overview, MatrixOverview::default());

    let json = serde_json::to_value(&overview).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "categories": [],
            "sub_categories": {},
            "level_ids": [],
            "level_groups": { "IC": [], "TL": [], "EM": [] }
        })
    );
}

#[test]
fn seeded_overview() {
    let fixture = MatrixFixture::seeded();
    let overview = fixture.matrix().get_matrix_overview().unwrap();

    assert_eq!(overview.categories, ["Craft", "Growth", "Impact"]);
    assert_eq!(overview.sub_categories["Craft"], ["Scope", "Technical Expertise"]);
    assert_eq!(overview.sub_categories["Growth"], ["Mentoring & Feedback"]);
    assert_eq!(overview.sub_categories["Impact"], ["Execution", "Planning"]);
    assert_eq!(overview.level_ids, ["EM1", "L1/L2", "L3", "L5"]);
    assert_eq!(overview.level_groups.ic, ["L1/L2", "L3", "L5"]);
    assert!(overview.level_groups.tl.is_empty());
    assert_eq!(overview.level_groups.em, ["EM1"]);
}

#[test]
fn track_groups_follow_naming_convention() {
    let fixture = MatrixFixture::new();
    for id in ["TL2", "EM3", "L5", "L1/L2", "Principal"] {
        fixture.add_level(id);
    }
    let overview = fixture.matrix().get_matrix_overview().unwrap();

    assert_eq!(overview.level_ids, ["EM3", "L1/L2", "L5", "Principal", "TL2"]);
    assert_eq!(overview.level_groups.ic, ["L1/L2", "L5"]);
    assert_eq!(overview.level_groups.tl, ["TL2"]);
    assert_eq!(overview.level_groups.em, ["EM3"]);
}
