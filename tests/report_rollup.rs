use roster::{Registry, RosterError, demo, report};

#[test]
fn summary_matches_hand_computation_over_the_demo_roster() {
    // Alice {90, 85} -> 87.5, Bob {75} -> 75.0, Diana {95} -> 95.0
    let registry = demo::seeded_registry();
    let summary = report::summarize(&registry).expect("three graded students");

    assert_eq!(summary.graded_students(), 3);
    let expected = (87.5 + 75.0 + 95.0) / 3.0;
    assert!((summary.class_average() - expected).abs() < 1e-9);
    assert_eq!(summary.top_student(), "Diana");
    assert_eq!(summary.highest_average(), 95.0);
    assert_eq!(summary.bottom_student(), "Bob");
    assert_eq!(summary.lowest_average(), 75.0);
}

#[test]
fn ranking_is_descending_by_average() {
    let registry = demo::seeded_registry();
    let ranked = report::ranking(&registry);
    let names: Vec<&str> = ranked.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["Diana", "Alice", "Bob"]);
    assert_eq!(ranked[0].1, 95.0);
}

#[test]
fn gradeless_roster_is_the_empty_data_condition() {
    let mut registry = Registry::new();
    registry
        .add_student("Alice", 20, ["Math"])
        .expect("add Alice");
    let err = report::summarize(&registry).expect_err("nobody graded");
    assert_eq!(err, RosterError::NothingGraded);
}

#[test]
fn roster_table_lists_every_student() {
    let registry = demo::seeded_registry();
    let table = report::roster_table(&registry);

    assert!(table.contains("Class Roster"));
    assert!(table.contains("3 students"));
    for name in ["Alice", "Bob", "Diana"] {
        assert!(table.contains(name), "table should mention {name}");
    }
    assert!(table.contains("87.50"));
}

#[test]
fn rows_follow_registration_order() {
    let registry = demo::seeded_registry();
    let rows = report::roster_rows(&registry);
    let names: Vec<&str> = rows.iter().map(|row| row.name()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Diana"]);
}
