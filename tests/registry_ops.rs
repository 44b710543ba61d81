use roster::{Registry, RosterError};

/// Alice and Bob with the grades from the exercise walkthrough.
fn small_roster() -> Registry {
    let mut registry = Registry::new();
    registry
        .add_student("Alice", 20, ["Math", "Physics"])
        .expect("add Alice");
    registry
        .add_student("Bob", 22, ["Math", "Biology"])
        .expect("add Bob");
    registry.add_grade("Alice", 90).expect("grade Alice");
    registry.add_grade("Alice", 85).expect("grade Alice");
    registry.add_grade("Bob", 75).expect("grade Bob");
    registry
}

#[test]
fn duplicate_add_is_a_reported_noop() {
    let mut registry = small_roster();

    let err = registry
        .add_student("ALICE", 99, ["History"])
        .expect_err("case-insensitive duplicate");
    assert_eq!(err, RosterError::DuplicateStudent("ALICE".to_string()));

    let record = registry.record("Alice").expect("original record survives");
    assert_eq!(record.age(), 20);
    assert!(record.courses().contains("Math"));
    assert!(!record.courses().contains("History"));
    assert_eq!(record.grades().len(), 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn average_of_90_and_85_is_87_5() {
    let registry = small_roster();
    let avg = registry.average_grade("Alice").expect("has grades");
    assert_eq!(avg, 87.5);
}

#[test]
fn averages_survive_grade_sums_beyond_u32() {
    let mut registry = Registry::new();
    registry
        .add_student("Alice", 20, ["Math"])
        .expect("add Alice");
    registry.add_grade("Alice", 4_000_000_000).expect("grade Alice");
    registry.add_grade("Alice", 1_000_000_000).expect("grade Alice");

    let avg = registry.average_grade("Alice").expect("has grades");
    assert_eq!(avg, 2_500_000_000.0);
}

#[test]
fn fractional_thresholds_compare_against_exact_averages() {
    // Alice averages exactly 87.5, Bob 75.0
    let registry = small_roster();
    assert_eq!(registry.top_students(87.5), vec!["Alice"]);
    assert!(registry.top_students(87.6).is_empty());
}

#[test]
fn average_without_grades_is_the_empty_data_condition() {
    let mut registry = Registry::new();
    registry
        .add_student("Eve", 21, ["Math"])
        .expect("add Eve");
    let err = registry.average_grade("Eve").expect_err("no grades yet");
    assert_eq!(err, RosterError::NoGrades("Eve".to_string()));
}

#[test]
fn enrollment_follows_the_registered_courses() {
    let registry = small_roster();
    assert!(registry.is_enrolled("Alice", "Math").expect("known student"));
    assert!(
        !registry
            .is_enrolled("Alice", "History")
            .expect("known student")
    );
    // lookups normalize the queried name too
    assert!(registry.is_enrolled("alice", "Physics").expect("known student"));
}

#[test]
fn course_listing_preserves_registration_order() {
    let registry = small_roster();
    assert_eq!(registry.students_in_course("Math"), vec!["Alice", "Bob"]);
    assert_eq!(registry.students_in_course("Biology"), vec!["Bob"]);
    assert!(registry.students_in_course("History").is_empty());
}

#[test]
fn top_students_respect_threshold_and_skip_gradeless() {
    let mut registry = small_roster();
    registry
        .add_student("Diana", 23, ["Chemistry", "Physics"])
        .expect("add Diana");

    // Diana has no grades yet, so no threshold admits her
    assert_eq!(registry.top_students(0.0), vec!["Alice", "Bob"]);
    assert_eq!(registry.top_students(80.0), vec!["Alice"]);
    assert!(registry.top_students(100.0).is_empty());

    registry.add_grade("Diana", 95).expect("grade Diana");
    assert_eq!(registry.top_students(80.0), vec!["Alice", "Diana"]);
    assert_eq!(registry.top_students(90.0), vec!["Diana"]);
}

#[test]
fn unknown_student_reports_not_found_without_mutation() {
    let mut registry = small_roster();

    let err = registry.add_grade("Charlie", 100).expect_err("not registered");
    assert_eq!(err, RosterError::StudentNotFound("Charlie".to_string()));
    let err = registry.average_grade("Charlie").expect_err("not registered");
    assert_eq!(err, RosterError::StudentNotFound("Charlie".to_string()));
    let err = registry
        .is_enrolled("Charlie", "Math")
        .expect_err("not registered");
    assert_eq!(err, RosterError::StudentNotFound("Charlie".to_string()));

    assert_eq!(registry.len(), 2);
    assert!(registry.record("Charlie").is_none());
}

#[test]
fn removal_drops_the_record_and_its_order_slot() {
    let mut registry = small_roster();
    registry
        .add_student("Diana", 23, ["Math"])
        .expect("add Diana");

    let removed = registry.remove_student("bob").expect("Bob is registered");
    assert_eq!(removed.grades().len(), 1);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.students_in_course("Math"), vec!["Alice", "Diana"]);

    let err = registry.remove_student("Bob").expect_err("already gone");
    assert_eq!(err, RosterError::StudentNotFound("Bob".to_string()));

    // the name is free again after removal
    registry
        .add_student("Bob", 30, ["Art"])
        .expect("re-register Bob");
    assert_eq!(
        registry.students_in_course("Art"),
        vec!["Bob"],
        "re-added student lands at the end of the order"
    );
}
