use std::collections::BTreeSet;

use rosterdb::engine;

// Declare the common module for test utilities using a path attribute
#[path = "../common/mod.rs"]
mod common;
use common::{sample_roster, student};

#[test]
fn test_first_names_in_input_order() {
    let roster = sample_roster();

    let names = engine::first_names(&roster);
    assert_eq!(
        names,
        vec!["Ivan", "Anna", "Ivan", "Maria", "Pavel", "Anna", "Oleg"]
    );
}

#[test]
fn test_last_names_in_input_order() {
    let roster = sample_roster();

    let names = engine::last_names(&roster);
    assert_eq!(names[0], "Petrov");
    assert_eq!(names.len(), roster.len());
}

#[test]
fn test_group_names_one_per_student() {
    let roster = sample_roster();

    let groups = engine::group_names(&roster);
    assert_eq!(groups.len(), roster.len());
    assert_eq!(groups[0].as_str(), "M3137");
    assert_eq!(groups[1].as_str(), "M3138");
    // Duplicates retained
    assert_eq!(groups[2].as_str(), "M3137");
}

#[test]
fn test_full_names_single_space_separator() {
    let roster = vec![
        student(1, "Ivan", "Petrov", "M3137"),
        student(2, "Anna", "Sidorova", "M3138"),
    ];

    let names = engine::full_names(&roster);
    assert_eq!(names, vec!["Ivan Petrov", "Anna Sidorova"]);
}

#[test]
fn test_projections_on_empty_input() {
    let roster: Vec<rosterdb::Student> = vec![];

    assert!(engine::first_names(&roster).is_empty());
    assert!(engine::last_names(&roster).is_empty());
    assert!(engine::group_names(&roster).is_empty());
    assert!(engine::full_names(&roster).is_empty());
}

#[test]
fn test_distinct_first_names_sorted_set() {
    let roster = vec![
        student(1, "Bob", "Stone", "M3137"),
        student(2, "Alice", "Reed", "M3137"),
        student(3, "Bob", "Hill", "M3138"),
    ];

    let names = engine::distinct_first_names(&roster);
    let expected: BTreeSet<String> = ["Alice", "Bob"].iter().map(|s| s.to_string()).collect();
    assert_eq!(names, expected);

    // Iteration order is ascending lexicographic
    let ordered: Vec<String> = names.into_iter().collect();
    assert_eq!(ordered, vec!["Alice", "Bob"]);
}

#[test]
fn test_max_student_first_name() {
    let roster = sample_roster();
    // Highest id in the sample roster is 7, Oleg Smirnov
    assert_eq!(engine::max_student_first_name(&roster), "Oleg");
}

#[test]
fn test_max_student_first_name_empty_input() {
    assert_eq!(engine::max_student_first_name(&[]), "");
}

#[test]
fn test_projection_twice_is_idempotent() {
    let roster = sample_roster();

    assert_eq!(engine::first_names(&roster), engine::first_names(&roster));
    assert_eq!(
        engine::distinct_first_names(&roster),
        engine::distinct_first_names(&roster)
    );
}
