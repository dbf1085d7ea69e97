// Roster Query Engine
//
// The full operation set: projections, distinct/extremal scalar queries,
// sorts, filters and group queries. Every operation is a pure function of
// its input slice; inputs are never mutated and results are always freshly
// allocated, so concurrent callers need no coordination.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::model::{Group, GroupName, Student};
use crate::query::grouping::{largest_group_by, sorted_groups};
use crate::query::ordering::{compare_by_id, compare_by_name};
use crate::query::projection::project;

/// First names of all students, in input order.
pub fn first_names(students: &[Student]) -> Vec<String> {
    project(students, |s| s.first_name().to_string())
}

/// Last names of all students, in input order.
pub fn last_names(students: &[Student]) -> Vec<String> {
    project(students, |s| s.last_name().to_string())
}

/// Group names of all students, in input order (one entry per student,
/// duplicates retained).
pub fn group_names(students: &[Student]) -> Vec<GroupName> {
    project(students, |s| s.group().clone())
}

/// Full names formatted as "<first> <last>", in input order.
pub fn full_names(students: &[Student]) -> Vec<String> {
    project(students, |s| {
        format!("{} {}", s.first_name(), s.last_name())
    })
}

/// The set of distinct first names, in ascending lexicographic order.
pub fn distinct_first_names(students: &[Student]) -> BTreeSet<String> {
    students
        .iter()
        .map(|s| s.first_name().to_string())
        .collect()
}

/// First name of the student with the maximum id, or the empty string
/// when the input is empty. Ids are unique, so no tie can occur; should a
/// caller violate that invariant, any of the tied names may be returned.
pub fn max_student_first_name(students: &[Student]) -> String {
    students
        .iter()
        .max_by_key(|s| s.id())
        .map(|s| s.first_name().to_string())
        .unwrap_or_default()
}

/// All students sorted by ascending id.
pub fn sort_students_by_id(students: &[Student]) -> Vec<Student> {
    let mut sorted = students.to_vec();
    sorted.sort_by(compare_by_id);
    sorted
}

/// All students in the canonical by-name order: last name, first name,
/// then descending id.
pub fn sort_students_by_name(students: &[Student]) -> Vec<Student> {
    let mut sorted = students.to_vec();
    sorted.sort_by(compare_by_name);
    sorted
}

fn find_students_by<P>(students: &[Student], matches: P) -> Vec<Student>
where
    P: Fn(&Student) -> bool,
{
    let mut found: Vec<Student> = students.iter().filter(|s| matches(s)).cloned().collect();
    found.sort_by(compare_by_name);
    found
}

/// Students whose first name equals `name` exactly, sorted by name.
pub fn find_students_by_first_name(students: &[Student], name: &str) -> Vec<Student> {
    find_students_by(students, |s| s.first_name() == name)
}

/// Students whose last name equals `name` exactly, sorted by name.
pub fn find_students_by_last_name(students: &[Student], name: &str) -> Vec<Student> {
    find_students_by(students, |s| s.last_name() == name)
}

/// Students in the given group, sorted by name.
pub fn find_students_by_group(students: &[Student], group: &GroupName) -> Vec<Student> {
    find_students_by(students, |s| s.group() == group)
}

/// Last-name-to-first-name mapping for the given group. When two students
/// in the group share a last name the lexicographically smaller first name
/// is kept.
pub fn find_student_names_by_group(
    students: &[Student],
    group: &GroupName,
) -> HashMap<String, String> {
    let mut names: HashMap<String, String> = HashMap::new();
    for student in find_students_by_group(students, group) {
        match names.entry(student.last_name().to_string()) {
            Entry::Occupied(mut slot) => {
                if student.first_name() < slot.get().as_str() {
                    slot.insert(student.first_name().to_string());
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(student.first_name().to_string());
            }
        }
    }
    names
}

/// All groups sorted ascending by name, each group's members in the
/// canonical by-name order.
pub fn groups_by_name(students: &[Student]) -> Vec<Group> {
    sorted_groups(students, |members| members.sort_by(compare_by_name))
}

/// All groups sorted ascending by name, each group's members sorted by
/// ascending id.
pub fn groups_by_id(students: &[Student]) -> Vec<Group> {
    sorted_groups(students, |members| members.sort_by(compare_by_id))
}

/// Name of the group with the most students, or None when there are no
/// students. A tie on size goes to the lexicographically greater name.
pub fn largest_group(students: &[Student]) -> Option<GroupName> {
    let winner = largest_group_by(students, |members| members.len(), true);
    debug!("largest group by size: {:?}", winner);
    winner
}

/// Name of the group with the most distinct first names, or None when
/// there are no students. A tie goes to the lexicographically lesser
/// name, the opposite direction from `largest_group`.
pub fn largest_group_first_name(students: &[Student]) -> Option<GroupName> {
    let winner = largest_group_by(
        students,
        |members| distinct_first_names(members).len(),
        false,
    );
    debug!("largest group by distinct first names: {:?}", winner);
    winner
}
