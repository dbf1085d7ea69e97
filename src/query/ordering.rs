// Canonical Student Orderings
//
// Two fixed comparators shared by every operation that sorts or filters.
// Every "sort by name" and "sort by id" in the engine means exactly these.

use std::cmp::Ordering;

use crate::model::Student;

/// Compare students by last name ascending, then first name ascending,
/// then id descending. The reversed id tie-break means that among students
/// with identical full names the most recently added one sorts first, and
/// it makes this a strict total order since ids are unique.
pub fn compare_by_name(a: &Student, b: &Student) -> Ordering {
    a.last_name()
        .cmp(b.last_name())
        .then_with(|| a.first_name().cmp(b.first_name()))
        .then_with(|| b.id().cmp(&a.id()))
}

/// Compare students by the natural ascending order of their ids.
pub fn compare_by_id(a: &Student, b: &Student) -> Ordering {
    a.id().cmp(&b.id())
}
