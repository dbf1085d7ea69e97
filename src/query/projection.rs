// Projection Primitive
//
// Maps a student slice to a list of derived values, one per input record,
// in input order. Duplicates are retained; the output is always freshly
// allocated.

use crate::model::Student;

/// Extract one value per student using the supplied accessor.
pub(crate) fn project<T, F>(students: &[Student], extract: F) -> Vec<T>
where
    F: Fn(&Student) -> T,
{
    students.iter().map(extract).collect()
}
