// Grouping Primitives
//
// Partitions a student slice by group name and builds the two reductions
// every group query composes from: the sorted group list and the
// extremal-group pick. Partitioning keeps members in encounter order;
// each query then applies its own inner sort.

use linked_hash_map::LinkedHashMap;
use log::debug;

use crate::model::{Group, GroupName, Student};

/// Partition students by their group name. Within each partition the
/// members keep the input's encounter order; callers sort afterwards.
pub(crate) fn partition_by_group(students: &[Student]) -> LinkedHashMap<GroupName, Vec<Student>> {
    let mut partitions: LinkedHashMap<GroupName, Vec<Student>> = LinkedHashMap::new();
    for student in students {
        partitions
            .entry(student.group().clone())
            .or_insert_with(Vec::new)
            .push(student.clone());
    }
    debug!(
        "partitioned {} students into {} groups",
        students.len(),
        partitions.len()
    );
    partitions
}

/// Build the full group list: sort each partition's members with the
/// supplied inner sort, wrap as a Group, then sort the groups ascending
/// by name. The inner and outer sorts are deliberately separate passes.
pub(crate) fn sorted_groups<F>(students: &[Student], sort_members: F) -> Vec<Group>
where
    F: Fn(&mut Vec<Student>),
{
    let mut groups: Vec<Group> = partition_by_group(students)
        .into_iter()
        .map(|(name, mut members)| {
            sort_members(&mut members);
            Group::new(name, members)
        })
        .collect();
    groups.sort_by(|a, b| a.name().cmp(b.name()));
    groups
}

/// Pick the group maximizing `measure`. Ties on the measure are resolved
/// by name: when `prefer_greater_name` is set the lexicographically later
/// group wins, otherwise the earlier one does. Returns None when there
/// are no students at all.
///
/// The tie-break is realized by ranking the (name, measure) pairs in the
/// tie-break direction first and then keeping the first maximum seen, so
/// the two directions stay independently swappable per query.
pub(crate) fn largest_group_by<F>(
    students: &[Student],
    measure: F,
    prefer_greater_name: bool,
) -> Option<GroupName>
where
    F: Fn(&[Student]) -> usize,
{
    let mut ranked: Vec<(GroupName, usize)> = partition_by_group(students)
        .into_iter()
        .map(|(name, members)| {
            let size = measure(&members);
            (name, size)
        })
        .collect();
    ranked.sort_by(|a, b| {
        if prefer_greater_name {
            b.0.cmp(&a.0)
        } else {
            a.0.cmp(&b.0)
        }
    });

    let mut best: Option<(GroupName, usize)> = None;
    for (name, size) in ranked {
        match &best {
            Some((_, best_size)) if size <= *best_size => {}
            _ => best = Some((name, size)),
        }
    }
    best.map(|(name, _)| name)
}
