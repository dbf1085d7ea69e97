// Group Representation
//
// A group is a derived entity: the students sharing one GroupName, in
// whatever order the query that built the group chose. Groups are
// constructed fresh per call and never cached.

use serde::{Deserialize, Serialize};

use crate::model::student::{GroupName, Student};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    name: GroupName,
    students: Vec<Student>,
}

impl Group {
    pub fn new(name: GroupName, students: Vec<Student>) -> Self {
        Group { name, students }
    }

    pub fn name(&self) -> &GroupName {
        &self.name
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }
}
