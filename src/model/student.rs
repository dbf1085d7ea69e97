// Student Record Types
//
// Immutable value types for the roster: a student record and the opaque
// group identifier it is keyed by. Constructed once by the caller; the
// query engine only ever reads them through the accessors below.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Student ID type. Unique per student; ids are assigned in insertion
/// order, so a higher id means the student was added more recently.
pub type StudentId = u32;

/// An opaque group identifier, compared by its natural lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupName(String);

impl GroupName {
    pub fn new(name: impl Into<String>) -> Self {
        GroupName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GroupName {
    fn from(name: &str) -> Self {
        GroupName(name.to_string())
    }
}

impl From<String> for GroupName {
    fn from(name: String) -> Self {
        GroupName(name)
    }
}

/// A single roster record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
    group: GroupName,
}

impl Student {
    pub fn new(
        id: StudentId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        group: GroupName,
    ) -> Self {
        Student {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            group,
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn group(&self) -> &GroupName {
        &self.group
    }
}
