// Roster Data Model Module
//
// This module defines the immutable value types queried by the engine:
// student records, group names and derived groups.

pub mod group;
pub mod student;

// Export key types
pub use self::group::Group;
pub use self::student::{GroupName, Student, StudentId};
