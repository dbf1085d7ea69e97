// Roster Query Engine
//
// An in-memory, read-only query engine over student records grouped by a
// categorical key. Every operation is a pure function of its input; there
// is no retained state, no I/O and no persistence.

pub mod model;
pub mod query;

// Re-export key items for convenient access
pub use model::Group;
pub use model::GroupName;
pub use model::Student;
pub use model::StudentId;
pub use query::engine;
