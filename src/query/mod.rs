// Roster Query Module
//
// This module contains the canonical orderings, the projection and
// grouping primitives, and the engine exposing the public operation set.

pub mod engine;
pub mod ordering;

mod grouping;
mod projection;

// Export key public interfaces
pub use self::ordering::{compare_by_id, compare_by_name};
