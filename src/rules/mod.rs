//! Game rules: scoring, move generation, and winner determination.
//!
//! All functions here are pure. The search and the game loop call into
//! them but never re-implement any rule.

pub mod scoring;
pub mod ordering;
pub mod outcome;

pub use scoring::{leaf_value, score, Score};
pub use ordering::{MoveOrdering, Role};
pub use outcome::{winner, GameOutcome};
