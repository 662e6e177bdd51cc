//! Game loop and its external collaborators.
//!
//! `Game` owns the state for one game and alternates turns between a
//! `MoveSource` (the human) and the search engine (the computer), telling a
//! `GameObserver` what happens.

mod session;
mod source;

pub use session::{Game, GameStatus, MoveRecord};
pub use source::{GameObserver, MoveSource, NullObserver, RandomMoves, ScriptedMoves};
