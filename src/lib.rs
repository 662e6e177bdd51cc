//! # red-blue-nim
//!
//! Red-Blue Nim: two piles of marbles, players alternately take one or two
//! marbles from a single pile, and the game ends as soon as either pile is
//! empty. A human plays against a computer opponent driven by minimax
//! search with alpha-beta pruning.
//!
//! ## Rules
//!
//! - **Standard**: whoever empties a pile loses.
//! - **Misère**: whoever empties a pile wins.
//! - Final score: 2 per remaining red marble, 3 per remaining blue.
//!
//! ## Architecture
//!
//! - **Value semantics**: `GameState` is `Copy`; every search branch owns
//!   its own copy.
//! - **Table-driven search**: move ordering and the misère leaf sign are
//!   small tables keyed by variant and role, not duplicated code paths.
//! - **Deterministic**: a fixed move order plus strict comparisons fixes
//!   tie-breaking, so the same position always yields the same move.
//!
//! ## Modules
//!
//! - `core`: piles, state, moves, players, configuration, RNG
//! - `rules`: scoring, move ordering, winner determination
//! - `search`: alpha-beta engine and reference minimax
//! - `game`: turn loop with pluggable input and output collaborators
//!
//! ## Example
//!
//! ```
//! use red_blue_nim::{AlphaBeta, GameState, Move, PileId, Role, SearchConfig, Variant};
//!
//! let mut engine = AlphaBeta::new(SearchConfig::default());
//! let mv = engine
//!     .best_move(GameState::new(1, 1), Variant::Standard, Role::Maximizer)
//!     .unwrap();
//! assert_eq!(mv, Move::new(PileId::Red, 1));
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod search;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameState, Move, MoveList, PileId, Player, Variant,
};

pub use crate::error::{NimError, Result};

pub use crate::rules::{score, GameOutcome, MoveOrdering, Role, Score};

pub use crate::search::{AlphaBeta, SearchConfig, SearchResult, SearchStats};

pub use crate::game::{
    Game, GameObserver, GameStatus, MoveRecord, MoveSource, NullObserver, RandomMoves,
    ScriptedMoves,
};
