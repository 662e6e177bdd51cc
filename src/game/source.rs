//! Collaborator traits for the game loop.
//!
//! - `MoveSource`: where the human's moves come from (console, script, RNG)
//! - `GameObserver`: who gets told about turns, moves and the result
//!
//! The core never reads input or formats output itself.

use std::collections::VecDeque;

use crate::core::{GameRng, GameState, Move, Player, Variant};
use crate::error::{NimError, Result};
use crate::rules::{GameOutcome, MoveOrdering, Role};

// =============================================================================
// Move sources
// =============================================================================

/// Supplier of moves for the human side.
///
/// Moves are expected to be legal, but the game re-validates them; an
/// illegal move is rejected and requested again.
pub trait MoveSource {
    /// Produce the next move for `state`.
    fn next_move(&mut self, state: &GameState) -> Result<Move>;
}

/// Replays a fixed list of moves, then reports `InputClosed`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Move>,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _state: &GameState) -> Result<Move> {
        self.moves.pop_front().ok_or(NimError::InputClosed)
    }
}

/// Picks a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomMoves {
    rng: GameRng,
}

impl RandomMoves {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl MoveSource for RandomMoves {
    fn next_move(&mut self, state: &GameState) -> Result<Move> {
        // Ordering is irrelevant here; any table enumerates the same set.
        let moves =
            MoveOrdering::heuristic().legal_moves(state, Variant::Standard, Role::Minimizer);
        self.rng
            .choose(&moves)
            .copied()
            .ok_or(NimError::NoLegalMove { state: *state })
    }
}

// =============================================================================
// Observers
// =============================================================================

/// Receives state snapshots and results. All hooks default to no-ops.
pub trait GameObserver {
    /// A turn is about to be taken.
    fn on_turn(&mut self, _state: &GameState, _to_move: Player) {}

    /// A move was applied; `state` is the position after it.
    fn on_move(&mut self, _player: Player, _mv: Move, _state: &GameState) {}

    /// A human move was rejected and will be requested again.
    fn on_rejected(&mut self, _error: &NimError) {}

    /// The game ended.
    fn on_game_over(&mut self, _outcome: &GameOutcome) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
