//! Game state: the two pile counts.
//!
//! `GameState` is a small `Copy` value. The search hands each branch its own
//! copy, so states are never shared or mutated across branches.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::moves::Move;
use super::pile::PileId;
use crate::error::{NimError, Result};

/// Pile counts, indexed by `PileId`.
///
/// Counts never go negative: they only decrease through legal moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    counts: [u32; 2],
}

impl GameState {
    /// Create a state with the given pile counts.
    #[must_use]
    pub const fn new(red: u32, blue: u32) -> Self {
        Self { counts: [red, blue] }
    }

    #[must_use]
    pub const fn red(&self) -> u32 {
        self.counts[0]
    }

    #[must_use]
    pub const fn blue(&self) -> u32 {
        self.counts[1]
    }

    /// Marbles left in a pile.
    #[must_use]
    pub const fn count(&self, pile: PileId) -> u32 {
        self.counts[pile.index()]
    }

    /// The game ends as soon as either pile is empty.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.counts[0] == 0 || self.counts[1] == 0
    }

    /// Same as [`is_terminal`](Self::is_terminal); "a pile is empty".
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_terminal()
    }

    /// Upper bound on the number of plies left in the game.
    #[must_use]
    pub const fn max_remaining_plies(&self) -> u32 {
        self.counts[0] + self.counts[1]
    }

    /// Apply a move known to be legal, returning the successor state.
    ///
    /// Moves produced by `MoveOrdering` are legal by construction; use
    /// [`try_apply`](Self::try_apply) for moves from outside the engine.
    ///
    /// # Panics
    ///
    /// Panics if `mv` takes more marbles than its pile holds.
    #[must_use]
    pub fn apply(self, mv: Move) -> Self {
        let mut next = self;
        let pile = &mut next.counts[mv.pile.index()];
        *pile = pile
            .checked_sub(mv.count)
            .expect("apply called with a move that overdraws its pile");
        next
    }

    /// Validate and apply a move.
    pub fn try_apply(self, mv: Move) -> Result<Self> {
        if !(1..=2).contains(&mv.count) {
            return Err(NimError::InvalidCount { count: mv.count });
        }
        if !mv.is_legal(&self) {
            return Err(NimError::IllegalMove {
                pile: mv.pile,
                count: mv.count,
                available: self.count(mv.pile),
            });
        }
        Ok(self.apply(mv))
    }
}

impl Index<PileId> for GameState {
    type Output = u32;

    fn index(&self, pile: PileId) -> &Self::Output {
        &self.counts[pile.index()]
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "red={} blue={}", self.red(), self.blue())
    }
}
