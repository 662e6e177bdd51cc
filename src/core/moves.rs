//! Move representation: take one or two marbles from one pile.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pile::PileId;
use super::state::GameState;
use crate::error::{NimError, Result};

/// Legal moves from a position. There are never more than four.
pub type MoveList = SmallVec<[Move; 4]>;

/// Remove `count` marbles from `pile`.
///
/// ## Example
///
/// ```
/// use red_blue_nim::core::{GameState, Move, PileId};
///
/// let mv = Move::new(PileId::Blue, 2);
/// assert!(mv.is_legal(&GameState::new(1, 2)));
/// assert!(!mv.is_legal(&GameState::new(2, 1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The pile to take from.
    pub pile: PileId,

    /// Marbles to take (1 or 2).
    pub count: u32,
}

impl Move {
    /// Create a move without validating the count.
    #[must_use]
    pub const fn new(pile: PileId, count: u32) -> Self {
        Self { pile, count }
    }

    /// Create a move, rejecting counts other than 1 or 2.
    pub fn try_new(pile: PileId, count: u32) -> Result<Self> {
        match count {
            1 | 2 => Ok(Self::new(pile, count)),
            _ => Err(NimError::InvalidCount { count }),
        }
    }

    /// Legal iff the count is 1 or 2 and the pile holds at least that many.
    #[must_use]
    pub const fn is_legal(&self, state: &GameState) -> bool {
        (self.count == 1 || self.count == 2) && state.count(self.pile) >= self.count
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from {}", self.count, self.pile)
    }
}
