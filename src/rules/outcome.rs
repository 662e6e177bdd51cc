//! Winner determination.

use serde::{Deserialize, Serialize};

use super::scoring::{score, Score};
use crate::core::{GameState, Player, Variant};

/// Winner given the player whose move emptied a pile.
///
/// Standard: emptying a pile loses. Misère: emptying a pile wins.
#[must_use]
pub fn winner(variant: Variant, last_mover: Player) -> Player {
    match variant {
        Variant::Standard => last_mover.opponent(),
        Variant::Misere => last_mover,
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Player,

    /// The player treated as having emptied the pile.
    pub decided_by: Player,

    pub final_state: GameState,

    /// `score(final_state, variant)`.
    pub score: Score,
}

impl GameOutcome {
    /// Decide a finished game.
    #[must_use]
    pub fn decide(final_state: GameState, variant: Variant, decided_by: Player) -> Self {
        debug_assert!(final_state.is_terminal());
        Self {
            winner: winner(variant, decided_by),
            decided_by,
            final_state,
            score: score(&final_state, variant),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }
}
