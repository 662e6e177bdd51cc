//! Plain minimax without pruning.
//!
//! Exponentially slower than `AlphaBeta`; kept as the reference that the
//! pruned search must agree with.

use crate::core::{GameState, Variant};
use crate::rules::{leaf_value, MoveOrdering, Role, Score};

/// Exact minimax value of a node where `role` is to move.
///
/// Same leaf rule and depth semantics as `AlphaBeta::evaluate`.
#[must_use]
pub fn minimax_value(state: GameState, variant: Variant, role: Role, depth: Option<u32>) -> Score {
    if state.is_terminal() || depth == Some(0) {
        return leaf_value(&state, variant);
    }

    let child_depth = depth.map(|d| d - 1);
    MoveOrdering::heuristic()
        .legal_moves(&state, variant, role)
        .into_iter()
        .map(|mv| minimax_value(state.apply(mv), variant, role.opponent(), child_depth))
        .fold(role.worst(), |best, value| {
            if role.prefers(value, best) {
                value
            } else {
                best
            }
        })
}
