//! Scoring and the search leaf rule.

use crate::core::{GameState, PileId, Variant};

/// Game score. Signed so that search values can be negated.
pub type Score = i64;

/// Score a position: two points per red marble, three per blue.
///
/// In misère only the position that ends the game scores; every
/// non-terminal position is worth zero.
#[must_use]
pub fn score(state: &GameState, variant: Variant) -> Score {
    let material = || {
        PileId::ALL
            .iter()
            .map(|&pile| pile.weight() * Score::from(state[pile]))
            .sum::<Score>()
    };

    match variant {
        Variant::Standard => material(),
        Variant::Misere if state.is_terminal() => material(),
        Variant::Misere => 0,
    }
}

/// Sign applied to a score at a search leaf, per variant.
const LEAF_SIGN: [Score; 2] = [1, -1];

/// Static value of a search leaf (terminal or depth-exhausted).
///
/// Misère scores are negated: ending the game must look bad to the side
/// whose move got there.
#[must_use]
pub fn leaf_value(state: &GameState, variant: Variant) -> Score {
    LEAF_SIGN[variant.index()] * score(state, variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_score() {
        assert_eq!(score(&GameState::new(0, 0), Variant::Standard), 0);
        assert_eq!(score(&GameState::new(3, 0), Variant::Standard), 6);
        assert_eq!(score(&GameState::new(0, 4), Variant::Standard), 12);
        assert_eq!(score(&GameState::new(5, 7), Variant::Standard), 31);
    }

    #[test]
    fn test_misere_scores_only_terminal() {
        assert_eq!(score(&GameState::new(5, 7), Variant::Misere), 0);
        assert_eq!(score(&GameState::new(1, 1), Variant::Misere), 0);
        assert_eq!(score(&GameState::new(0, 4), Variant::Misere), 12);
        assert_eq!(score(&GameState::new(3, 0), Variant::Misere), 6);
    }

    #[test]
    fn test_leaf_value_sign() {
        let state = GameState::new(0, 3);
        assert_eq!(leaf_value(&state, Variant::Standard), 9);
        assert_eq!(leaf_value(&state, Variant::Misere), -9);

        // Non-terminal misère leaves are zero either way.
        assert_eq!(leaf_value(&GameState::new(2, 2), Variant::Misere), 0);
        assert_eq!(leaf_value(&GameState::new(2, 2), Variant::Standard), 10);
    }
}
