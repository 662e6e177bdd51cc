//! Move generation in search-priority order.
//!
//! The order in which moves are tried only affects how much alpha-beta can
//! prune, never the value it returns. The heuristic table tries the moves
//! most likely to be best for each side first.

use serde::{Deserialize, Serialize};

use super::scoring::Score;
use crate::core::{GameState, Move, MoveList, PileId, Variant};
use crate::error::{NimError, Result};

/// Search role of the side to move at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Role::Maximizer => 0,
            Role::Minimizer => 1,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    /// Whether this role strictly prefers `candidate` over `incumbent`.
    ///
    /// Strict, so the first of several equal values is kept.
    #[must_use]
    pub const fn prefers(self, candidate: Score, incumbent: Score) -> bool {
        match self {
            Role::Maximizer => candidate > incumbent,
            Role::Minimizer => candidate < incumbent,
        }
    }

    /// The value a node of this role starts from before any child is seen.
    #[must_use]
    pub const fn worst(self) -> Score {
        match self {
            Role::Maximizer => Score::MIN,
            Role::Minimizer => Score::MAX,
        }
    }
}

const RED_1: Move = Move::new(PileId::Red, 1);
const RED_2: Move = Move::new(PileId::Red, 2);
const BLUE_1: Move = Move::new(PileId::Blue, 1);
const BLUE_2: Move = Move::new(PileId::Blue, 2);

const ALL_MOVES: [Move; 4] = [RED_1, RED_2, BLUE_1, BLUE_2];

/// Priority tables indexed by `[variant][role]`.
type Table = [[[Move; 4]; 2]; 2];

const HEURISTIC: Table = [
    // Standard: big takes first.
    [
        [RED_2, BLUE_2, RED_1, BLUE_1],
        [BLUE_2, RED_2, BLUE_1, RED_1],
    ],
    // Misère: small takes first.
    [
        [BLUE_1, RED_1, BLUE_2, RED_2],
        [RED_1, BLUE_1, RED_2, BLUE_2],
    ],
];

/// Move priority table keyed by variant and role.
///
/// Every row lists each of the four moves exactly once, so a non-terminal
/// state always yields at least one move. Tables are checked when built,
/// including when deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Table", into = "Table")]
pub struct MoveOrdering {
    table: Table,
}

fn check_row(row: &[Move; 4]) -> Result<()> {
    if ALL_MOVES.iter().all(|mv| row.contains(mv)) {
        Ok(())
    } else {
        Err(NimError::InvalidConfiguration {
            message: format!("move ordering {row:?} must list each of the four moves once"),
        })
    }
}

impl TryFrom<Table> for MoveOrdering {
    type Error = NimError;

    fn try_from(table: Table) -> Result<Self> {
        table.iter().flatten().try_for_each(check_row)?;
        Ok(Self { table })
    }
}

impl From<MoveOrdering> for Table {
    fn from(ordering: MoveOrdering) -> Self {
        ordering.table
    }
}

impl Default for MoveOrdering {
    fn default() -> Self {
        Self::heuristic()
    }
}

impl MoveOrdering {
    /// The standard priority table.
    #[must_use]
    pub const fn heuristic() -> Self {
        Self { table: HEURISTIC }
    }

    /// Use the same order for every variant and role.
    ///
    /// Rejects an `order` that does not list each of the four moves.
    pub fn uniform(order: [Move; 4]) -> Result<Self> {
        Self::try_from([[order; 2]; 2])
    }

    /// All four moves in priority order, legal or not.
    #[must_use]
    pub fn priority(&self, variant: Variant, role: Role) -> &[Move; 4] {
        &self.table[variant.index()][role.index()]
    }

    /// Legal moves from `state` in priority order.
    ///
    /// Never empty for a non-terminal state: taking one from either pile
    /// is always legal there.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState, variant: Variant, role: Role) -> MoveList {
        self.priority(variant, role)
            .iter()
            .copied()
            .filter(|mv| mv.is_legal(state))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_orders() {
        let ordering = MoveOrdering::heuristic();
        let full = GameState::new(5, 5);

        assert_eq!(
            ordering.legal_moves(&full, Variant::Standard, Role::Maximizer).as_slice(),
            &[RED_2, BLUE_2, RED_1, BLUE_1]
        );
        assert_eq!(
            ordering.legal_moves(&full, Variant::Standard, Role::Minimizer).as_slice(),
            &[BLUE_2, RED_2, BLUE_1, RED_1]
        );
        assert_eq!(
            ordering.legal_moves(&full, Variant::Misere, Role::Maximizer).as_slice(),
            &[BLUE_1, RED_1, BLUE_2, RED_2]
        );
        assert_eq!(
            ordering.legal_moves(&full, Variant::Misere, Role::Minimizer).as_slice(),
            &[RED_1, BLUE_1, RED_2, BLUE_2]
        );
    }

    #[test]
    fn test_legal_moves_filtered_by_availability() {
        let ordering = MoveOrdering::default();

        let moves = ordering.legal_moves(&GameState::new(1, 1), Variant::Standard, Role::Maximizer);
        assert_eq!(moves.as_slice(), &[RED_1, BLUE_1]);

        let moves = ordering.legal_moves(&GameState::new(2, 1), Variant::Misere, Role::Minimizer);
        assert_eq!(moves.as_slice(), &[RED_1, BLUE_1, RED_2]);

        let moves = ordering.legal_moves(&GameState::new(0, 0), Variant::Standard, Role::Maximizer);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_uniform_ordering() {
        let order = [BLUE_1, BLUE_2, RED_1, RED_2];
        let ordering = MoveOrdering::uniform(order).unwrap();

        for variant in [Variant::Standard, Variant::Misere] {
            for role in [Role::Maximizer, Role::Minimizer] {
                assert_eq!(ordering.priority(variant, role), &order);
            }
        }
    }

    #[test]
    fn test_incomplete_ordering_rejected() {
        let err = MoveOrdering::uniform([RED_2, RED_2, BLUE_1, BLUE_2]).unwrap_err();
        assert!(matches!(err, NimError::InvalidConfiguration { .. }));

        let mut table = HEURISTIC;
        table[1][0] = [RED_1, RED_1, RED_1, RED_1];
        assert!(MoveOrdering::try_from(table).is_err());
    }

    #[test]
    fn test_deserialize_checks_table() {
        let json = serde_json::to_string(&MoveOrdering::heuristic()).unwrap();
        let ordering: MoveOrdering = serde_json::from_str(&json).unwrap();
        assert_eq!(ordering, MoveOrdering::heuristic());

        let bad: Table = [[[RED_2; 4]; 2]; 2];
        let json = serde_json::to_string(&bad).unwrap();
        assert!(serde_json::from_str::<MoveOrdering>(&json).is_err());
    }

    #[test]
    fn test_role_prefers_is_strict() {
        assert!(Role::Maximizer.prefers(3, 2));
        assert!(!Role::Maximizer.prefers(2, 2));
        assert!(Role::Minimizer.prefers(1, 2));
        assert!(!Role::Minimizer.prefers(2, 2));
        assert_eq!(Role::Maximizer.opponent(), Role::Minimizer);
        assert_eq!(Role::Maximizer.worst(), Score::MIN);
        assert_eq!(Role::Minimizer.worst(), Score::MAX);
    }
}
