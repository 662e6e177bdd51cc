//! Error types for the Red-Blue Nim crate.

use thiserror::Error;

use crate::core::{GameState, PileId};

/// Errors raised by the game core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NimError {
    #[error("illegal move: cannot take {count} from the {pile} pile ({available} left)")]
    IllegalMove {
        pile: PileId,
        count: u32,
        available: u32,
    },

    #[error("invalid marble count {count}: take 1 or 2")]
    InvalidCount { count: u32 },

    #[error("no legal move: position {state} is terminal")]
    NoLegalMove { state: GameState },

    #[error("game already over")]
    GameOver,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("move input closed")]
    InputClosed,

    #[error("failed to read move: {message}")]
    Input { message: String },
}

impl NimError {
    /// Whether the move can simply be re-requested from the player.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NimError::IllegalMove { .. } | NimError::InvalidCount { .. })
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, NimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable() {
        let illegal = NimError::IllegalMove {
            pile: PileId::Blue,
            count: 2,
            available: 1,
        };
        assert!(illegal.is_recoverable());
        assert!(NimError::InvalidCount { count: 5 }.is_recoverable());
        assert!(!NimError::GameOver.is_recoverable());
        assert!(!NimError::NoLegalMove {
            state: GameState::new(0, 2)
        }
        .is_recoverable());
    }

    #[test]
    fn test_messages() {
        let illegal = NimError::IllegalMove {
            pile: PileId::Blue,
            count: 2,
            available: 1,
        };
        assert_eq!(
            illegal.to_string(),
            "illegal move: cannot take 2 from the blue pile (1 left)"
        );
        assert_eq!(
            NimError::NoLegalMove {
                state: GameState::new(0, 2)
            }
            .to_string(),
            "no legal move: position red=0 blue=2 is terminal"
        );
    }
}
