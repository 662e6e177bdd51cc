//! Pile identification.
//!
//! The two piles are a closed set, so they are modelled as an enum that
//! indexes fixed-size two-element containers rather than as map keys.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NimError;

/// One of the two marble piles.
///
/// The declaration order (Red, Blue) is the fixed order used for indexing
/// and for tie-breaking wherever piles are enumerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PileId {
    Red,
    Blue,
}

impl PileId {
    /// Both piles in fixed order.
    pub const ALL: [PileId; 2] = [PileId::Red, PileId::Blue];

    /// Index into a two-element per-pile container.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PileId::Red => 0,
            PileId::Blue => 1,
        }
    }

    /// Marble value of this pile when scoring.
    #[must_use]
    pub const fn weight(self) -> i64 {
        match self {
            PileId::Red => 2,
            PileId::Blue => 3,
        }
    }

    /// Lowercase name, as typed by players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PileId::Red => "red",
            PileId::Blue => "blue",
        }
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PileId {
    type Err = NimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(PileId::Red),
            "blue" => Ok(PileId::Blue),
            other => Err(NimError::InvalidConfiguration {
                message: format!("unknown pile '{other}' (expected red or blue)"),
            }),
        }
    }
}
