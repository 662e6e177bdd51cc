//! Player identification.
//!
//! Red-Blue Nim is always human versus computer, and the turn strictly
//! alternates between the two.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NimError;

/// Owner of a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    /// The computer moves first unless configured otherwise.
    #[default]
    Computer,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Human => "human",
            Player::Computer => "computer",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = NimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Player::Human),
            "computer" => Ok(Player::Computer),
            other => Err(NimError::InvalidConfiguration {
                message: format!("unknown player '{other}' (expected human or computer)"),
            }),
        }
    }
}
