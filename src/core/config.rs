//! Game configuration types.
//!
//! A game is configured once at launch:
//! - `Variant`: standard or misère scoring and win condition
//! - `GameConfig`: starting piles, variant, first player, search depth
//!
//! Configuration is validated before any game starts; a bad value is an
//! `InvalidConfiguration` error and is never retried.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::Player;
use super::state::GameState;
use crate::error::{NimError, Result};

/// Rule variant. Fixed for the duration of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Emptying a pile loses.
    #[default]
    Standard,
    /// Emptying a pile wins.
    Misere,
}

impl Variant {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Variant::Standard => 0,
            Variant::Misere => 1,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Standard => f.write_str("standard"),
            Variant::Misere => f.write_str("misere"),
        }
    }
}

impl FromStr for Variant {
    type Err = NimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "misere" | "misère" => Ok(Variant::Misere),
            other => Err(NimError::InvalidConfiguration {
                message: format!("unknown variant '{other}' (expected standard or misere)"),
            }),
        }
    }
}

/// Parse an externally supplied depth limit. Must be a positive integer.
pub fn parse_depth_limit(value: i64) -> Result<u32> {
    match u32::try_from(value) {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(NimError::InvalidConfiguration {
            message: format!("depth limit must be a positive integer, got {value}"),
        }),
    }
}

fn pile_count(name: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| NimError::InvalidConfiguration {
        message: format!("{name} pile count must be a non-negative integer, got {value}"),
    })
}

/// Complete launch configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting red pile.
    pub red: u32,

    /// Starting blue pile.
    pub blue: u32,

    pub variant: Variant,

    /// Who moves first (default: computer).
    pub first_player: Player,

    /// Maximum plies the computer searches. `None` searches to the end.
    pub depth_limit: Option<u32>,
}

impl GameConfig {
    /// Create a configuration with default variant, first player and depth.
    #[must_use]
    pub fn new(red: u32, blue: u32) -> Self {
        Self {
            red,
            blue,
            variant: Variant::default(),
            first_player: Player::default(),
            depth_limit: None,
        }
    }

    /// Create a configuration from signed counts, rejecting negatives.
    pub fn try_new(red: i64, blue: i64) -> Result<Self> {
        Ok(Self::new(pile_count("red", red)?, pile_count("blue", blue)?))
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    #[must_use]
    pub fn with_depth_limit(mut self, depth: u32) -> Self {
        self.depth_limit = Some(depth);
        self
    }

    /// Check invariants that the type system does not enforce.
    pub fn validate(&self) -> Result<()> {
        if self.depth_limit == Some(0) {
            return Err(NimError::InvalidConfiguration {
                message: "depth limit must be a positive integer, got 0".to_string(),
            });
        }
        Ok(())
    }

    /// Starting position.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.red, self.blue)
    }
}
