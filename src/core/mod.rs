//! Core value types: piles, state, moves, players, RNG, configuration.
//!
//! Everything here is a small `Copy` or plain-data value; the rules and the
//! search are built on top without any shared mutable state.

pub mod pile;
pub mod state;
pub mod moves;
pub mod player;
pub mod rng;
pub mod config;

pub use pile::PileId;
pub use state::GameState;
pub use moves::{Move, MoveList};
pub use player::Player;
pub use rng::GameRng;
pub use config::{parse_depth_limit, GameConfig, Variant};
