//! Minimax search with alpha-beta pruning.
//!
//! ## Overview
//!
//! The computer is always the maximizer. Leaves are scored with
//! [`leaf_value`](crate::rules::leaf_value), which negates misère scores so
//! that plain minimax reflects the inverted incentive.
//!
//! Results are deterministic: the move order is fixed by the
//! [`MoveOrdering`](crate::rules::MoveOrdering) table and ties keep the
//! first move tried.
//!
//! ## Usage
//!
//! ```rust
//! use red_blue_nim::core::{GameState, Variant};
//! use red_blue_nim::rules::Role;
//! use red_blue_nim::search::{AlphaBeta, SearchConfig};
//!
//! let mut search = AlphaBeta::new(SearchConfig::new().with_depth_limit(Some(4)));
//! let result = search.analyze(GameState::new(5, 3), Variant::Standard, Role::Maximizer);
//! assert!(result.best_move.is_some());
//! println!("{} nodes", search.stats().nodes);
//! ```

pub mod config;
pub mod stats;
pub mod alphabeta;
pub mod minimax;

pub use config::SearchConfig;
pub use stats::SearchStats;
pub use alphabeta::{AlphaBeta, SearchResult};
pub use minimax::minimax_value;
