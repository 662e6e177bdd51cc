//! Depth-limited minimax with alpha-beta pruning.
//!
//! Each recursive call owns its `GameState` copy, so branches never share
//! state. Search is a single fixed-depth pass per move: no transposition
//! table, no iterative deepening.

use std::time::Instant;

use log::debug;

use crate::core::{GameState, Move, Variant};
use crate::error::{NimError, Result};
use crate::rules::{leaf_value, Role, Score};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Value of a searched position and the move that achieves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from the maximizer's perspective.
    pub value: Score,

    /// Absent only when the searched position is terminal.
    pub best_move: Option<Move>,
}

/// Alpha-beta search context.
///
/// Owns its configuration and the statistics of the last search.
#[derive(Clone, Debug, Default)]
pub struct AlphaBeta {
    config: SearchConfig,
    stats: SearchStats,
}

impl AlphaBeta {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search `state` for the side playing `role`.
    ///
    /// Every root move is evaluated with a fresh full window at the
    /// configured depth; the first move with the strictly best value wins.
    pub fn analyze(&mut self, state: GameState, variant: Variant, role: Role) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();
        self.stats.nodes += 1;

        if state.is_terminal() {
            self.stats.leaves += 1;
            return SearchResult {
                value: leaf_value(&state, variant),
                best_move: None,
            };
        }

        let depth = self.config.depth_limit;
        let mut best: Option<(Move, Score)> = None;

        for mv in self.config.ordering.legal_moves(&state, variant, role) {
            let value = self.alpha_beta(
                state.apply(mv),
                variant,
                role.opponent(),
                depth,
                Score::MIN,
                Score::MAX,
            );
            if best.map_or(true, |(_, incumbent)| role.prefers(value, incumbent)) {
                best = Some((mv, value));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let (best_move, value) = match best {
            Some((mv, value)) => (Some(mv), value),
            None => (None, leaf_value(&state, variant)),
        };

        debug!(
            "searched {} ({}, {:?}, depth {:?}): value {} via {:?}, {} nodes, {} cutoffs, {}us",
            state,
            variant,
            role,
            depth,
            value,
            best_move,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.time_us
        );

        SearchResult { value, best_move }
    }

    /// Best move for `role` from a non-terminal state.
    ///
    /// Asking for a move from a terminal state is a caller bug and is
    /// reported as `NoLegalMove`.
    pub fn best_move(&mut self, state: GameState, variant: Variant, role: Role) -> Result<Move> {
        self.analyze(state, variant, role)
            .best_move
            .ok_or(NimError::NoLegalMove { state })
    }

    /// Value of a node where `role` is to move, searched `depth` plies deep.
    pub fn evaluate(
        &mut self,
        state: GameState,
        variant: Variant,
        role: Role,
        depth: Option<u32>,
    ) -> Score {
        self.alpha_beta(state, variant, role, depth, Score::MIN, Score::MAX)
    }

    fn alpha_beta(
        &mut self,
        state: GameState,
        variant: Variant,
        role: Role,
        depth: Option<u32>,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if state.is_terminal() || depth == Some(0) {
            self.stats.leaves += 1;
            return leaf_value(&state, variant);
        }

        let child_depth = depth.map(|d| d - 1);
        let mut best = role.worst();

        for mv in self.config.ordering.legal_moves(&state, variant, role) {
            let value = self.alpha_beta(
                state.apply(mv),
                variant,
                role.opponent(),
                child_depth,
                alpha,
                beta,
            );

            match role {
                Role::Maximizer => {
                    best = best.max(value);
                    alpha = alpha.max(best);
                }
                Role::Minimizer => {
                    best = best.min(value);
                    beta = beta.min(best);
                }
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Statistics from the most recent `analyze`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PileId;

    fn engine(depth: Option<u32>) -> AlphaBeta {
        AlphaBeta::new(SearchConfig::new().with_depth_limit(depth))
    }

    #[test]
    fn test_forced_choice_takes_higher_terminal() {
        let mut search = engine(None);
        let result = search.analyze(GameState::new(1, 1), Variant::Standard, Role::Maximizer);

        assert_eq!(result.best_move, Some(Move::new(PileId::Red, 1)));
        assert_eq!(result.value, 3);
    }

    #[test]
    fn test_terminal_root_has_no_move() {
        let mut search = engine(None);
        let result = search.analyze(GameState::new(0, 3), Variant::Misere, Role::Maximizer);

        assert_eq!(result.best_move, None);
        assert_eq!(result.value, -9);
        assert_eq!(
            search.best_move(GameState::new(0, 3), Variant::Misere, Role::Maximizer),
            Err(NimError::NoLegalMove {
                state: GameState::new(0, 3)
            })
        );
    }

    #[test]
    fn test_depth_zero_node_is_static() {
        let mut search = engine(None);
        let state = GameState::new(3, 3);

        assert_eq!(search.evaluate(state, Variant::Standard, Role::Maximizer, Some(0)), 15);
        assert_eq!(search.evaluate(state, Variant::Misere, Role::Minimizer, Some(0)), 0);
    }

    #[test]
    fn test_one_ply_evaluation() {
        let mut search = engine(None);

        // Minimizer at (2, 1) standard: best is (0, 1) = 3.
        let state = GameState::new(2, 1);
        let value = search.evaluate(state, Variant::Standard, Role::Minimizer, Some(1));
        assert_eq!(value, 3);

        // Maximizer takes the static (1, 1) = 5 over the terminals
        // (0, 1) = 3 and (2, 0) = 4.
        let value = search.evaluate(state, Variant::Standard, Role::Maximizer, Some(1));
        assert_eq!(value, 5);
    }

    #[test]
    fn test_minimizer_root_selection() {
        let mut search = engine(None);
        let result = search.analyze(GameState::new(1, 1), Variant::Standard, Role::Minimizer);

        // Minimizer prefers (1, 0) = 2 over (0, 1) = 3.
        assert_eq!(result.best_move, Some(Move::new(PileId::Blue, 1)));
        assert_eq!(result.value, 2);
    }

    #[test]
    fn test_stats_recorded() {
        let mut search = engine(None);
        search.analyze(GameState::new(4, 4), Variant::Standard, Role::Maximizer);

        let stats = search.stats();
        assert!(stats.nodes > 1);
        assert!(stats.leaves > 0);
        assert!(stats.leaves < stats.nodes);
    }

    #[test]
    fn test_stats_reset_between_searches() {
        let mut search = engine(None);
        search.analyze(GameState::new(5, 5), Variant::Standard, Role::Maximizer);
        let big = search.stats().nodes;

        search.analyze(GameState::new(1, 1), Variant::Standard, Role::Maximizer);
        assert!(search.stats().nodes < big);
        assert_eq!(search.stats().nodes, 3);
    }
}
