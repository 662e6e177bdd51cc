//! The game loop: turn alternation, terminal detection, winner.
//!
//! ```text
//! IN_PROGRESS --move, piles non-empty--> IN_PROGRESS (turn passes)
//! IN_PROGRESS --move empties a pile----> TERMINAL
//! ```

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, Move, Player};
use crate::error::{NimError, Result};
use crate::rules::{GameOutcome, Role};
use crate::search::{AlphaBeta, SearchConfig};

use super::source::{GameObserver, MoveSource};

/// Where the game is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Terminal(GameOutcome),
}

/// A move that was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub mv: Move,
    /// Ply number, starting at 1.
    pub ply: u32,
}

/// One game of Red-Blue Nim, human against computer.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    to_move: Player,
    status: GameStatus,
    history: Vec<MoveRecord>,
    engine: AlphaBeta,
}

impl Game {
    /// Start a game. Rejects invalid configuration before anything runs.
    ///
    /// If a starting pile is already empty the game is terminal at once,
    /// decided as though the first player had made the final move.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let state = config.initial_state();
        let engine = AlphaBeta::new(SearchConfig::new().with_depth_limit(config.depth_limit));
        let status = if state.is_terminal() {
            GameStatus::Terminal(GameOutcome::decide(state, config.variant, config.first_player))
        } else {
            GameStatus::InProgress
        };

        info!(
            "new game: {} ({}), {} moves first, depth {:?}",
            state, config.variant, config.first_player, config.depth_limit
        );

        Ok(Self {
            to_move: config.first_player,
            config,
            state,
            status,
            history: Vec::new(),
            engine,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whose turn it is. After the game ends, the player who moved last.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Terminal(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        match &self.status {
            GameStatus::Terminal(outcome) => Some(outcome),
            GameStatus::InProgress => None,
        }
    }

    /// Moves played so far in this game.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The search engine used for the computer's moves.
    #[must_use]
    pub fn engine(&self) -> &AlphaBeta {
        &self.engine
    }

    /// Apply a move for the player to move.
    ///
    /// Illegal moves are rejected without changing anything.
    pub fn apply_move(&mut self, mv: Move) -> Result<&GameStatus> {
        if self.is_over() {
            return Err(NimError::GameOver);
        }

        let next = self.state.try_apply(mv)?;
        let player = self.to_move;
        self.state = next;
        self.history.push(MoveRecord {
            player,
            mv,
            ply: self.history.len() as u32 + 1,
        });
        trace!("ply {}: {} {} -> {}", self.history.len(), player, mv, next);

        if next.is_terminal() {
            let outcome = GameOutcome::decide(next, self.config.variant, player);
            info!(
                "game over: {} wins, score {} ({})",
                outcome.winner, outcome.score, next
            );
            self.status = GameStatus::Terminal(outcome);
        } else {
            self.to_move = player.opponent();
        }

        Ok(&self.status)
    }

    /// Ask the engine for the computer's move. Does not apply it.
    ///
    /// The computer is always searched as the maximizer.
    pub fn computer_move(&mut self) -> Result<Move> {
        if self.is_over() {
            return Err(NimError::NoLegalMove { state: self.state });
        }
        self.engine
            .best_move(self.state, self.config.variant, Role::Maximizer)
    }

    /// Play one turn for whoever is to move.
    ///
    /// Illegal human moves are reported to the observer and requested
    /// again. Any other error ends the turn.
    pub fn step(
        &mut self,
        human: &mut dyn MoveSource,
        observer: &mut dyn GameObserver,
    ) -> Result<()> {
        if self.is_over() {
            return Err(NimError::GameOver);
        }

        let player = self.to_move;
        observer.on_turn(&self.state, player);

        let mv = match player {
            Player::Computer => {
                let mv = self.computer_move()?;
                self.apply_move(mv)?;
                mv
            }
            Player::Human => loop {
                let attempt = human
                    .next_move(&self.state)
                    .and_then(|mv| self.apply_move(mv).map(|_| mv));
                match attempt {
                    Ok(mv) => break mv,
                    Err(err) if err.is_recoverable() => observer.on_rejected(&err),
                    Err(err) => return Err(err),
                }
            },
        };

        observer.on_move(player, mv, &self.state);
        if let GameStatus::Terminal(outcome) = &self.status {
            observer.on_game_over(outcome);
        }

        Ok(())
    }

    /// Play until the game ends and return the outcome.
    pub fn play(
        &mut self,
        human: &mut dyn MoveSource,
        observer: &mut dyn GameObserver,
    ) -> Result<GameOutcome> {
        if let GameStatus::Terminal(outcome) = &self.status {
            if self.history.is_empty() {
                observer.on_game_over(outcome);
            }
        }

        loop {
            if let GameStatus::Terminal(outcome) = &self.status {
                return Ok(outcome.clone());
            }
            self.step(human, observer)?;
        }
    }
}
