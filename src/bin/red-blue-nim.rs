//! Red-Blue Nim CLI - play against the computer in the terminal.
//!
//! ```text
//! red-blue-nim <num_red> <num_blue> [version] [first_player] [depth]
//! ```
//!
//! Set `RUST_LOG=debug` to see search statistics for every computer move.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use red_blue_nim::core::parse_depth_limit;
use red_blue_nim::{
    Game, GameConfig, GameObserver, GameOutcome, GameState, Move, MoveSource, NimError, PileId,
    Player, Variant,
};

#[derive(Parser)]
#[command(name = "red-blue-nim")]
#[command(version, about = "Red-Blue Nim against a minimax computer opponent", long_about = None)]
struct Cli {
    /// Marbles in the red pile
    #[arg(allow_negative_numbers = true)]
    num_red: i64,

    /// Marbles in the blue pile
    #[arg(allow_negative_numbers = true)]
    num_blue: i64,

    /// Rule variant: standard or misere
    #[arg(value_name = "VERSION", default_value = "standard")]
    variant: String,

    /// Who moves first: computer or human
    #[arg(default_value = "computer")]
    first_player: String,

    /// Search depth limit for the computer (default: unbounded)
    #[arg(allow_negative_numbers = true)]
    depth: Option<i64>,
}

impl Cli {
    fn game_config(&self) -> red_blue_nim::Result<GameConfig> {
        let mut config = GameConfig::try_new(self.num_red, self.num_blue)?
            .with_variant(self.variant.parse::<Variant>()?)
            .with_first_player(self.first_player.parse::<Player>()?);
        if let Some(depth) = self.depth {
            config = config.with_depth_limit(parse_depth_limit(depth)?);
        }
        Ok(config)
    }
}

fn print_state(state: &GameState) {
    println!("Red Pile: {}", state.red());
    println!("Blue Pile: {}", state.blue());
}

/// Reads the human's moves from stdin, re-prompting on malformed input.
struct ConsoleInput<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> ConsoleInput<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    fn prompt(&mut self, message: &str) -> red_blue_nim::Result<String> {
        print!("{message}");
        io::stdout().flush().map_err(|e| NimError::Input {
            message: e.to_string(),
        })?;
        match self.lines.next() {
            Some(Ok(line)) => Ok(line.trim().to_string()),
            Some(Err(e)) => Err(NimError::Input {
                message: e.to_string(),
            }),
            None => Err(NimError::InputClosed),
        }
    }
}

impl<R: BufRead> MoveSource for ConsoleInput<R> {
    fn next_move(&mut self, state: &GameState) -> red_blue_nim::Result<Move> {
        print_state(state);
        println!("Your Turn:");
        loop {
            let Ok(pile) = self.prompt("Choose a pile (red/blue): ")?.parse::<PileId>() else {
                println!("Invalid pile. Please choose red or blue.");
                continue;
            };
            let Ok(count) = self.prompt("Choose 1 or 2 marbles to remove: ")?.parse::<u32>() else {
                println!("Invalid number of marbles. Please choose 1 or 2.");
                continue;
            };
            match Move::try_new(pile, count) {
                Ok(mv) if mv.is_legal(state) => return Ok(mv),
                Ok(_) => println!("Invalid number of marbles. Please choose a valid number."),
                Err(_) => println!("Invalid number of marbles. Please choose 1 or 2."),
            }
        }
    }
}

/// Prints computer moves and the final result.
struct ConsoleOutput;

impl GameObserver for ConsoleOutput {
    fn on_turn(&mut self, state: &GameState, to_move: Player) {
        if to_move == Player::Computer {
            print_state(state);
        }
    }

    fn on_move(&mut self, player: Player, mv: Move, _state: &GameState) {
        if player == Player::Computer {
            println!("Computer chose to {mv}.");
        }
    }

    fn on_rejected(&mut self, error: &NimError) {
        println!("{error}. Please try again.");
    }

    fn on_game_over(&mut self, outcome: &GameOutcome) {
        print_state(&outcome.final_state);
        println!("Game Over!");
        println!("Winner: {}", outcome.winner);
        println!("Score: {}", outcome.score);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    let mut game = Game::new(config)?;

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock());
    game.play(&mut input, &mut ConsoleOutput)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(script: &str) -> ConsoleInput<Cursor<Vec<u8>>> {
        ConsoleInput::new(Cursor::new(script.as_bytes().to_vec()))
    }

    #[test]
    fn test_console_reprompts_until_legal() {
        // Unknown pile, non-numeric count, count of 3, then an overdraw.
        let mut input = console("green\nred\nabc\nred\n3\nred\n2\n BLUE \n2\n");
        let state = GameState::new(1, 4);

        assert_eq!(input.next_move(&state), Ok(Move::new(PileId::Blue, 2)));
        assert_eq!(input.next_move(&state), Err(NimError::InputClosed));
    }

    #[test]
    fn test_console_closed_mid_move() {
        let mut input = console("red\n");
        assert_eq!(
            input.next_move(&GameState::new(3, 3)),
            Err(NimError::InputClosed)
        );
    }

    #[test]
    fn test_cli_builds_config() {
        let cli = Cli::parse_from(["red-blue-nim", "4", "6", "misere", "human", "3"]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.initial_state(), GameState::new(4, 6));
        assert_eq!(config.variant, Variant::Misere);
        assert_eq!(config.first_player, Player::Human);
        assert_eq!(config.depth_limit, Some(3));
    }

    #[test]
    fn test_cli_rejects_bad_arguments() {
        for args in [
            ["red-blue-nim", "-1", "6", "standard", "computer", "3"],
            ["red-blue-nim", "4", "6", "sideways", "computer", "3"],
            ["red-blue-nim", "4", "6", "standard", "computer", "0"],
        ] {
            let cli = Cli::parse_from(args);
            assert!(matches!(
                cli.game_config(),
                Err(NimError::InvalidConfiguration { .. })
            ));
        }
    }
}
