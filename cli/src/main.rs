//! nim CLI - play Nim against the computer from the terminal
//!
//! Thin console glue around the engine: argument parsing, logging setup,
//! board rendering and human input.

use std::io;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};

use nim_engine::{GameState, GameVariant, StrategyKind};
use nim_tree::{EngineConfig, NimAi};

mod board;
mod error;
mod game;
mod logging;
mod prompt;

use error::CliError;
use game::Player;

/// Deepest alpha-beta search the CLI allows
const MAX_DEPTH: u32 = 6;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum VariantArg {
    /// Taking the last object wins
    Normal,
    /// Taking the last object loses
    Misere,
}

impl From<VariantArg> for GameVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Normal => GameVariant::Normal,
            VariantArg::Misere => GameVariant::Misere,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StrategyArg {
    /// Closed-form nim-sum rule
    NimSum,
    /// Game tree search with alpha-beta pruning
    AlphaBeta,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::NimSum => StrategyKind::NimSum,
            StrategyArg::AlphaBeta => StrategyKind::AlphaBeta,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct GameArgs {
    /// Pile sizes, comma separated
    #[arg(short, long, value_delimiter = ',', default_value = "1,3,5,7")]
    piles: Vec<u32>,

    /// Game rules
    #[arg(long, value_enum, default_value = "normal")]
    variant: VariantArg,

    /// How the computer chooses its moves
    #[arg(short, long, value_enum, default_value = "nim-sum")]
    strategy: StrategyArg,

    /// Plies expanded by the alpha-beta strategy; tree size grows as objects^depth
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH as i64))]
    depth: u32,

    /// Seed for the random fallback move
    #[arg(long)]
    seed: Option<u64>,
}

impl GameArgs {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            variant: self.variant.into(),
            strategy: self.strategy.into(),
            depth: self.depth,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game against the computer
    Play {
        #[command(flatten)]
        game: GameArgs,

        /// Let the computer make the first move
        #[arg(long, default_value_t = false)]
        computer_first: bool,
    },
    /// Print the computer's move for a board
    Suggest {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[derive(Parser, Debug)]
#[command(name = "nim", version, about = "Game of Nim against a nim-sum or alpha-beta computer player")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log engine decisions at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let _logger = logging::setup_logging(cli.verbose)?;

    match cli.command {
        Command::Play { game, computer_first } => {
            let state = GameState::new(game.piles.clone())?;
            let mut ai = NimAi::new(game.config());
            let first = if computer_first { Player::Computer } else { Player::Human };
            println!("nim v{}", env!("CARGO_PKG_VERSION"));
            let stdin = io::stdin();
            let stdout = io::stdout();
            game::play(&mut ai, state, first, &mut stdin.lock(), &mut stdout.lock())?;
        }
        Command::Suggest { game } => {
            let state = GameState::new(game.piles.clone())?;
            let mut ai = NimAi::new(game.config());
            println!("Board: {}", state);
            println!("nimSum: {}", state.nim_sum());
            let m = ai.next_move(&state)?;
            println!("AI move: {}", m);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
