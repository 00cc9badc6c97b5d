mod agent;
mod config;
mod display;
mod game;
mod match_runner;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use othello_core::board::Board;
use othello_core::game_state::GameState;
use othello_core::search::{Search, Strategy};
use othello_core::transcript::Transcript;

use crate::agent::{AgentKind, create_agent};
use crate::config::EngineParams;

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Othello engine with minimax, alpha-beta and iterative deepening search")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: SubCommands,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Play one game between two agents
    Play {
        #[arg(long, value_enum, default_value = "human")]
        black: AgentKind,

        #[arg(long, value_enum, default_value = "alphabeta")]
        white: AgentKind,

        /// Write the game record to this file when the game ends
        #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        transcript: Option<PathBuf>,

        #[command(flatten)]
        engine_params: EngineParams,
    },
    /// Play a series of games between two computer agents
    Match {
        #[arg(long, value_enum, default_value = "random")]
        black: AgentKind,

        #[arg(long, value_enum, default_value = "alphabeta")]
        white: AgentKind,

        /// Number of games
        #[arg(short = 'n', long, default_value = "10")]
        games: usize,

        #[command(flatten)]
        engine_params: EngineParams,
    },
    /// Search a single position and print the result
    Analyze {
        /// 64 cells (X, O, -) followed by the side to move, e.g. "---...--- X"
        #[arg(num_args = 1.., required = true)]
        position: Vec<String>,

        #[arg(long, default_value = "alphabeta")]
        strategy: Strategy,

        #[command(flatten)]
        engine_params: EngineParams,
    },
    /// Replay a game record and show the final position
    Replay {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    match args.command {
        SubCommands::Play {
            black,
            white,
            transcript,
            engine_params,
        } => {
            let seed = engine_params.seed();
            let mut black_agent = create_agent(black, &engine_params, seed)?;
            let mut white_agent = create_agent(white, &engine_params, seed.wrapping_add(1))?;
            let game = game::play_game(
                GameState::new(),
                black_agent.as_mut(),
                white_agent.as_mut(),
                true,
            )?;
            if let Some(path) = transcript {
                fs::write(&path, format!("{}\n", game.transcript()))
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Transcript written to {}", path.display());
            }
        }
        SubCommands::Match {
            black,
            white,
            games,
            engine_params,
        } => {
            let statistics = match_runner::run_match(black, white, games, &engine_params)?;
            let black_name = create_agent(black, &engine_params, 0)?.name();
            let white_name = create_agent(white, &engine_params, 0)?.name();
            display::print_match_summary(&statistics, &black_name, &white_name);
        }
        SubCommands::Analyze {
            position,
            strategy,
            engine_params,
        } => {
            let board: Board = position.join(" ").parse().context("invalid position")?;
            display::print_board(&GameState::from_board(board));
            let config = engine_params.search_config(strategy);
            let search = Search::new(engine_params.eval.build());
            let result = search.run(&board, board.side_to_move(), &config)?;
            display::print_search_result(&result);
        }
        SubCommands::Replay { file } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let transcript: Transcript = text.parse().context("invalid transcript")?;
            let game = transcript.replay().context("transcript contains an illegal play")?;
            display::print_board(&game);
            display::print_game_over(&game);
            if !game.is_game_over() {
                println!("{} plays recorded; game not finished.", game.ply());
            }
        }
    }

    Ok(())
}
