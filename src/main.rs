use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use plum_negamax::engines::engine_negamax::NegamaxEngine;
use plum_negamax::engines::engine_random::RandomEngine;
use plum_negamax::engines::engine_trait::{Engine, GoParams};
use plum_negamax::errors::ChessResult;
use plum_negamax::game_state::chess_types::GameState;
use plum_negamax::move_generation::perft::perft;
use plum_negamax::search::negamax::SearchConfig;
use plum_negamax::utils::engine_match_harness::{play_engine_match, MatchConfig};
use plum_negamax::utils::long_algebraic::play_long_algebraic;
use plum_negamax::utils::render_game_state::render_game_state;

#[derive(Debug, Parser)]
#[command(name = "plum_negamax", about = "Negamax chess engine driver")]
struct Cli {
    /// Search depth in plies.
    #[arg(long, global = true, default_value_t = SearchConfig::default().depth)]
    depth: u8,

    /// Seed for the root move shuffle; omitted means a fresh seed per run.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play the engine against itself (or a random mover) and print the result.
    Selfplay {
        #[arg(long, default_value_t = MatchConfig::default().max_plies)]
        max_plies: u16,

        /// Give dark to the random engine instead of a second negamax engine.
        #[arg(long)]
        random_opponent: bool,
    },
    /// Replay coordinate moves from the start and print the engine's reply.
    Bestmove {
        #[arg(long, num_args = 0..)]
        moves: Vec<String>,
    },
    /// Count leaf nodes from the start position to `--depth`.
    Perft,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ChessResult<()> {
    let search = SearchConfig {
        depth: cli.depth,
        seed: cli.seed,
    };

    match cli.command {
        Command::Selfplay {
            max_plies,
            random_opponent,
        } => {
            let dark: Box<dyn Engine> = if random_opponent {
                match cli.seed {
                    Some(seed) => Box::new(RandomEngine::seeded(seed)),
                    None => Box::new(RandomEngine::new()),
                }
            } else {
                Box::new(NegamaxEngine::new(search))
            };
            let result = play_engine_match(
                Box::new(NegamaxEngine::new(search)),
                dark,
                MatchConfig {
                    max_plies,
                    ..MatchConfig::default()
                },
            )?;

            println!("{}", render_game_state(&result.final_state));
            println!("moves: {}", result.played_moves.join(" "));
            println!("outcome: {:?}", result.outcome);
        }
        Command::Bestmove { moves } => {
            let mut game = GameState::new();
            let moves: Vec<&str> = moves.iter().map(String::as_str).collect();
            play_long_algebraic(&mut game, &moves)?;

            let mut engine = NegamaxEngine::new(search);
            let out = engine.choose_move(&mut game, &GoParams::default())?;
            for line in &out.info_lines {
                println!("{line}");
            }
            match out.best_move {
                Some(mv) => println!("bestmove {mv}"),
                None => println!("bestmove (none)"),
            }
        }
        Command::Perft => {
            let mut game = GameState::new();
            let counts = perft(&mut game, search.depth);
            println!(
                "depth {}: nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={}",
                search.depth,
                counts.nodes,
                counts.captures,
                counts.en_passant,
                counts.castles,
                counts.promotions,
                counts.checks,
                counts.checkmates
            );
        }
    }

    Ok(())
}
