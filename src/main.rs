//! Numble - CLI
//!
//! Wordle-style digit guessing game with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use numble::{
    commands::{SimulationConfig, run_simple, run_simulation, score_guess},
    game::Game,
    output::{print_score_result, print_simulation_result},
    player::PlayerType,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "numble",
    about = "Guess the five distinct digits in five tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the answer generator (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, default_value = "numble_tui.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against a given secret
    Score {
        /// Five distinct digits, e.g. 12345
        secret: String,

        /// Five digits, repeats allowed, e.g. 19399
        guess: String,
    },

    /// Play many games with an automated player
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Player: consistent (default) or random
        #[arg(short, long, default_value = "consistent")]
        player: String,
    },
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn)
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .init();
}

/// Log to a file so output does not corrupt the TUI (default: info)
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn new_game(seed: Option<u64>) -> Game {
    seed.map_or_else(Game::new, Game::with_seed)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if matches!(command, Commands::Play) {
        init_file_logging(&cli.log_file)?;
    } else {
        init_stderr_logging();
    }

    match command {
        Commands::Play => run_play_command(cli.seed),
        Commands::Simple => run_simple(new_game(cli.seed)),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Simulate { games, player } => {
            run_simulate_command(&player, games, cli.seed);
            Ok(())
        }
    }
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let (secret, scored) = score_guess(secret, guess)?;
    print_score_result(&secret, &scored);
    Ok(())
}

fn run_simulate_command(player_name: &str, games: usize, seed: Option<u64>) {
    let player = PlayerType::from_name(player_name);
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "simulation seed");

    println!("Simulating {games} games (seed {seed})...");
    let config = SimulationConfig::new(games, seed).with_progress(true);
    let result = run_simulation(&player, &config);
    print_simulation_result(&result);
}

fn run_play_command(seed: Option<u64>) -> Result<()> {
    use numble::interactive::{App, run_tui};

    let app = App::new(new_game(seed));
    run_tui(app)
}
