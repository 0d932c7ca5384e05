//! Simulate command
//!
//! Plays many games with an automated player and collects statistics.

use crate::game::{Game, GameState, GameStatus, KeyInput};
use crate::player::Player;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    /// Game `i` is seeded with `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub player: &'static str,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    /// Mean guesses over won games
    pub average_guesses: f64,
    /// Guesses taken → number of wins
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
}

/// Play a single game to completion, entering every guess as key presses
pub fn play_game<P: Player>(player: &P, seed: u64) -> GameState {
    let mut game = Game::with_seed(seed);
    let mut rng = StdRng::seed_from_u64(seed.rotate_left(32) ^ 0x5eed);

    while game.status() == GameStatus::InPlay {
        let Some(guess) = player.choose_guess(game.state().history(), &mut rng) else {
            debug!(seed, "player gave up");
            break;
        };

        for digit in guess {
            game.handle_key_press(KeyInput::Digit(digit));
        }
        game.handle_key_press(KeyInput::Enter);
    }

    game.state().clone()
}

/// Run `config.games` games in parallel
pub fn run_simulation<P: Player + Sync>(player: &P, config: &SimulationConfig) -> SimulationResult {
    info!(
        player = player.name(),
        games = config.games,
        seed = config.seed,
        "starting simulation"
    );
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<Option<usize>> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let state = play_game(player, config.seed.wrapping_add(i as u64));
            pb.inc(1);
            (state.status() == GameStatus::Win).then(|| state.history().len())
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_guesses = 0;
    for guesses in outcomes.iter().flatten() {
        *distribution.entry(*guesses).or_insert(0) += 1;
        total_guesses += guesses;
    }

    let games = config.games;
    let wins: usize = distribution.values().sum();
    let duration = start.elapsed();

    SimulationResult {
        player: player.name(),
        games,
        wins,
        losses: games - wins,
        win_rate: if games > 0 {
            wins as f64 / games as f64 * 100.0
        } else {
            0.0
        },
        average_guesses: if wins > 0 {
            total_guesses as f64 / wins as f64
        } else {
            0.0
        },
        distribution,
        duration,
    }
}
