//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;

pub use score::{ScoreError, score_guess};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationResult, play_game, run_simulation};
