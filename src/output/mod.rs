//! Terminal output formatting
//!
//! Display utilities for the line-mode game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_score_result, print_simulation_result};
