//! Numble
//!
//! A Wordle-style number puzzle: guess five distinct digits in five tries.
//!
//! # Quick Start
//!
//! ```rust
//! use numble::game::{Game, GameStatus, KeyInput};
//!
//! let mut game = Game::with_seed(42);
//! let secret = *game.state().secret();
//!
//! for digit in secret.digits() {
//!     game.handle_key_press(KeyInput::Digit(*digit));
//! }
//! game.handle_key_press(KeyInput::Enter);
//!
//! assert_eq!(game.status(), GameStatus::Win);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Automated players
pub mod player;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
