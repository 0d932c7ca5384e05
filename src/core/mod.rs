//! Core domain types for Numble
//!
//! Digits, secrets and scored guesses. Everything here is pure and has no
//! knowledge of game flow or presentation.

mod digit;
mod feedback;
mod secret;

pub use digit::{Digit, DigitError};
pub use feedback::{Feedback, GuessError, ScoredGuess, parse_guess};
pub use secret::{Secret, SecretError};

/// Number of digits in the secret and in every guess
pub const ANSWER_LENGTH: usize = 5;

/// Number of guesses allowed per game
pub const NUM_OF_GUESSES: usize = 5;
