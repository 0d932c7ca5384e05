//! Score command
//!
//! Scores one guess against a given secret.

use crate::core::{GuessError, ScoredGuess, Secret, SecretError, parse_guess};
use std::fmt;

/// Error from parsing the score command's arguments
#[derive(Debug)]
pub enum ScoreError {
    Secret(SecretError),
    Guess(GuessError),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secret(err) => write!(f, "Invalid secret: {err}"),
            Self::Guess(err) => write!(f, "Invalid guess: {err}"),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Secret(err) => Some(err),
            Self::Guess(err) => Some(err),
        }
    }
}

/// Parse both arguments and score the guess
///
/// # Errors
///
/// Returns `ScoreError` if the secret is not five distinct digits or the guess
/// is not five digits.
pub fn score_guess(secret: &str, guess: &str) -> Result<(Secret, ScoredGuess), ScoreError> {
    let secret: Secret = secret.parse().map_err(ScoreError::Secret)?;
    let guess = parse_guess(guess).map_err(ScoreError::Guess)?;
    Ok((secret, ScoredGuess::score(&guess, &secret)))
}
