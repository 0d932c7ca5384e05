//! Automated players
//!
//! Defines the Player trait and concrete implementations used by simulations.

use super::CandidatePool;
use crate::core::{ANSWER_LENGTH, Digit, ScoredGuess, Secret};
use rand::Rng;

/// A policy for choosing the next complete guess
pub trait Player {
    /// Choose the next guess given the scored guesses so far
    ///
    /// Returns `None` if the player has nothing left to try.
    fn choose_guess<R: Rng>(
        &self,
        history: &[ScoredGuess],
        rng: &mut R,
    ) -> Option<[Digit; ANSWER_LENGTH]>;

    /// Short name for reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all player types
///
/// Allows runtime selection of a player while keeping static dispatch.
pub enum PlayerType {
    /// Uniform random guesses with no memory
    Random(RandomPlayer),
    /// Random guess among secrets that fit every hint so far
    Consistent(ConsistentPlayer),
}

impl PlayerType {
    /// Create a player from its name
    ///
    /// Supported names: "random", "consistent". Defaults to consistent if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomPlayer),
            _ => Self::Consistent(ConsistentPlayer::default()),
        }
    }
}

impl Player for PlayerType {
    fn choose_guess<R: Rng>(
        &self,
        history: &[ScoredGuess],
        rng: &mut R,
    ) -> Option<[Digit; ANSWER_LENGTH]> {
        match self {
            Self::Random(p) => p.choose_guess(history, rng),
            Self::Consistent(p) => p.choose_guess(history, rng),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Random(p) => p.name(),
            Self::Consistent(p) => p.name(),
        }
    }
}

/// Random player
///
/// Guesses a fresh random secret each turn, ignoring feedback.
pub struct RandomPlayer;

impl Player for RandomPlayer {
    fn choose_guess<R: Rng>(
        &self,
        _history: &[ScoredGuess],
        rng: &mut R,
    ) -> Option<[Digit; ANSWER_LENGTH]> {
        Some(*Secret::generate(rng).digits())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Consistent player
///
/// Only guesses secrets that could still be the answer.
#[derive(Default)]
pub struct ConsistentPlayer {
    pool: CandidatePool,
}

impl Player for ConsistentPlayer {
    fn choose_guess<R: Rng>(
        &self,
        history: &[ScoredGuess],
        rng: &mut R,
    ) -> Option<[Digit; ANSWER_LENGTH]> {
        use rand::prelude::IndexedRandom;

        self.pool
            .consistent_with(history)
            .choose(rng)
            .map(|secret| *secret.digits())
    }

    fn name(&self) -> &'static str {
        "consistent"
    }
}
