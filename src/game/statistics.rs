//! Per-session win/loss tracking

use super::{GameState, GameStatus};
use crate::core::NUM_OF_GUESSES;

/// Results of the games finished in this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Index `n` counts wins that took `n` guesses
    pub guess_distribution: [usize; NUM_OF_GUESSES + 1],
}

impl Statistics {
    /// Record a finished game; games still in play are ignored
    pub fn record(&mut self, state: &GameState) {
        match state.status() {
            GameStatus::InPlay => {}
            GameStatus::Win => {
                self.games_played += 1;
                self.games_won += 1;
                let guesses = state.history().len();
                if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                    *slot += 1;
                }
            }
            GameStatus::Lose => self.games_played += 1,
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
