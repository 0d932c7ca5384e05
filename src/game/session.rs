//! A running game session
//!
//! Owns the current `GameState` and the RNG used to draw secrets. Each input
//! replaces the state wholesale.

use super::{GameState, GameStatus, KeyHints, KeyInput};
use crate::core::{Digit, ScoredGuess, Secret};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// Read-only view of a game, produced after every change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub pending_guess: Vec<Digit>,
    pub game_status: GameStatus,
    pub guess_history: Vec<ScoredGuess>,
    pub key_hints: KeyHints,
}

/// A playable game: state plus the answer generator's RNG
pub struct Game {
    state: GameState,
    rng: StdRng,
}

impl Game {
    /// Start a game seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Start a reproducible game
    ///
    /// # Examples
    /// ```
    /// use numble::game::Game;
    ///
    /// let a = Game::with_seed(9);
    /// let b = Game::with_seed(9);
    /// assert_eq!(a.state().secret(), b.state().secret());
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Start a game drawing secrets from `rng`
    #[must_use]
    pub fn with_rng(mut rng: StdRng) -> Self {
        let secret = Secret::generate(&mut rng);
        info!("new game started");
        Self {
            state: GameState::new(secret),
            rng,
        }
    }

    /// Current state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Apply one key event
    pub fn handle_key_press(&mut self, input: KeyInput) {
        self.state = self.state.apply(input);
    }

    /// Draw a new secret and start over, whatever the current status
    pub fn handle_reset(&mut self) {
        let secret = Secret::generate(&mut self.rng);
        self.state = GameState::new(secret);
        info!("game reset");
    }

    /// Keyboard hints for the current history
    #[must_use]
    pub fn key_hints(&self) -> KeyHints {
        KeyHints::from_history(self.state.history())
    }

    /// Copy out everything a front end needs to draw the game
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pending_guess: self.state.pending().digits().to_vec(),
            game_status: self.state.status(),
            guess_history: self.state.history().to_vec(),
            key_hints: self.key_hints(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ANSWER_LENGTH, Feedback, NUM_OF_GUESSES};

    fn submit(game: &mut Game, digits: &[Digit]) {
        for &digit in digits {
            game.handle_key_press(KeyInput::Digit(digit));
        }
        game.handle_key_press(KeyInput::Enter);
    }

    fn wrong_guess(secret: Secret) -> Vec<Digit> {
        // Rotate the secret so no position matches
        let digits = secret.digits();
        (0..ANSWER_LENGTH)
            .map(|i| digits[(i + 1) % ANSWER_LENGTH])
            .collect()
    }

    #[test]
    fn snapshot_of_new_game() {
        let game = Game::with_seed(1);
        let snapshot = game.snapshot();
        assert!(snapshot.pending_guess.is_empty());
        assert!(snapshot.guess_history.is_empty());
        assert_eq!(snapshot.game_status, GameStatus::InPlay);
        assert!(snapshot.key_hints.is_empty());
    }

    #[test]
    fn guessing_the_secret_wins() {
        let mut game = Game::with_seed(2);
        let secret = *game.state().secret();
        submit(&mut game, secret.digits());

        let snapshot = game.snapshot();
        assert_eq!(snapshot.game_status, GameStatus::Win);
        assert!(snapshot.guess_history[0].is_perfect());
        for digit in secret.digits() {
            assert_eq!(snapshot.key_hints.get(*digit), Some(Feedback::Correct));
        }
    }

    #[test]
    fn five_wrong_guesses_lose() {
        let mut game = Game::with_seed(3);
        let guess = wrong_guess(*game.state().secret());
        for _ in 0..NUM_OF_GUESSES {
            submit(&mut game, &guess);
        }
        assert_eq!(game.status(), GameStatus::Lose);
    }

    #[test]
    fn reset_after_win_starts_fresh_game() {
        let mut game = Game::with_seed(4);
        let secret = *game.state().secret();
        submit(&mut game, secret.digits());
        assert_eq!(game.status(), GameStatus::Win);

        game.handle_key_press(KeyInput::Digit(Digit::ALL[0]));
        game.handle_reset();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.game_status, GameStatus::InPlay);
        assert!(snapshot.guess_history.is_empty());
        assert!(snapshot.pending_guess.is_empty());

        let mut seen = [false; 10];
        for digit in game.state().secret().digits() {
            assert!(!seen[digit.index()]);
            seen[digit.index()] = true;
        }
    }

    #[test]
    fn reset_after_loss_and_mid_game() {
        let mut game = Game::with_seed(5);
        let guess = wrong_guess(*game.state().secret());
        for _ in 0..NUM_OF_GUESSES {
            submit(&mut game, &guess);
        }
        game.handle_reset();
        assert_eq!(game.status(), GameStatus::InPlay);
        assert!(game.state().history().is_empty());

        game.handle_key_press(KeyInput::Digit(Digit::ALL[3]));
        game.handle_reset();
        assert!(game.state().pending().is_empty());
    }

    #[test]
    fn seeded_games_replay_identically() {
        let mut a = Game::with_seed(11);
        let mut b = Game::with_seed(11);
        a.handle_reset();
        b.handle_reset();
        assert_eq!(a.state().secret(), b.state().secret());
    }

    #[test]
    fn reset_draws_the_next_secret_from_the_rng() {
        let mut rng = StdRng::seed_from_u64(11);
        let first = Secret::generate(&mut rng);
        let second = Secret::generate(&mut rng);
        assert_ne!(first, second);

        let mut game = Game::with_seed(11);
        assert_eq!(*game.state().secret(), first);
        game.handle_reset();
        assert_eq!(*game.state().secret(), second);
    }

    #[test]
    fn repeated_resets_change_the_secret() {
        let mut game = Game::with_seed(12);
        let mut secrets = vec![*game.state().secret()];
        for _ in 0..5 {
            game.handle_reset();
            secrets.push(*game.state().secret());
        }
        secrets.sort_by_key(ToString::to_string);
        secrets.dedup();
        assert!(secrets.len() > 1);
    }

    #[test]
    fn pending_is_capped_in_snapshot() {
        let mut game = Game::with_seed(6);
        for digit in Digit::ALL {
            game.handle_key_press(KeyInput::Digit(digit));
        }
        assert_eq!(game.snapshot().pending_guess.len(), ANSWER_LENGTH);
    }
}
