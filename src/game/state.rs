//! Game state and its transitions
//!
//! `GameState` is a plain value. Every transition takes the current state and
//! returns the next one; invalid inputs return an unchanged copy.

use super::KeyInput;
use crate::core::{ANSWER_LENGTH, Digit, NUM_OF_GUESSES, ScoredGuess, Secret};
use std::fmt;
use tracing::{debug, info};

/// Overall status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InPlay,
    Win,
    Lose,
}

impl GameStatus {
    /// Win and Lose are terminal until the next reset
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InPlay => "In Play",
            Self::Win => "Win",
            Self::Lose => "Lose",
        };
        f.write_str(name)
    }
}

/// The guess currently being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingGuess(Vec<Digit>);

impl PendingGuess {
    /// Digits typed so far
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True once `ANSWER_LENGTH` digits have been typed
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.len() == ANSWER_LENGTH
    }

    /// The typed digits as a full guess, if complete
    #[must_use]
    pub fn as_complete(&self) -> Option<[Digit; ANSWER_LENGTH]> {
        self.0.as_slice().try_into().ok()
    }

    fn pushed(&self, digit: Digit) -> Self {
        let mut digits = self.0.clone();
        if digits.len() < ANSWER_LENGTH {
            digits.push(digit);
        }
        Self(digits)
    }

    fn popped(&self) -> Self {
        let mut digits = self.0.clone();
        digits.pop();
        Self(digits)
    }
}

impl fmt::Display for PendingGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Secret,
    history: Vec<ScoredGuess>,
    pending: PendingGuess,
    status: GameStatus,
}

impl GameState {
    /// A fresh game for the given secret
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            history: Vec::with_capacity(NUM_OF_GUESSES),
            pending: PendingGuess::default(),
            status: GameStatus::InPlay,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Scored guesses in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn pending(&self) -> &PendingGuess {
        &self.pending
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply one key event and return the resulting state
    ///
    /// Terminal states ignore every input. Digits past `ANSWER_LENGTH`,
    /// backspace on an empty guess and submitting an incomplete guess are
    /// no-ops.
    ///
    /// # Examples
    /// ```
    /// use numble::core::Secret;
    /// use numble::game::{GameState, GameStatus, KeyInput};
    ///
    /// let secret: Secret = "12345".parse().unwrap();
    /// let mut state = GameState::new(secret);
    /// for digit in secret.digits() {
    ///     state = state.apply(KeyInput::Digit(*digit));
    /// }
    /// state = state.apply(KeyInput::Enter);
    ///
    /// assert_eq!(state.status(), GameStatus::Win);
    /// assert_eq!(state.history().len(), 1);
    /// ```
    #[must_use]
    pub fn apply(&self, input: KeyInput) -> Self {
        if self.status.is_terminal() {
            return self.clone();
        }

        match input {
            KeyInput::Digit(digit) => self.with_digit(digit),
            KeyInput::Backspace => self.with_backspace(),
            KeyInput::Enter => self.with_submit(),
        }
    }

    fn with_digit(&self, digit: Digit) -> Self {
        if self.pending.is_complete() {
            return self.clone();
        }
        debug!(%digit, "digit appended");
        Self {
            pending: self.pending.pushed(digit),
            ..self.clone()
        }
    }

    fn with_backspace(&self) -> Self {
        if self.pending.is_empty() {
            return self.clone();
        }
        debug!("digit removed");
        Self {
            pending: self.pending.popped(),
            ..self.clone()
        }
    }

    fn with_submit(&self) -> Self {
        let Some(guess) = self.pending.as_complete() else {
            return self.clone();
        };

        let scored = ScoredGuess::score(&guess, &self.secret);
        let mut history = self.history.clone();
        history.push(scored);

        let status = if scored.matches(&self.secret) {
            GameStatus::Win
        } else if history.len() == NUM_OF_GUESSES {
            GameStatus::Lose
        } else {
            GameStatus::InPlay
        };

        debug!(guess = %scored, feedback = %scored.to_emoji(), "guess scored");
        if status.is_terminal() {
            info!(%status, guesses = history.len(), "game over");
        }

        Self {
            secret: self.secret,
            history,
            pending: PendingGuess::default(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_guess;

    fn start(secret: &str) -> GameState {
        GameState::new(secret.parse().unwrap())
    }

    fn type_guess(mut state: GameState, guess: &str) -> GameState {
        for digit in parse_guess(guess).unwrap() {
            state = state.apply(KeyInput::Digit(digit));
        }
        state.apply(KeyInput::Enter)
    }

    fn press(state: &GameState, ch: char) -> GameState {
        state.apply(KeyInput::from_char(ch).unwrap())
    }

    #[test]
    fn new_game_is_in_play_and_empty() {
        let state = start("12345");
        assert_eq!(state.status(), GameStatus::InPlay);
        assert!(state.history().is_empty());
        assert!(state.pending().is_empty());
    }

    #[test]
    fn digits_append_until_full() {
        let mut state = start("12345");
        for ch in "98765".chars() {
            state = press(&state, ch);
        }
        assert!(state.pending().is_complete());

        let full = press(&state, '0');
        assert_eq!(full.pending().len(), ANSWER_LENGTH);
        assert_eq!(full.pending().to_string(), "98765");
    }

    #[test]
    fn backspace_removes_last_digit() {
        let state = press(&press(&start("12345"), '4'), '2');
        let state = state.apply(KeyInput::Backspace);
        assert_eq!(state.pending().to_string(), "4");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let state = start("12345");
        assert_eq!(state.apply(KeyInput::Backspace), state);
    }

    #[test]
    fn incomplete_submit_is_noop() {
        let mut state = start("12345");
        for ch in "1234".chars() {
            state = press(&state, ch);
        }
        let after = state.apply(KeyInput::Enter);
        assert_eq!(after, state);
        assert!(after.history().is_empty());
    }

    #[test]
    fn submit_scores_and_clears_pending() {
        let state = type_guess(start("12345"), "19399");
        assert_eq!(state.history().len(), 1);
        assert!(state.pending().is_empty());
        assert_eq!(state.history()[0].to_emoji(), "🟩⬜🟩⬜⬜");
        assert_eq!(state.status(), GameStatus::InPlay);
    }

    #[test]
    fn exact_guess_wins() {
        let state = type_guess(type_guess(start("30586"), "12345"), "30586");
        assert_eq!(state.status(), GameStatus::Win);
        assert!(state.history()[1].is_perfect());
    }

    #[test]
    fn five_misses_lose() {
        let mut state = start("12345");
        for guess in ["54321", "67890", "11111", "22222", "00000"] {
            assert_eq!(state.status(), GameStatus::InPlay);
            state = type_guess(state, guess);
        }
        assert_eq!(state.history().len(), NUM_OF_GUESSES);
        assert_eq!(state.status(), GameStatus::Lose);
    }

    #[test]
    fn win_on_last_guess_is_win() {
        let mut state = start("12345");
        for guess in ["54321", "67890", "11111", "22222", "12345"] {
            state = type_guess(state, guess);
        }
        assert_eq!(state.status(), GameStatus::Win);
    }

    #[test]
    fn terminal_state_ignores_input() {
        let won = type_guess(start("12345"), "12345");
        assert_eq!(press(&won, '7'), won);
        assert_eq!(won.apply(KeyInput::Backspace), won);
        assert_eq!(won.apply(KeyInput::Enter), won);

        let mut lost = start("12345");
        for _ in 0..NUM_OF_GUESSES {
            lost = type_guess(lost, "67890");
        }
        let after = type_guess(lost.clone(), "12345");
        assert_eq!(after, lost);
        assert_eq!(after.status(), GameStatus::Lose);
    }

    #[test]
    fn history_never_exceeds_limit() {
        let mut state = start("12345");
        for _ in 0..10 {
            state = type_guess(state, "67890");
            assert!(state.history().len() <= NUM_OF_GUESSES);
        }
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::InPlay.to_string(), "In Play");
        assert_eq!(GameStatus::Win.to_string(), "Win");
        assert_eq!(GameStatus::Lose.to_string(), "Lose");
        assert!(!GameStatus::InPlay.is_terminal());
    }
}
