//! Per-digit feedback and guess scoring
//!
//! Each guessed digit is classified against the secret:
//! - Correct: same digit at the same position
//! - Present: digit occurs somewhere else in the secret
//! - Absent: digit does not occur in the secret
//!
//! Scoring does not count multiplicity. A guessed digit that appears in the
//! secret is `Present` at every non-matching position it occupies, even when
//! another copy of it is already `Correct`.

use super::{ANSWER_LENGTH, Digit, DigitError, Secret};
use std::fmt;

/// Classification of one guessed digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Correct,
    Present,
    Absent,
}

impl Feedback {
    /// Emoji square for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Error type for guesses that cannot be scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength(usize),
    InvalidDigit(DigitError),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must be exactly {ANSWER_LENGTH} digits, got {len}")
            }
            Self::InvalidDigit(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDigit(err) => Some(err),
            Self::InvalidLength(_) => None,
        }
    }
}

/// Parse a complete guess from a string like "11290"
///
/// Unlike a secret, a guess may repeat digits.
///
/// # Errors
/// Returns `GuessError` if the string is not exactly `ANSWER_LENGTH` decimal digits.
pub fn parse_guess(s: &str) -> Result<[Digit; ANSWER_LENGTH], GuessError> {
    let s = s.trim();
    let count = s.chars().count();
    if count != ANSWER_LENGTH {
        return Err(GuessError::InvalidLength(count));
    }

    let mut digits = [Digit::ALL[0]; ANSWER_LENGTH];
    for (slot, ch) in digits.iter_mut().zip(s.chars()) {
        *slot = Digit::from_char(ch).map_err(GuessError::InvalidDigit)?;
    }
    Ok(digits)
}

/// A submitted guess paired with its per-digit feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredGuess([(Digit, Feedback); ANSWER_LENGTH]);

impl ScoredGuess {
    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use numble::core::{Feedback, ScoredGuess, Secret, parse_guess};
    ///
    /// let secret: Secret = "12345".parse().unwrap();
    /// let guess = parse_guess("19399").unwrap();
    /// let scored = ScoredGuess::score(&guess, &secret);
    ///
    /// assert_eq!(
    ///     scored.feedback(),
    ///     [
    ///         Feedback::Correct,
    ///         Feedback::Absent,
    ///         Feedback::Correct,
    ///         Feedback::Absent,
    ///         Feedback::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &[Digit; ANSWER_LENGTH], secret: &Secret) -> Self {
        let squares = std::array::from_fn(|i| {
            let digit = guess[i];
            let feedback = if digit == secret.digit_at(i) {
                Feedback::Correct
            } else if secret.contains(digit) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
            (digit, feedback)
        });

        Self(squares)
    }

    /// The (digit, feedback) squares in order
    #[inline]
    #[must_use]
    pub const fn squares(&self) -> &[(Digit, Feedback); ANSWER_LENGTH] {
        &self.0
    }

    /// The guessed digits in order
    #[must_use]
    pub fn digits(&self) -> [Digit; ANSWER_LENGTH] {
        self.0.map(|(digit, _)| digit)
    }

    /// The feedback for each position in order
    #[must_use]
    pub fn feedback(&self) -> [Feedback; ANSWER_LENGTH] {
        self.0.map(|(_, feedback)| feedback)
    }

    /// Check whether the guessed digits equal the secret exactly
    #[must_use]
    pub fn matches(&self, secret: &Secret) -> bool {
        self.digits() == *secret.digits()
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0
            .iter()
            .all(|&(_, feedback)| feedback == Feedback::Correct)
    }

    /// Count the squares with the given feedback
    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.0.iter().filter(|&&(_, f)| f == feedback).count()
    }

    /// Convert the feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|&(_, feedback)| feedback.emoji()).collect()
    }
}

impl fmt::Display for ScoredGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (digit, _) in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
