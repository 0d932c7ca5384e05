//! Keyboard hints derived from the guess history

use crate::core::{Digit, Feedback, ScoredGuess};

/// Best-known feedback for each digit key
///
/// Always rebuilt from the full history, never updated in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyHints([Option<Feedback>; 10]);

impl KeyHints {
    /// Aggregate feedback across every scored guess, in order
    ///
    /// A `Correct` always overwrites. Any other feedback is recorded only if the
    /// digit has no hint yet, so the first sighting wins until upgraded.
    ///
    /// # Examples
    /// ```
    /// use numble::core::{Digit, Feedback, ScoredGuess, Secret, parse_guess};
    /// use numble::game::KeyHints;
    ///
    /// let secret: Secret = "12345".parse().unwrap();
    /// let history = [
    ///     ScoredGuess::score(&parse_guess("21999").unwrap(), &secret),
    ///     ScoredGuess::score(&parse_guess("12999").unwrap(), &secret),
    /// ];
    /// let hints = KeyHints::from_history(&history);
    ///
    /// assert_eq!(hints.get(Digit::new(1).unwrap()), Some(Feedback::Correct));
    /// assert_eq!(hints.get(Digit::new(9).unwrap()), Some(Feedback::Absent));
    /// assert_eq!(hints.get(Digit::new(0).unwrap()), None);
    /// ```
    #[must_use]
    pub fn from_history(history: &[ScoredGuess]) -> Self {
        let mut hints = [None; 10];

        for guess in history {
            for &(digit, feedback) in guess.squares() {
                let slot = &mut hints[digit.index()];
                if feedback == Feedback::Correct || slot.is_none() {
                    *slot = Some(feedback);
                }
            }
        }

        Self(hints)
    }

    /// Hint for a single digit, if it has been guessed
    #[inline]
    #[must_use]
    pub const fn get(&self, digit: Digit) -> Option<Feedback> {
        self.0[digit.index()]
    }

    /// Iterate over every digit that has a hint
    pub fn iter(&self) -> impl Iterator<Item = (Digit, Feedback)> + '_ {
        Digit::ALL
            .iter()
            .filter_map(|&digit| self.get(digit).map(|feedback| (digit, feedback)))
    }

    /// Check whether no digit has been guessed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Secret, parse_guess};

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    fn history(secret: &str, guesses: &[&str]) -> Vec<ScoredGuess> {
        let secret: Secret = secret.parse().unwrap();
        guesses
            .iter()
            .map(|g| ScoredGuess::score(&parse_guess(g).unwrap(), &secret))
            .collect()
    }

    #[test]
    fn empty_history_has_no_hints() {
        let hints = KeyHints::from_history(&[]);
        assert!(hints.is_empty());
        assert_eq!(hints.iter().count(), 0);
    }

    #[test]
    fn first_sighting_wins_for_weaker_feedback() {
        // 1 is Correct at position 0, then 1 at position 1 is Present in the same guess
        let hints = KeyHints::from_history(&history("12345", &["11999"]));
        assert_eq!(hints.get(digit(1)), Some(Feedback::Correct));
        assert_eq!(hints.get(digit(9)), Some(Feedback::Absent));
    }

    #[test]
    fn present_upgrades_to_correct() {
        let hints = KeyHints::from_history(&history("12345", &["21999", "12999"]));
        assert_eq!(hints.get(digit(1)), Some(Feedback::Correct));
        assert_eq!(hints.get(digit(2)), Some(Feedback::Correct));
    }

    #[test]
    fn correct_never_downgrades() {
        let hints = KeyHints::from_history(&history("12345", &["12999", "21999", "99912"]));
        assert_eq!(hints.get(digit(1)), Some(Feedback::Correct));
        assert_eq!(hints.get(digit(2)), Some(Feedback::Correct));
    }

    #[test]
    fn correct_survives_successive_recomputations() {
        let all = history("12345", &["12999", "21999", "99921", "00000", "67890"]);
        for len in 1..=all.len() {
            let hints = KeyHints::from_history(&all[..len]);
            assert_eq!(hints.get(digit(1)), Some(Feedback::Correct));
        }
    }

    #[test]
    fn iter_yields_digits_in_order() {
        let hints = KeyHints::from_history(&history("12345", &["50999"]));
        let seen: Vec<(u8, Feedback)> = hints.iter().map(|(d, f)| (d.value(), f)).collect();
        assert_eq!(
            seen,
            vec![
                (0, Feedback::Absent),
                (5, Feedback::Present),
                (9, Feedback::Absent)
            ]
        );
    }
}
