//! Secrets still consistent with the feedback seen so far

use crate::core::{ScoredGuess, Secret};

/// Pool of every possible secret, filtered against a guess history
pub struct CandidatePool {
    secrets: Vec<Secret>,
}

impl CandidatePool {
    /// Pool containing all 30,240 possible secrets
    #[must_use]
    pub fn new() -> Self {
        Self {
            secrets: Secret::all(),
        }
    }

    /// Total number of secrets in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Secrets that would have produced every observed feedback
    ///
    /// Uses the same non-deduplicating scorer as the game, so a repeated
    /// guessed digit constrains candidates exactly as the player saw it.
    #[must_use]
    pub fn consistent_with(&self, history: &[ScoredGuess]) -> Vec<&Secret> {
        self.secrets
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|observed| ScoredGuess::score(&observed.digits(), candidate) == *observed)
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_consistent(&self, history: &[ScoredGuess]) -> usize {
        self.consistent_with(history).len()
    }
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_guess;

    fn scored(guess: &str, secret: Secret) -> ScoredGuess {
        ScoredGuess::score(&parse_guess(guess).unwrap(), &secret)
    }

    #[test]
    fn empty_history_keeps_everything() {
        let pool = CandidatePool::new();
        assert_eq!(pool.count_consistent(&[]), pool.len());
        assert!(!pool.is_empty());
    }

    #[test]
    fn secret_is_always_consistent() {
        let pool = CandidatePool::new();
        let secret: Secret = "30586".parse().unwrap();
        let history = vec![scored("12345", secret), scored("35068", secret)];

        let remaining = pool.consistent_with(&history);
        assert!(remaining.contains(&&secret));
        assert!(remaining.len() < pool.len());
    }

    #[test]
    fn perfect_feedback_leaves_one_candidate() {
        let pool = CandidatePool::new();
        let secret: Secret = "97531".parse().unwrap();
        let history = vec![scored("97531", secret)];
        assert_eq!(pool.consistent_with(&history), vec![&secret]);
    }

    #[test]
    fn all_absent_excludes_those_digits() {
        let pool = CandidatePool::new();
        let secret: Secret = "01234".parse().unwrap();
        let history = vec![scored("56789", secret)];

        // Only secrets made of 0-4 remain: 5! orderings
        assert_eq!(pool.count_consistent(&history), 120);
    }
}
