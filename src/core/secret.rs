//! The hidden answer and its generator
//!
//! A Secret is `ANSWER_LENGTH` pairwise-distinct digits. New secrets are drawn
//! from a shrinking pool so every digit is used at most once.

use super::{ANSWER_LENGTH, Digit, DigitError};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// The digit sequence the player is trying to guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret([Digit; ANSWER_LENGTH]);

/// Error type for invalid secrets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    InvalidLength(usize),
    InvalidDigit(DigitError),
    RepeatedDigit(Digit),
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Secret must be exactly {ANSWER_LENGTH} digits, got {len}")
            }
            Self::InvalidDigit(err) => write!(f, "{err}"),
            Self::RepeatedDigit(digit) => write!(f, "Secret repeats the digit {digit}"),
        }
    }
}

impl std::error::Error for SecretError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDigit(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DigitError> for SecretError {
    fn from(err: DigitError) -> Self {
        Self::InvalidDigit(err)
    }
}

impl Secret {
    /// Create a secret from explicit digits
    ///
    /// # Errors
    /// Returns `SecretError::RepeatedDigit` if any digit occurs twice.
    ///
    /// # Examples
    /// ```
    /// use numble::core::{Digit, Secret};
    ///
    /// let digits = [1, 2, 3, 4, 5].map(|d| Digit::new(d).unwrap());
    /// assert!(Secret::new(digits).is_ok());
    ///
    /// let repeated = [1, 1, 3, 4, 5].map(|d| Digit::new(d).unwrap());
    /// assert!(Secret::new(repeated).is_err());
    /// ```
    pub fn new(digits: [Digit; ANSWER_LENGTH]) -> Result<Self, SecretError> {
        let mut seen = [false; 10];
        for digit in digits {
            if seen[digit.index()] {
                return Err(SecretError::RepeatedDigit(digit));
            }
            seen[digit.index()] = true;
        }
        Ok(Self(digits))
    }

    /// Draw a secret using the given RNG
    ///
    /// Picks a uniformly random index into the pool of unused digits, moves that
    /// digit into the answer, and repeats until the answer is full.
    #[must_use]
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut pool: Vec<Digit> = Digit::ALL.to_vec();
        let mut answer = [Digit::ALL[0]; ANSWER_LENGTH];

        for slot in &mut answer {
            let idx = rng.random_range(0..pool.len());
            *slot = pool.remove(idx);
        }

        Self(answer)
    }

    /// Draw a secret from the thread-local RNG
    #[must_use]
    pub fn random() -> Self {
        Self::generate(&mut rand::rng())
    }

    /// Every possible secret, in lexicographic order
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut secrets = Vec::with_capacity(30_240);
        let mut current = Vec::with_capacity(ANSWER_LENGTH);
        let mut used = [false; 10];
        collect_secrets(&mut current, &mut used, &mut secrets);
        secrets
    }

    /// The secret's digits in order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[Digit; ANSWER_LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position
    ///
    /// # Panics
    /// Panics if `position >= ANSWER_LENGTH`
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> Digit {
        self.0[position]
    }

    /// Check if the secret contains a digit at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.0.contains(&digit)
    }
}

fn collect_secrets(current: &mut Vec<Digit>, used: &mut [bool; 10], out: &mut Vec<Secret>) {
    if current.len() == ANSWER_LENGTH {
        if let Ok(digits) = <[Digit; ANSWER_LENGTH]>::try_from(current.as_slice()) {
            out.push(Secret(digits));
        }
        return;
    }

    for digit in Digit::ALL {
        if used[digit.index()] {
            continue;
        }
        used[digit.index()] = true;
        current.push(digit);
        collect_secrets(current, used, out);
        current.pop();
        used[digit.index()] = false;
    }
}

impl FromStr for Secret {
    type Err = SecretError;

    /// Parse a secret from a string like "12345"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let count = s.chars().count();
        if count != ANSWER_LENGTH {
            return Err(SecretError::InvalidLength(count));
        }

        let mut digits = [Digit::ALL[0]; ANSWER_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(s.chars()) {
            *slot = Digit::from_char(ch)?;
        }

        Self::new(digits)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
