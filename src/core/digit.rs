//! Numble digit representation
//!
//! A Digit is a single decimal digit in the range 0-9.

use std::fmt;

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

/// Error type for invalid digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    OutOfRange(u8),
    NotADigit(char),
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(f, "Digit must be between 0 and 9, got {value}"),
            Self::NotADigit(ch) => write!(f, "'{ch}' is not a decimal digit"),
        }
    }
}

impl std::error::Error for DigitError {}

impl Digit {
    /// All ten digits in ascending order
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Create a new Digit from a number
    ///
    /// # Errors
    /// Returns `DigitError::OutOfRange` if `value` is greater than 9.
    ///
    /// # Examples
    /// ```
    /// use numble::core::Digit;
    ///
    /// let seven = Digit::new(7).unwrap();
    /// assert_eq!(seven.value(), 7);
    ///
    /// assert!(Digit::new(10).is_err());
    /// ```
    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value > 9 {
            return Err(DigitError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Create a Digit from an ASCII character '0'-'9'
    ///
    /// # Errors
    /// Returns `DigitError::NotADigit` for any other character.
    pub fn from_char(ch: char) -> Result<Self, DigitError> {
        ch.to_digit(10)
            .map(|value| Self(value as u8))
            .ok_or(DigitError::NotADigit(ch))
    }

    /// Get the numeric value (0-9)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index into ten-slot tables keyed by digit
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = DigitError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
