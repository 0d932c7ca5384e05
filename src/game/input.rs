//! Key events accepted by the game

use crate::core::Digit;
use std::fmt;

/// One discrete input to the game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Digit(Digit),
    Enter,
    Backspace,
}

impl KeyInput {
    /// Map a physical key name to an input
    ///
    /// `"0"`-`"9"`, `"Enter"` and `"Backspace"` are recognised; any other key
    /// returns `None` and should be ignored.
    ///
    /// # Examples
    /// ```
    /// use numble::game::KeyInput;
    ///
    /// assert_eq!(KeyInput::from_key_name("Enter"), Some(KeyInput::Enter));
    /// assert!(matches!(KeyInput::from_key_name("7"), Some(KeyInput::Digit(_))));
    /// assert_eq!(KeyInput::from_key_name("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_char(ch),
                    _ => None,
                }
            }
        }
    }

    /// Map a typed character to a digit press
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        Digit::from_char(ch).ok().map(Self::Digit)
    }
}

impl From<Digit> for KeyInput {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::Enter => f.write_str("Enter"),
            Self::Backspace => f.write_str("Backspace"),
        }
    }
}
