//! Formatting utilities for terminal output

use crate::core::{ANSWER_LENGTH, Digit, Feedback, ScoredGuess};
use crate::game::KeyHints;
use colored::{ColoredString, Colorize};

/// Render one board square, coloured by its feedback
#[must_use]
pub fn square(digit: Digit, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {digit} ");
    match feedback {
        Some(Feedback::Correct) => text.white().bold().on_green(),
        Some(Feedback::Present) => text.white().bold().on_yellow(),
        Some(Feedback::Absent) => text.white().bold().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a scored guess as a row of coloured squares
#[must_use]
pub fn scored_row(guess: &ScoredGuess) -> String {
    guess
        .squares()
        .iter()
        .map(|&(digit, feedback)| square(digit, Some(feedback)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the guess being typed, padded with blanks
#[must_use]
pub fn pending_row(digits: &[Digit]) -> String {
    let mut cells: Vec<String> = digits
        .iter()
        .map(|&digit| square(digit, None).to_string())
        .collect();
    cells.resize(ANSWER_LENGTH, empty_cell());
    cells.join(" ")
}

/// Render a row with no digits yet
#[must_use]
pub fn empty_row() -> String {
    vec![empty_cell(); ANSWER_LENGTH].join(" ")
}

fn empty_cell() -> String {
    " · ".bright_black().to_string()
}

/// Render the digit keyboard in the on-screen layout, coloured by hints
#[must_use]
pub fn keyboard(hints: &KeyHints) -> [String; 2] {
    let key = |value: u8| {
        let digit = Digit::ALL[value as usize];
        square(digit, hints.get(digit)).to_string()
    };

    let top = (1..=6).map(key).collect::<Vec<_>>().join(" ");
    let bottom = format!(
        "{} {} {} {} {} {}",
        "Enter".bold(),
        key(7),
        key(8),
        key(9),
        key(0),
        "⌫".bold()
    );
    [top, bottom]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
