//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is replayed as key presses.

use crate::game::{Game, KeyInput, Statistics};
use crate::output::{print_board, print_game_over};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What one line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewGame,
    /// Digits typed, `-` as backspace, then Enter
    Keys(Vec<KeyInput>),
}

/// Interpret one line of input
///
/// Characters other than digits and `-` are dropped, the same way unknown
/// keys are ignored by the game.
#[must_use]
pub fn parse_line(line: &str) -> LineCommand {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => LineCommand::Quit,
        "new" | "n" => LineCommand::NewGame,
        other => {
            let mut keys: Vec<KeyInput> = other
                .chars()
                .filter_map(|ch| match ch {
                    '-' => Some(KeyInput::Backspace),
                    _ => KeyInput::from_char(ch),
                })
                .collect();
            keys.push(KeyInput::Enter);
            LineCommand::Keys(keys)
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut game: Game) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                 Numble - Simple Mode             ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    println!("Guess the 5 distinct digits in 5 tries.");
    println!(
        "  - {} digit in the right place",
        " 3 ".white().bold().on_green()
    );
    println!(
        "  - {} digit elsewhere in the answer",
        " 3 ".white().bold().on_yellow()
    );
    println!(
        "  - {} digit not in the answer\n",
        " 3 ".white().bold().on_bright_black()
    );
    println!("Type digits and press Enter. '-' deletes a digit.");
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    let mut stats = Statistics::default();

    loop {
        print_board(&game.snapshot());

        let Some(line) = get_user_input("Guess")? else {
            break;
        };

        match parse_line(&line) {
            LineCommand::Quit => break,
            LineCommand::NewGame => {
                game.handle_reset();
                println!("\n🔄 New game started!");
            }
            LineCommand::Keys(keys) => {
                for key in keys {
                    game.handle_key_press(key);
                }

                let snapshot = game.snapshot();
                if snapshot.game_status.is_terminal() {
                    stats.record(game.state());
                    print_board(&snapshot);
                    print_game_over(&snapshot, game.state().secret());
                    println!(
                        "  Games: {} | Win rate: {:.0}%\n",
                        stats.games_played,
                        stats.win_rate()
                    );

                    let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
                    if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                        game.handle_reset();
                        println!("\n🔄 New game started!");
                    } else {
                        break;
                    }
                } else if !snapshot.pending_guess.is_empty() {
                    println!("Need 5 digits to submit.");
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digit;
    use crate::game::GameStatus;

    #[test]
    fn parse_commands() {
        assert_eq!(parse_line("quit"), LineCommand::Quit);
        assert_eq!(parse_line("  Q "), LineCommand::Quit);
        assert_eq!(parse_line("new"), LineCommand::NewGame);
    }

    #[test]
    fn parse_digits_and_backspace() {
        let LineCommand::Keys(keys) = parse_line("12-3") else {
            panic!("expected keys");
        };
        assert_eq!(
            keys,
            vec![
                KeyInput::Digit(Digit::ALL[1]),
                KeyInput::Digit(Digit::ALL[2]),
                KeyInput::Backspace,
                KeyInput::Digit(Digit::ALL[3]),
                KeyInput::Enter,
            ]
        );
    }

    #[test]
    fn parse_ignores_other_characters() {
        assert_eq!(parse_line("a b"), LineCommand::Keys(vec![KeyInput::Enter]));
    }

    #[test]
    fn lines_drive_the_game() {
        let mut game = Game::with_seed(21);
        let secret = game.state().secret().to_string();

        // Partial line stays pending and is completed by the next one
        let (head, tail) = secret.split_at(2);
        for line in [head, tail] {
            if let LineCommand::Keys(keys) = parse_line(line) {
                for key in keys {
                    game.handle_key_press(key);
                }
            }
        }

        assert_eq!(game.status(), GameStatus::Win);
        assert_eq!(game.state().history().len(), 1);
    }
}
