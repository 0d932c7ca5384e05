//! Display functions for game boards and command results

use super::formatters::{create_progress_bar, empty_row, keyboard, pending_row, scored_row};
use crate::commands::SimulationResult;
use crate::core::{NUM_OF_GUESSES, ScoredGuess, Secret};
use crate::game::{GameStatus, Snapshot};
use colored::Colorize;

/// Print the board and keyboard for the current game
pub fn print_board(snapshot: &Snapshot) {
    println!();
    for guess in &snapshot.guess_history {
        println!("   {}", scored_row(guess));
    }

    let used = snapshot.guess_history.len();
    if used < NUM_OF_GUESSES {
        println!("   {}", pending_row(&snapshot.pending_guess));
        for _ in used + 1..NUM_OF_GUESSES {
            println!("   {}", empty_row());
        }
    }

    let [top, bottom] = keyboard(&snapshot.key_hints);
    println!("\n   {top}");
    println!("   {bottom}\n");
}

/// Print the win/lose banner for a finished game
pub fn print_game_over(snapshot: &Snapshot, secret: &Secret) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match snapshot.game_status {
        GameStatus::Win => {
            println!("{}", "    🎉  You Win!  🎉".bright_green().bold());
            let tries = snapshot.guess_history.len();
            println!(
                "\n  You guessed the correct answer in {} {}.",
                tries.to_string().bright_cyan().bold(),
                if tries == 1 { "try" } else { "tries" }
            );
        }
        GameStatus::Lose => {
            println!("{}", "    You Lose!".bright_red().bold());
            println!(
                "\n  The answer was {}.",
                secret.to_string().bright_yellow().bold()
            );
        }
        GameStatus::InPlay => {}
    }

    println!("\n  Guess history:");
    for (i, guess) in snapshot.guess_history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.to_string().bright_white().bold(),
            guess.to_emoji()
        );
    }
    println!("\n{}\n", "═".repeat(50).bright_cyan());
}

/// Print a single scored guess
pub fn print_score_result(secret: &Secret, scored: &ScoredGuess) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.to_string().bright_yellow().bold(),
        scored.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n   {}   {}", scored_row(scored), scored.to_emoji());
    for &(digit, feedback) in scored.squares() {
        println!("   {digit}: {feedback}");
    }
    println!();
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Player:           {}", result.player);
    println!("   Games played:     {}", result.games);
    println!(
        "   Wins / losses:    {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate).bright_yellow().bold()
    );
    if result.wins > 0 {
        let average = result.average_guesses;
        println!("   Average guesses:  {average:.2} (wins only)");
    }
    let secs = result.duration.as_secs_f64();
    println!("   Time taken:       {secs:.2}s");

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=NUM_OF_GUESSES {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if result.games > 0 {
            count as f64 / result.games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
    let pct = if result.games > 0 {
        result.losses as f64 / result.games as f64 * 100.0
    } else {
        0.0
    };
    let bar = create_progress_bar(pct, 100.0, 40);
    println!("   X: {} {:6} ({pct:5.1}%)", bar.red(), result.losses);
}
