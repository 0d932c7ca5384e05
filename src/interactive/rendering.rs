//! TUI rendering with ratatui
//!
//! Board, keyboard and banner for the Numble interface.

use super::app::{App, MessageStyle};
use crate::core::{ANSWER_LENGTH, Digit, Feedback, NUM_OF_GUESSES};
use crate::game::{GameStatus, KeyHints, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

const GREEN: Color = Color::Rgb(0x6a, 0xaa, 0x64);
const YELLOW: Color = Color::Rgb(0xc9, 0xb4, 0x58);
const DARK_GRAY: Color = Color::Rgb(0x78, 0x7c, 0x7e);
const LIGHT_GRAY: Color = Color::Rgb(0xd3, 0xd6, 0xda);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.game.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(board_height()),
            Constraint::Length(5), // Keyboard
            Constraint::Min(4),    // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &snapshot, chunks[1]);
    render_keyboard(f, &snapshot.key_hints, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if snapshot.game_status.is_terminal() {
        render_banner(f, app, &snapshot);
    }
}

fn board_height() -> u16 {
    // One line per row, a blank line between rows, plus borders
    (NUM_OF_GUESSES * 2 - 1 + 2) as u16
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("NUMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for a square or key with the given feedback
#[must_use]
pub fn feedback_style(feedback: Option<Feedback>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match feedback {
        Some(Feedback::Correct) => base.fg(Color::White).bg(GREEN),
        Some(Feedback::Present) => base.fg(Color::White).bg(YELLOW),
        Some(Feedback::Absent) => base.fg(Color::White).bg(DARK_GRAY),
        None => base.fg(Color::Black).bg(LIGHT_GRAY),
    }
}

fn square<'a>(text: String, style: Style) -> [Span<'a>; 2] {
    [Span::styled(text, style), Span::raw(" ")]
}

/// Build the board lines: scored rows, the current row, then empty rows
#[must_use]
pub fn board_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let empty = Style::default().fg(DARK_GRAY);
    let mut rows: Vec<Line<'static>> = Vec::with_capacity(NUM_OF_GUESSES);

    for guess in &snapshot.guess_history {
        let spans: Vec<Span> = guess
            .squares()
            .iter()
            .flat_map(|&(digit, feedback)| {
                square(format!(" {digit} "), feedback_style(Some(feedback)))
            })
            .collect();
        rows.push(Line::from(spans));
    }

    if rows.len() < NUM_OF_GUESSES {
        let typed = Style::default().add_modifier(Modifier::BOLD);
        let spans: Vec<Span> = (0..ANSWER_LENGTH)
            .flat_map(|i| match snapshot.pending_guess.get(i) {
                Some(digit) => square(format!("[{digit}]"), typed),
                None => square("[ ]".to_string(), empty),
            })
            .collect();
        rows.push(Line::from(spans));
    }

    while rows.len() < NUM_OF_GUESSES {
        let spans: Vec<Span> = (0..ANSWER_LENGTH)
            .flat_map(|_| square("[ ]".to_string(), empty))
            .collect();
        rows.push(Line::from(spans));
    }

    let mut lines = Vec::with_capacity(NUM_OF_GUESSES * 2);
    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(row);
    }
    lines
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let board = Paragraph::new(board_lines(snapshot))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

/// Build the keyboard lines: `1 2 3 4 5 6` over `Enter 7 8 9 0 ⌫`
#[must_use]
pub fn keyboard_lines(hints: &KeyHints) -> Vec<Line<'static>> {
    let key = |value: usize| {
        let digit = Digit::ALL[value];
        square(format!(" {digit} "), feedback_style(hints.get(digit)))
    };
    let control = Style::default()
        .fg(Color::Black)
        .bg(LIGHT_GRAY)
        .add_modifier(Modifier::BOLD);

    let top: Vec<Span> = (1..=6).flat_map(key).collect();

    let mut bottom: Vec<Span> = square(" Enter ".to_string(), control).to_vec();
    bottom.extend([7, 8, 9, 0].into_iter().flat_map(key));
    bottom.push(Span::styled(" ⌫ ", control));

    vec![Line::from(top), Line::default(), Line::from(bottom)]
}

fn render_keyboard(f: &mut Frame, hints: &KeyHints, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(hints))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let status =
        Paragraph::new(format!("Status: {}", app.game.status())).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let summary_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let summary = Paragraph::new(summary_text).alignment(Alignment::Center);
    f.render_widget(summary, chunks[1]);

    let help = Paragraph::new("q: Quit | n: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// Lines shown in the win/lose banner
#[must_use]
pub fn banner_lines(app: &App, snapshot: &Snapshot) -> Vec<Line<'static>> {
    let (title, color) = match snapshot.game_status {
        GameStatus::Win => ("🎉 You Win! 🎉", GREEN),
        _ => ("You Lose!", Color::Red),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    if snapshot.game_status == GameStatus::Win {
        lines.push(Line::from(vec![
            Span::raw("You guessed the correct answer in "),
            Span::styled(
                snapshot.guess_history.len().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" tries."),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("The answer was "),
            Span::styled(
                app.game.state().secret().to_string(),
                Style::default().fg(YELLOW).add_modifier(Modifier::BOLD),
            ),
            Span::raw("."),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "↻ Press 'n' to play again",
        Style::default().fg(Color::Cyan),
    )));
    lines
}

fn render_banner(f: &mut Frame, app: &App, snapshot: &Snapshot) {
    let area = centered_rect(f.area(), 50, 8);
    let banner = Paragraph::new(banner_lines(app, snapshot))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );

    f.render_widget(Clear, area);
    f.render_widget(banner, area);
}

/// A `width` x `height` rectangle centred in `area`
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, KeyInput};
    use ratatui::{Terminal, backend::TestBackend};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_has_one_line_per_row_plus_gaps() {
        let game = Game::with_seed(1);
        let lines = board_lines(&game.snapshot());
        assert_eq!(lines.len(), NUM_OF_GUESSES * 2 - 1);
    }

    #[test]
    fn board_shows_pending_digits() {
        let mut game = Game::with_seed(1);
        game.handle_key_press(KeyInput::Digit(Digit::ALL[4]));
        game.handle_key_press(KeyInput::Digit(Digit::ALL[2]));

        let lines = board_lines(&game.snapshot());
        assert_eq!(line_text(&lines[0]), "[4] [2] [ ] [ ] [ ] ");
    }

    #[test]
    fn full_history_has_no_current_row() {
        let mut game = Game::with_seed(2);
        let secret = *game.state().secret();
        let digits = secret.digits();
        for _ in 0..NUM_OF_GUESSES {
            for i in 0..ANSWER_LENGTH {
                game.handle_key_press(KeyInput::Digit(digits[(i + 1) % ANSWER_LENGTH]));
            }
            game.handle_key_press(KeyInput::Enter);
        }

        let lines = board_lines(&game.snapshot());
        assert_eq!(lines.len(), NUM_OF_GUESSES * 2 - 1);
        assert!(lines.iter().all(|l| !line_text(l).contains("[ ]")));
    }

    #[test]
    fn keyboard_layout() {
        let lines = keyboard_lines(&KeyHints::default());
        assert_eq!(line_text(&lines[0]), " 1   2   3   4   5   6  ");
        assert_eq!(line_text(&lines[2]), " Enter   7   8   9   0   ⌫ ");
    }

    #[test]
    fn feedback_colours() {
        assert_eq!(feedback_style(Some(Feedback::Correct)).bg, Some(GREEN));
        assert_eq!(feedback_style(Some(Feedback::Present)).bg, Some(YELLOW));
        assert_eq!(feedback_style(Some(Feedback::Absent)).bg, Some(DARK_GRAY));
        assert_eq!(feedback_style(None).bg, Some(LIGHT_GRAY));
    }

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered_rect(Rect::new(0, 0, 100, 40), 50, 8);
        assert_eq!(rect, Rect::new(25, 16, 50, 8));
    }

    #[test]
    fn banner_reports_tries() {
        let mut app = App::new(Game::with_seed(3));
        let secret = *app.game.state().secret();
        for digit in secret.digits() {
            app.game.handle_key_press(KeyInput::Digit(*digit));
        }
        app.game.handle_key_press(KeyInput::Enter);

        let lines = banner_lines(&app, &app.game.snapshot());
        assert_eq!(line_text(&lines[0]), "🎉 You Win! 🎉");
        assert_eq!(
            line_text(&lines[2]),
            "You guessed the correct answer in 1 tries."
        );
    }

    #[test]
    fn ui_draws_without_panicking() {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let mut app = App::new(Game::with_seed(4));
        terminal.draw(|f| ui(f, &app)).unwrap();

        let secret = *app.game.state().secret();
        for digit in secret.digits() {
            app.game.handle_key_press(KeyInput::Digit(*digit));
        }
        app.game.handle_key_press(KeyInput::Enter);
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
