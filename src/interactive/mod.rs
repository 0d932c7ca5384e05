//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, key_input, run_tui};
