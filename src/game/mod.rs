//! Game flow: key input, state transitions and keyboard hints

mod hints;
mod input;
mod session;
mod state;
mod statistics;

pub use hints::KeyHints;
pub use input::KeyInput;
pub use session::{Game, Snapshot};
pub use state::{GameState, GameStatus, PendingGuess};
pub use statistics::Statistics;
