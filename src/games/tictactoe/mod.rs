//! Tic-tac-toe with a rewindable move history.

mod controller;
mod error;
mod history;
mod intent;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use controller::{Applied, ClickOutcome, GameController};
pub use error::{GameError, HistoryError, IntentError};
pub use history::{History, Step};
pub use intent::Intent;
pub use position::Position;
pub use types::{Board, Mark, Outcome, Square};
pub use view::{GameView, REPICK_MESSAGE, StepEntry};
