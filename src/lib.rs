//! Tic-tac-toe with time travel.
//!
//! Two players alternate marks on a 3x3 board. Every accepted move is
//! recorded as an immutable step, and play can jump back to any earlier
//! step and continue from there; the steps that followed are discarded.
//!
//! # Architecture
//!
//! - **History**: immutable [`Step`] snapshots plus a cursor ([`History`])
//! - **Rules**: the eight-line table, winner and tie detection ([`rules`])
//! - **Controller**: validates clicks and jumps ([`GameController`])
//! - **View**: snapshot handed to any front end ([`GameView`])
//!
//! # Example
//!
//! ```
//! use tictactoe_timetravel::{GameController, Mark, Outcome, Position};
//!
//! let mut game = GameController::new();
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter,
//!             Position::Center, Position::TopRight] {
//!     game.handle_cell_click(pos);
//! }
//! assert_eq!(game.view().outcome(), &Outcome::Winner(Mark::X));
//!
//! game.jump_to_step(2).unwrap();
//! game.handle_cell_click(Position::BottomRight);
//! assert_eq!(game.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Applied, Board, ClickOutcome, GameController, GameError, GameView, History, HistoryError,
    Intent, IntentError, Mark, Outcome, Position, REPICK_MESSAGE, Square, Step, StepEntry,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::{invariants, rules};
