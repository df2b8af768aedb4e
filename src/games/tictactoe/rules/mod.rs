//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Outcome computation and the
//! view's winning-line highlight both read the same line table in
//! [`win::LINES`].

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Resolves the outcome of a board.
///
/// A completed line wins; otherwise a full board ties; otherwise play
/// continues.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Winner(winner);
    }
    if is_full(board) {
        return Outcome::Tie;
    }
    Outcome::Undecided
}
