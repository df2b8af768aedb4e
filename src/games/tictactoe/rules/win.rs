//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line (in [`LINES`] order) fully held by `mark`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    let target = Square::Occupied(mark);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == target))
}

/// Checks if there is a winner on the board.
///
/// Scans squares 0 through 8; the first occupied square whose mark owns
/// a complete line decides the winner.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    board
        .squares()
        .iter()
        .filter_map(|sq| sq.mark())
        .find(|mark| winning_line(board, *mark).is_some())
}
