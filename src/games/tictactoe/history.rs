//! Linear step history with a movable cursor.
//!
//! A [`History`] is a value: every transition returns a new `History` and
//! leaves the receiver untouched. Steps are stored in a shared, read-only
//! slice, so a jump reuses the existing steps while a recorded move builds
//! a fresh sequence.

use super::error::HistoryError;
use super::types::{Board, Mark, Outcome};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Snapshot of the game at one point in its history.
///
/// A step owns its board. Once built it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    board: Board,
    next_player: Mark,
    outcome: Outcome,
}

impl Step {
    /// Creates a new step.
    pub fn new(board: Board, next_player: Mark, outcome: Outcome) -> Self {
        Self {
            board,
            next_player,
            outcome,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next from this step.
    pub fn next_player(&self) -> Mark {
        self.next_player
    }

    /// Returns the outcome resolved at this step.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// Ordered steps plus a cursor selecting the current one.
///
/// Invariants: `steps` is never empty and `cursor < steps.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    steps: Arc<[Step]>,
    cursor: usize,
}

impl History {
    /// Creates a history holding a single undecided step.
    #[instrument]
    pub fn create(initial: Board, starting_player: Mark) -> Self {
        let first = Step::new(initial, starting_player, Outcome::Undecided);
        Self {
            steps: Arc::from([first]),
            cursor: 0,
        }
    }

    /// Returns a copy of the step under the cursor.
    pub fn current_step(&self) -> Step {
        self.steps[self.cursor]
    }

    /// Records a new step after the cursor.
    ///
    /// Steps past the cursor are discarded first. The returned history's
    /// cursor points at the new step.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.steps.len()))]
    #[must_use]
    pub fn record_step(&self, board: Board, next_player: Mark, outcome: Outcome) -> Self {
        let kept = self.cursor + 1;
        let pruned = self.steps.len() - kept;
        if pruned > 0 {
            debug!(pruned, "Discarding steps past cursor");
        }

        let steps: Arc<[Step]> = self.steps[..kept]
            .iter()
            .copied()
            .chain(std::iter::once(Step::new(board, next_player, outcome)))
            .collect();
        let cursor = steps.len() - 1;
        Self { steps, cursor }
    }

    /// Moves the cursor to `step_number`, sharing the existing steps.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if no such step exists.
    #[instrument(skip(self), fields(len = self.steps.len()))]
    pub fn jump_to(&self, step_number: usize) -> Result<Self, HistoryError> {
        if step_number >= self.steps.len() {
            return Err(HistoryError::StepOutOfRange {
                requested: step_number,
                len: self.steps.len(),
            });
        }
        Ok(Self {
            steps: Arc::clone(&self.steps),
            cursor: step_number,
        })
    }

    /// Returns all recorded steps in chronological order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of recorded steps (always at least one).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a history holds at least its initial step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns every step number that can be jumped to.
    pub fn step_numbers(&self) -> std::ops::Range<usize> {
        0..self.steps.len()
    }

    /// Returns true when the cursor is on the newest step.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.steps.len()
    }

    /// Returns true if both histories hold the very same step storage.
    pub fn shares_steps_with(&self, other: &History) -> bool {
        Arc::ptr_eq(&self.steps, &other.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    fn fresh() -> History {
        History::create(Board::new(), Mark::X)
    }

    fn play(history: &History, pos: Position) -> History {
        let step = history.current_step();
        let board = step.board().with_mark(pos, step.next_player());
        history.record_step(board, step.next_player().opponent(), Outcome::Undecided)
    }

    #[test]
    fn test_create_has_single_step() {
        let history = fresh();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        let step = history.current_step();
        assert_eq!(step.board(), &Board::new());
        assert_eq!(step.next_player(), Mark::X);
        assert_eq!(step.outcome(), Outcome::Undecided);
    }

    #[test]
    fn test_record_appends_and_advances() {
        let before = fresh();
        let after = play(&before, Position::Center);
        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(after.cursor(), 1);
        assert!(after.is_at_latest());
        assert_eq!(after.current_step().next_player(), Mark::O);
    }

    #[test]
    fn test_record_after_jump_prunes() {
        let mut history = fresh();
        for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
            history = play(&history, pos);
        }
        let rewound = history.jump_to(1).unwrap();
        let branched = play(&rewound, Position::BottomLeft);

        assert_eq!(branched.len(), rewound.cursor() + 2);
        assert_eq!(branched.steps()[..2], history.steps()[..2]);
        assert!(branched.current_step().board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_jump_shares_steps() {
        let history = play(&play(&fresh(), Position::Center), Position::TopLeft);
        let jumped = history.jump_to(0).unwrap();
        assert!(jumped.shares_steps_with(&history));
        assert_eq!(jumped.steps(), history.steps());
        assert_eq!(jumped.cursor(), 0);
        assert!(!jumped.is_at_latest());
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let history = fresh();
        assert_eq!(
            history.jump_to(1),
            Err(HistoryError::StepOutOfRange {
                requested: 1,
                len: 1
            })
        );
    }

    #[test]
    fn test_current_step_idempotent() {
        let history = play(&fresh(), Position::Center);
        assert_eq!(history.current_step(), history.current_step());
    }
}
