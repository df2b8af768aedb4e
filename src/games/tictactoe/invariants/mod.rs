//! First-class invariants over a game [`History`].
//!
//! Invariants are checked in debug builds after every transition and can
//! be tested independently.

use super::History;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod cursor_in_range;
pub mod monotonic_board;
pub mod outcome_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    CursorInRangeInvariant,
    AlternatingTurnInvariant,
    MonotonicBoardInvariant,
    OutcomeConsistentInvariant,
);

/// Debug-build check of every history invariant.
pub fn assert_invariants(history: &History) {
    debug_assert!(
        HistoryInvariants::check_all(history).is_ok(),
        "History invariants violated: {:?}",
        HistoryInvariants::check_all(history)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameController, Mark, Outcome, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameController::new();
        assert!(HistoryInvariants::check_all(game.history()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_rewind_and_branch() {
        let mut game = GameController::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            game.handle_cell_click(pos);
        }
        game.jump_to_step(1).unwrap();
        game.handle_cell_click(Position::BottomRight);

        assert!(HistoryInvariants::check_all(game.history()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // Second step has the wrong mover and skips a mark.
        let history = History::create(Board::new(), Mark::X).record_step(
            Board::new(),
            Mark::X,
            Outcome::Undecided,
        );

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let history = History::create(Board::new(), Mark::X);
        type TwoInvariants = (CursorInRangeInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&history).is_ok());
    }
}
