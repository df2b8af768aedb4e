//! Outcome invariant: stored outcomes match the rules.

use super::super::{History, rules};
use super::Invariant;

/// Invariant: each step's outcome equals [`rules::outcome`] of its board,
/// and only the newest step may be decided.
pub struct OutcomeConsistentInvariant;

impl Invariant<History> for OutcomeConsistentInvariant {
    fn holds(history: &History) -> bool {
        let steps = history.steps();
        steps.iter().enumerate().all(|(number, step)| {
            let matches_rules = step.outcome() == rules::outcome(step.board());
            let is_last = number + 1 == steps.len();
            matches_rules && (is_last || !step.outcome().is_decided())
        })
    }

    fn description() -> &'static str {
        "Stored outcomes match the board and end the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameController, Mark, Outcome, Position};

    #[test]
    fn test_holds_after_win() {
        let mut game = GameController::new();
        for index in [0, 3, 1, 4, 2] {
            game.click_index(index).unwrap();
        }
        assert_eq!(game.history().current_step().outcome(), Outcome::Winner(Mark::X));
        assert!(OutcomeConsistentInvariant::holds(game.history()));
    }

    #[test]
    fn test_mislabelled_outcome_violates() {
        let history = History::create(Board::new(), Mark::X).record_step(
            Board::new().with_mark(Position::Center, Mark::X),
            Mark::O,
            Outcome::Tie,
        );
        assert!(!OutcomeConsistentInvariant::holds(&history));
    }
}
