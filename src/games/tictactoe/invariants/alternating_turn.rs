//! Alternating turn invariant: X, O, X, O, ...

use super::super::{History, Mark};
use super::Invariant;

/// Invariant: step `n` hands the move to X when `n` is even, O otherwise.
///
/// The initial step always has X to move.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history.steps().iter().enumerate().all(|(number, step)| {
            let expected = if number % 2 == 0 { Mark::X } else { Mark::O };
            step.next_player() == expected
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameController, Outcome, Position};

    #[test]
    fn test_holds_through_play() {
        let mut game = GameController::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            game.handle_cell_click(pos);
            assert!(AlternatingTurnInvariant::holds(game.history()));
        }
    }

    #[test]
    fn test_starting_with_o_violates() {
        let history = History::create(Board::new(), Mark::O);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_mover_violates() {
        let history = History::create(Board::new(), Mark::X).record_step(
            Board::new().with_mark(Position::Center, Mark::X),
            Mark::X,
            Outcome::Undecided,
        );
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
