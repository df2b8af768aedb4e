//! Monotonic board invariant: each step adds exactly one mark.

use super::super::{History, Position, Square};
use super::Invariant;

/// Invariant: every step keeps all earlier marks and adds exactly one new
/// mark, placed by the previous step's mover.
pub struct MonotonicBoardInvariant;

impl Invariant<History> for MonotonicBoardInvariant {
    fn holds(history: &History) -> bool {
        let Some(first) = history.steps().first() else {
            return false;
        };
        if first.board().squares().iter().any(|s| *s != Square::Empty) {
            return false;
        }

        history.steps().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let mut added = 0;
            for pos in Position::ALL {
                match (before.board().get(pos), after.board().get(pos)) {
                    (old, new) if old == new => {}
                    (Square::Empty, Square::Occupied(mark)) if mark == before.next_player() => {
                        added += 1;
                    }
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark for the player to move"
    }
}
