//! Cursor invariant: history is non-empty and the cursor selects a step.

use super::super::History;
use super::Invariant;

/// Invariant: `0 <= cursor < steps.len()` and `steps` is non-empty.
pub struct CursorInRangeInvariant;

impl Invariant<History> for CursorInRangeInvariant {
    fn holds(history: &History) -> bool {
        history.cursor() < history.steps().len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded step"
    }
}
