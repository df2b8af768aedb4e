//! Snapshot pushed to a view after every state change.

use super::history::History;
use super::position::Position;
use super::rules;
use super::types::{Board, Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Message shown while the repick signal is set.
pub const REPICK_MESSAGE: &str = "Choose a different Square!";

/// One entry in the jump list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StepEntry {
    /// Step number to jump to.
    number: usize,
    /// Button label.
    label: String,
    /// Whether this is the step under the cursor.
    active: bool,
}

impl StepEntry {
    fn new(number: usize, active: bool) -> Self {
        let label = if number == 0 {
            "Game Start".to_string()
        } else {
            format!("Go to Step#{}", number)
        };
        Self {
            number,
            label,
            active,
        }
    }
}

/// Everything a view needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Mark to move next.
    current_player: Mark,
    /// Outcome at the current step.
    outcome: Outcome,
    /// Squares to highlight; empty unless someone has won.
    winning_line: Vec<Position>,
    /// Set when the last click hit an occupied square.
    repick: bool,
    /// Jump list, one entry per recorded step.
    steps: Vec<StepEntry>,
    /// Step number under the cursor.
    active_step: usize,
}

impl GameView {
    /// Builds the snapshot for `history` and the repick flag.
    pub(super) fn from_history(history: &History, repick: bool) -> Self {
        let step = history.current_step();
        let winning_line: Vec<Position> = step
            .outcome()
            .winner()
            .and_then(|mark| rules::winning_line(step.board(), mark))
            .map(Vec::from)
            .unwrap_or_default();
        let active_step = history.cursor();
        let steps = history
            .step_numbers()
            .map(|number| StepEntry::new(number, number == active_step))
            .collect();

        Self {
            board: *step.board(),
            current_player: step.next_player(),
            outcome: step.outcome(),
            winning_line,
            repick,
            steps,
            active_step,
        }
    }

    /// Status line: next player, winner, or tie.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Undecided => format!("Next Player: {}", self.current_player),
            Outcome::Winner(mark) => format!("Winner: {}", mark),
            Outcome::Tie => "Tie game".to_string(),
        }
    }

    /// The repick prompt, if the last click hit an occupied square.
    pub fn repick_message(&self) -> Option<&'static str> {
        self.repick.then_some(REPICK_MESSAGE)
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos)
    }

    /// Renders the snapshot as plain text.
    pub fn render_text(&self) -> String {
        let mut out = self.board.display();
        out.push_str("\n\n");
        out.push_str(&self.status_line());
        if let Some(message) = self.repick_message() {
            out.push('\n');
            out.push_str(message);
        }
        for entry in &self.steps {
            let marker = if entry.active { '>' } else { ' ' };
            out.push_str(&format!("\n{} {}. {}", marker, entry.number, entry.label));
        }
        out
    }
}
