//! Game controller: turns view intents into new histories.

use super::error::GameError;
use super::history::History;
use super::intent::Intent;
use super::invariants::assert_invariants;
use super::position::Position;
use super::rules;
use super::types::{Board, Mark};
use super::view::GameView;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of a click on a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// The game is already decided; nothing changed.
    GameOver,
    /// The square is occupied; the repick signal is set.
    Repick,
    /// A new step was recorded.
    Recorded {
        /// Number of the new step.
        step: usize,
    },
}

/// Result of applying an [`Intent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Applied {
    /// A click was handled.
    Click(ClickOutcome),
    /// The cursor moved.
    Jumped {
        /// Step now under the cursor.
        step: usize,
    },
}

/// Owns the history for one game and validates moves.
///
/// A new game is a new controller.
#[derive(Debug, Clone)]
pub struct GameController {
    history: History,
    repick: bool,
}

impl GameController {
    /// Mark that always moves first.
    pub const STARTING_PLAYER: Mark = Mark::X;

    /// Creates a controller for a blank board with X to move.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game");
        Self {
            history: History::create(Board::new(), Self::STARTING_PLAYER),
            repick: false,
        }
    }

    /// Handles a click on `position`.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn handle_cell_click(&mut self, position: Position) -> ClickOutcome {
        let step = self.history.current_step();

        if step.outcome().is_decided() {
            debug!(outcome = %step.outcome(), "Ignoring click on decided game");
            return ClickOutcome::GameOver;
        }

        if !step.board().is_empty(position) {
            debug!("Square occupied, requesting repick");
            self.repick = true;
            return ClickOutcome::Repick;
        }

        self.repick = false;
        let player = step.next_player();
        let board = step.board().with_mark(position, player);
        let outcome = rules::outcome(&board);

        self.history = self.history.record_step(board, player.opponent(), outcome);
        assert_invariants(&self.history);
        let recorded = self.history.cursor();
        info!(%player, step = recorded, %outcome, "Move recorded");

        ClickOutcome::Recorded { step: recorded }
    }

    /// Handles a click given as a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PositionOutOfBounds`] for indices above 8.
    #[instrument(skip(self))]
    pub fn click_index(&mut self, index: usize) -> Result<ClickOutcome, GameError> {
        let position = Position::from_index(index).ok_or(GameError::PositionOutOfBounds(index))?;
        Ok(self.handle_cell_click(position))
    }

    /// Moves the cursor to `step_number` and clears the repick signal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::History`] if the step does not exist; the
    /// controller is left unchanged.
    #[instrument(skip(self))]
    pub fn jump_to_step(&mut self, step_number: usize) -> Result<(), GameError> {
        self.history = self.history.jump_to(step_number)?;
        self.repick = false;
        debug!(step = step_number, "Jumped");
        Ok(())
    }

    /// Dispatches an intent from a view.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`GameController::jump_to_step`].
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) -> Result<Applied, GameError> {
        match intent {
            Intent::Click(position) => Ok(Applied::Click(self.handle_cell_click(position))),
            Intent::Jump(step) => {
                self.jump_to_step(step)?;
                Ok(Applied::Jumped { step })
            }
        }
    }

    /// Parses `text` as an [`Intent`] and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Intent`] for unparseable text; otherwise as
    /// [`GameController::apply`].
    #[instrument(skip(self))]
    pub fn apply_text(&mut self, text: &str) -> Result<Applied, GameError> {
        let intent: Intent = text.parse()?;
        self.apply(intent)
    }

    /// Returns the current history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns true if the view should ask for a different square.
    pub fn repick_requested(&self) -> bool {
        self.repick
    }

    /// Builds the snapshot for the view.
    pub fn view(&self) -> GameView {
        GameView::from_history(&self.history, self.repick)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{IntentError, Outcome, Square};

    #[test]
    fn test_first_click_places_x() {
        let mut game = GameController::new();
        assert_eq!(
            game.handle_cell_click(Position::Center),
            ClickOutcome::Recorded { step: 1 }
        );
        let step = game.history().current_step();
        assert_eq!(step.board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(step.next_player(), Mark::O);
    }

    #[test]
    fn test_occupied_click_sets_repick() {
        let mut game = GameController::new();
        game.handle_cell_click(Position::Center);
        let before = game.history().clone();

        assert_eq!(game.handle_cell_click(Position::Center), ClickOutcome::Repick);
        assert!(game.repick_requested());
        assert_eq!(game.history(), &before);
    }

    #[test]
    fn test_click_index_bounds() {
        let mut game = GameController::new();
        assert_eq!(game.click_index(9), Err(GameError::PositionOutOfBounds(9)));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_bad_jump_keeps_state() {
        let mut game = GameController::new();
        game.handle_cell_click(Position::Center);
        game.handle_cell_click(Position::Center);
        assert!(game.repick_requested());

        assert!(game.jump_to_step(5).is_err());
        assert!(game.repick_requested());
        assert_eq!(game.history().cursor(), 1);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut game = GameController::new();
        assert_eq!(
            game.apply(Intent::Click(Position::TopLeft)),
            Ok(Applied::Click(ClickOutcome::Recorded { step: 1 }))
        );
        assert_eq!(game.apply(Intent::Jump(0)), Ok(Applied::Jumped { step: 0 }));
        assert_eq!(game.history().current_step().outcome(), Outcome::Undecided);
        assert_eq!(game.view().active_step(), &0);
    }

    #[test]
    fn test_apply_text() {
        let mut game = GameController::new();
        assert_eq!(
            game.apply_text("click 4"),
            Ok(Applied::Click(ClickOutcome::Recorded { step: 1 }))
        );
        assert_eq!(
            game.apply_text("move 4"),
            Err(GameError::Intent(IntentError::new("move 4")))
        );
        assert!(matches!(game.apply_text("jump 7"), Err(GameError::History(_))));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history().cursor(), 1);
    }
}
