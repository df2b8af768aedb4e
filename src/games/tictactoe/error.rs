//! Error types for the game engine.

use derive_more::{Display, Error, From};

/// Error returned by history repositioning.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested step does not exist.
    #[display("Step {} is out of range (history has {} steps)", requested, len)]
    StepOutOfRange {
        /// Step number that was requested.
        requested: usize,
        /// Number of recorded steps.
        len: usize,
    },
}

/// Error parsing a textual intent.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized intent: {:?}", input)]
pub struct IntentError {
    /// The text that failed to parse.
    #[error(not(source))]
    pub input: String,
}

impl IntentError {
    /// Creates a new intent error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Error raised by the game controller.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// A raw board index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    #[from(ignore)]
    PositionOutOfBounds(#[error(not(source))] usize),

    /// History rejected a jump.
    #[display("{}", _0)]
    History(HistoryError),

    /// Intent text could not be parsed.
    #[display("{}", _0)]
    Intent(IntentError),
}
