//! First-class intents emitted by a view.
//!
//! Intents are the only way a front end drives the controller. They can
//! be parsed from text, logged, and replayed.

use super::error::IntentError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user intent directed at the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Click on a board square.
    Click(Position),
    /// Jump to a recorded step.
    Jump(usize),
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Click(pos) => write!(f, "click {}", pos.to_index()),
            Intent::Jump(step) => write!(f, "jump {}", step),
        }
    }
}

/// Parses `N`, `click N`, `jump N` or `j N`.
impl FromStr for Intent {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let mut words = lowered.split_whitespace();
        let (verb, arg) = match (words.next(), words.next(), words.next()) {
            (Some(arg), None, None) => ("click", arg),
            (Some(verb), Some(arg), None) => (verb, arg),
            _ => return Err(IntentError::new(s)),
        };
        let number: usize = arg.parse().map_err(|_| IntentError::new(s))?;

        match verb {
            "click" | "c" => Position::from_index(number)
                .map(Intent::Click)
                .ok_or_else(|| IntentError::new(s)),
            "jump" | "j" => Ok(Intent::Jump(number)),
            _ => Err(IntentError::new(s)),
        }
    }
}
