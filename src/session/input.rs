//! Abstract player intents.
//!
//! Key handling lives outside the engine; whatever polls the keyboard or
//! mouse maps events onto these values.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, Position};

/// A single player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputIntent {
    Up,
    Down,
    Left,
    Right,
    /// Pick the start tile at a cell.
    Select(Position),
}

impl InputIntent {
    /// The steering direction, or `None` for a selection.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputIntent::Up => Some(Direction::Up),
            InputIntent::Down => Some(Direction::Down),
            InputIntent::Left => Some(Direction::Left),
            InputIntent::Right => Some(Direction::Right),
            InputIntent::Select(_) => None,
        }
    }
}

impl From<Direction> for InputIntent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => InputIntent::Up,
            Direction::Down => InputIntent::Down,
            Direction::Left => InputIntent::Left,
            Direction::Right => InputIntent::Right,
        }
    }
}
