//! Positioned letters.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// A letter at a position.
///
/// Board tiles and snake segments share this type. Once a board tile is
/// eaten it keeps its letter but its position follows the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    /// Always an ASCII upper-case letter.
    pub letter: char,
}

impl Tile {
    /// Create a tile, normalizing the letter to upper case.
    #[must_use]
    pub fn new(position: Position, letter: char) -> Self {
        Self {
            position,
            letter: letter.to_ascii_uppercase(),
        }
    }

    /// Shorthand for `Tile::new(Position::new(x, y), letter)`.
    #[must_use]
    pub fn at(x: i32, y: i32, letter: char) -> Self {
        Self::new(Position::new(x, y), letter)
    }
}
