//! Board coordinates and movement directions.
//!
//! ## Position
//!
//! Integer cell coordinate. `x` grows to the right, `y` grows downward, so
//! row `y` of a layout is the `y`th string. Coordinates are signed: the cell
//! one step past an edge must be representable so the bounds check can
//! reject it.
//!
//! ## Direction
//!
//! The four steering directions. A snake that has never been steered holds
//! `Option::<Direction>::None` and does not move.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    ///
    /// ```
    /// use snake_words::core::{Direction, Position};
    ///
    /// let p = Position::new(3, 3);
    /// assert_eq!(p.step(Direction::Up), Position::new(3, 2));
    /// assert_eq!(p.step(Direction::Right), Position::new(4, 3));
    /// ```
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Like [`Position::step`], but stays put when there is no direction.
    #[must_use]
    pub fn step_towards(self, direction: Option<Direction>) -> Self {
        direction.map_or(self, |d| self.step(d))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Steering direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, clockwise from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The (dx, dy) offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
