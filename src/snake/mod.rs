//! The player-controlled chain of letter tiles.
//!
//! ## Lifecycle
//!
//! ```text
//! created ──set_direction──▶ steered ──kill──▶ dead
//!    │                                         ▲
//!    └────────────────kill─────────────────────┘
//! ```
//!
//! A snake is created from the tile the player selects and is never
//! destroyed during a round. Death is terminal: a dead snake ignores
//! steering and movement.
//!
//! ## Movement
//!
//! On every step each body segment takes the position its predecessor held
//! before the step, then the head moves to the target cell. Eating appends
//! a segment carrying the eaten letter where the tail used to be, so the
//! chain stays contiguous.
//!
//! The chain is an `im::Vector` so boards (and the renderer's snapshots)
//! can be cloned cheaply.

use im::Vector;

use crate::core::{Direction, Position};
use crate::grid::{Grid, Tile};

/// An ordered, non-empty chain of tiles. Index 0 is the head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    direction: Option<Direction>,
    tiles: Vector<Tile>,
    /// Segment positions before the most recent step, parallel to `tiles`.
    previous: Vector<Position>,
    alive: bool,
}

impl Snake {
    /// A single-segment snake with no direction.
    #[must_use]
    pub fn new(head: Tile) -> Self {
        Self {
            direction: None,
            tiles: Vector::unit(head),
            previous: Vector::unit(head.position),
            alive: true,
        }
    }

    /// Build a snake from existing segments, head first.
    ///
    /// Returns `None` for an empty chain.
    #[must_use]
    pub fn from_segments(
        segments: impl IntoIterator<Item = Tile>,
        direction: Option<Direction>,
    ) -> Option<Self> {
        let tiles: Vector<Tile> = segments.into_iter().collect();
        if tiles.is_empty() {
            return None;
        }
        let previous = tiles.iter().map(|t| t.position).collect();
        Some(Self {
            direction,
            tiles,
            previous,
            alive: true,
        })
    }

    /// The head segment.
    #[must_use]
    pub fn head(&self) -> &Tile {
        &self.tiles[0]
    }

    /// Position of the head segment.
    #[must_use]
    pub fn head_position(&self) -> Position {
        self.head().position
    }

    /// The cell the head would move into on the next step.
    ///
    /// Equal to the head position while the snake has no direction.
    #[must_use]
    pub fn next_position(&self) -> Position {
        self.head_position().step_towards(self.direction)
    }

    /// The spelled prefix: all letters head to tail, lower-cased.
    #[must_use]
    pub fn name(&self) -> String {
        self.tiles
            .iter()
            .map(|t| t.letter.to_ascii_lowercase())
            .collect()
    }

    /// Current direction, `None` before the first steer and after death.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// True once the snake has been steered at least once.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.direction.is_some()
    }

    /// Steer the snake. Reversing is allowed; the board treats it as
    /// running into the body.
    ///
    /// Ignored on a dead snake.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.alive {
            self.direction = Some(direction);
        }
    }

    /// Whether the snake still accepts movement.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Number of segments (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a snake has at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Segments, head first.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// Segment positions before the most recent step, head first.
    pub fn previous_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.previous.iter().copied()
    }

    /// True if any segment occupies `pos`.
    #[must_use]
    pub fn occupies(&self, pos: Position) -> bool {
        self.tiles.iter().any(|t| t.position == pos)
    }

    /// Move the head to `next`, shifting every body segment into its
    /// predecessor's old position.
    pub fn advance(&mut self, next: Position) {
        if !self.alive {
            return;
        }

        self.previous = self.tiles.iter().map(|t| t.position).collect();

        let mut vacated = self.tiles[0].position;
        for tile in self.tiles.iter_mut().skip(1) {
            std::mem::swap(&mut tile.position, &mut vacated);
        }
        self.tiles[0].position = next;
    }

    /// Eat `consumed`: remove it from `grid`, step into `next` and append a
    /// segment with the eaten letter where the tail used to be.
    pub fn grow(&mut self, next: Position, consumed: Tile, grid: &mut Grid) {
        if !self.alive {
            return;
        }

        let old_tail = self.tiles[self.tiles.len() - 1].position;
        grid.remove(&consumed);
        self.advance(next);
        self.tiles.push_back(Tile::new(old_tail, consumed.letter));
        // The new segment appears in place rather than sliding in
        self.previous.push_back(old_tail);
    }

    /// Stop the snake for good. Idempotent.
    ///
    /// The snake stays where it is, so previous positions collapse onto the
    /// current ones.
    pub fn kill(&mut self) {
        self.alive = false;
        self.direction = None;
        self.previous = self.tiles.iter().map(|t| t.position).collect();
    }
}
