//! What a tick reports to the outside world.
//!
//! One [`TickEvent`] per tick goes to the renderer. [`Frame`] is the
//! continuous view: every live tile with its logical cell before and after
//! the last tick. Interpolating between the two is left to the renderer.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::grid::Tile;

/// Why a snake died.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    /// The head left the board.
    OutOfBounds,
    /// The head ran into the snake's own body (including reversing).
    SelfCollision,
    /// The next letter would not continue the win word.
    Misspelled,
}

/// Result of one logic tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// The snake stepped into an open cell.
    Moved { head: Position },
    /// The snake ate a tile; `letter` is the new tail letter.
    Ate { letter: char },
    /// The snake spells the win word. Controls are now disabled.
    Won,
    /// The snake died.
    Died { cause: DeathCause },
}

impl TickEvent {
    /// True for `Won` and `Died`, after which no further ticks do anything.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickEvent::Won | TickEvent::Died { .. })
    }
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Died(DeathCause),
}

/// A snake segment with its logical cell before and after the last tick.
///
/// A segment appended by eating has `from == to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentView {
    pub letter: char,
    pub from: Position,
    pub to: Position,
}

/// Snapshot of every live tile, for drawing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Letters still on the board.
    pub board_tiles: Vec<Tile>,
    /// Snake segments, head first. Empty before a tile is selected.
    pub segments: Vec<SegmentView>,
}
