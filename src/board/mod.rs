//! Round orchestration.
//!
//! [`Board`] ties the grid, the snake and the win word together. Each call
//! to [`Board::game_tick`] makes one decision over the current state and
//! reports it as a [`TickEvent`]:
//!
//! | situation                                   | event      |
//! |---------------------------------------------|------------|
//! | steered into a wall or its own body         | `Died`     |
//! | name equals the win word                    | `Won`      |
//! | next letter breaks the win word             | `Died`     |
//! | next cell open                              | `Moved`    |
//! | next cell holds a letter that fits          | `Ate`      |
//!
//! Winning and dying are ordinary outcomes, never errors.

mod event;
mod round;

pub use event::{DeathCause, Frame, Outcome, SegmentView, TickEvent};
pub use round::{Board, Selection};
