//! # snake-words
//!
//! Game-state engine for a grid-based word-spelling snake game.
//!
//! The player picks a starting letter on a fixed board, then steers a
//! growing chain of letter tiles through neighbouring cells, eating letters
//! to spell a secret win word. Eat a wrong letter, leave the board or run
//! into yourself and the snake dies.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Agnostic**: The engine speaks in logical cells and tick
//!    events. Sprites, layout and interpolation belong to a `RenderSink`.
//!
//! 2. **Explicit State**: A `Board` owns the grid, snake and win word and is
//!    passed to whoever drives it. No globals.
//!
//! 3. **Outcomes, Not Errors**: Winning and dying are `TickEvent`s. Errors
//!    are reserved for bad setup data and bounds-contract violations.
//!
//! ## Architecture
//!
//! - **Fixed-Step Logic**: `GameClock` paces `Board::game_tick` independently
//!   of the frame rate; at most one tick runs per frame, before drawing.
//!
//! - **Deterministic Word Choice**: The win word is drawn from a seeded
//!   `GameRng`, so a seed fully determines a round.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, RNG, configuration, errors
//! - `grid`: Letter grid and tiles
//! - `snake`: The chain of tiles and its movement rules
//! - `words`: Dictionary and win-word validation
//! - `board`: Per-tick orchestration and events
//! - `session`: Clock, input intents and the render boundary

pub mod board;
pub mod core;
pub mod grid;
pub mod session;
pub mod snake;
pub mod words;

// Re-export commonly used types
pub use crate::core::{Direction, GameError, GameRng, Position, Result, SessionConfig};

pub use crate::grid::{Grid, Tile, STOCK_LAYOUT};

pub use crate::snake::Snake;

pub use crate::words::{stock_words, Dictionary, Verdict, WordValidator};

pub use crate::board::{Board, DeathCause, Frame, Outcome, SegmentView, Selection, TickEvent};

pub use crate::session::{GameClock, GameSession, InputIntent, RecordingSink, RenderSink, SinkCall};
