//! Core types: coordinates, directions, RNG, configuration, errors.
//!
//! Everything here is independent of the board rules and is shared by the
//! grid, snake and board modules.

pub mod config;
pub mod error;
pub mod position;
pub mod rng;

pub use config::SessionConfig;
pub use error::{GameError, Result};
pub use position::{Direction, Position};
pub use rng::GameRng;
