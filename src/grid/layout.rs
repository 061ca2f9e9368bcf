//! Board layouts.
//!
//! A layout is a list of equally long rows. A space is an empty cell and an
//! ASCII letter (either case) is a board tile.

use crate::core::{GameError, Result};

/// The stock 15x15 board.
///
/// Spells VENOM (down from the `V` at (12, 5)), SERPENT, REPTILE, SNAKES
/// and SLITHER.
pub const STOCK_LAYOUT: [&str; 15] = [
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
    "          R V  ",
    "          E E  ",
    "       SERPENT ",
    "       N  T O  ",
    "       A  I M  ",
    "       K  L    ",
    "  SLITHER E    ",
    "       S       ",
    "               ",
    "               ",
];

/// Parse one layout row into cells.
pub(crate) fn parse_row(y: usize, row: &str) -> Result<Vec<Option<char>>> {
    row.chars()
        .enumerate()
        .map(|(x, c)| match c {
            ' ' => Ok(None),
            c if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_uppercase())),
            other => Err(GameError::InvalidLayout(format!(
                "unexpected character {other:?} at ({x}, {y})"
            ))),
        })
        .collect()
}
