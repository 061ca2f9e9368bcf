//! Bounds-checked letter storage.

use crate::core::{GameError, Position, Result};

use super::layout::parse_row;
use super::Tile;

/// A fixed-size rectangle of cells, each empty or holding one letter.
///
/// The shape never changes after construction. The only mutation is
/// [`Grid::remove`], which empties the cell of an eaten tile.
///
/// ## Usage
///
/// ```
/// use snake_words::core::Position;
/// use snake_words::grid::Grid;
///
/// let grid = Grid::from_rows(&["V I", "   "]).unwrap();
///
/// assert!(grid.is_letter(Position::new(0, 0)));
/// assert!(grid.is_open(Position::new(1, 0)));
/// assert!(grid.is_out_of_bounds(Position::new(3, 0)));
/// assert!(!grid.is_open(Position::new(-1, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells, upper-case letters.
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Build a grid from layout rows (top row first).
    ///
    /// Fails on an empty layout, rows of different lengths, or characters
    /// other than spaces and ASCII letters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if height == 0 || width == 0 {
            return Err(GameError::InvalidLayout("layout has no cells".to_string()));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let parsed = parse_row(y, row.as_ref())?;
            if parsed.len() != width {
                return Err(GameError::InvalidLayout(format!(
                    "row {y} has {} cells, expected {width}",
                    parsed.len()
                )));
            }
            cells.extend(parsed);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_out_of_bounds(pos) {
            None
        } else {
            Some(pos.y as usize * self.width + pos.x as usize)
        }
    }

    /// True iff `pos` lies outside `[0, width) x [0, height)`.
    #[must_use]
    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width || pos.y as usize >= self.height
    }

    /// True iff `pos` is on the grid and its cell is empty.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i].is_none())
    }

    /// True iff `pos` is on the grid and its cell holds a letter.
    #[must_use]
    pub fn is_letter(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i].is_some())
    }

    /// The tile at `pos`, or `None` for an empty cell.
    ///
    /// Callers are expected to bounds-check first; an off-grid position is
    /// reported as [`GameError::OutOfBounds`].
    pub fn get(&self, pos: Position) -> Result<Option<Tile>> {
        let i = self.index(pos).ok_or(GameError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        })?;
        Ok(self.cells[i].map(|letter| Tile::new(pos, letter)))
    }

    /// The tile at `pos` if there is one, treating off-grid cells as empty.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        self.index(pos).and_then(|i| self.cells[i]).map(|letter| Tile::new(pos, letter))
    }

    /// Empty the cell `tile` came from.
    ///
    /// Returns the tile that was there, or `None` if the cell was already
    /// empty or off the grid.
    pub fn remove(&mut self, tile: &Tile) -> Option<Tile> {
        let i = self.index(tile.position)?;
        self.cells[i].take().map(|letter| Tile::new(tile.position, letter))
    }

    /// All tiles still on the board, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|letter| {
                let pos = Position::new((i % self.width) as i32, (i / self.width) as i32);
                Tile::new(pos, letter)
            })
        })
    }

    /// Number of tiles still on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::STOCK_LAYOUT;

    fn small() -> Grid {
        Grid::from_rows(&["V  ", " IN"]).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let grid = small();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.tile_count(), 3);
    }

    #[test]
    fn test_stock_layout() {
        let grid = Grid::from_rows(&STOCK_LAYOUT).unwrap();
        assert_eq!(grid.width(), 15);
        assert_eq!(grid.height(), 15);
        assert_eq!(grid.tile_at(Position::new(12, 5)), Some(Tile::at(12, 5, 'V')));
        assert_eq!(grid.tile_at(Position::new(7, 7)), Some(Tile::at(7, 7, 'S')));
        assert_eq!(grid.tile_at(Position::new(2, 11)), Some(Tile::at(2, 11, 'S')));
    }

    #[test]
    fn test_predicates() {
        let grid = small();

        assert!(grid.is_letter(Position::new(0, 0)));
        assert!(!grid.is_open(Position::new(0, 0)));

        assert!(grid.is_open(Position::new(1, 0)));
        assert!(!grid.is_letter(Position::new(1, 0)));

        for pos in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(3, 0),
            Position::new(0, 2),
        ] {
            assert!(grid.is_out_of_bounds(pos));
            assert!(!grid.is_open(pos));
            assert!(!grid.is_letter(pos));
        }
    }

    #[test]
    fn test_get() {
        let grid = small();
        assert_eq!(grid.get(Position::new(1, 1)).unwrap(), Some(Tile::at(1, 1, 'I')));
        assert_eq!(grid.get(Position::new(1, 0)).unwrap(), None);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = small();
        let err = grid.get(Position::new(3, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::OutOfBounds {
                x: 3,
                y: 1,
                width: 3,
                height: 2
            }
        );
        assert_eq!(grid.tile_at(Position::new(3, 1)), None);
    }

    #[test]
    fn test_remove() {
        let mut grid = small();
        let tile = Tile::at(2, 1, 'N');

        assert_eq!(grid.remove(&tile), Some(tile));
        assert!(grid.is_open(tile.position));
        assert_eq!(grid.tile_count(), 2);

        // Second removal finds nothing
        assert_eq!(grid.remove(&tile), None);
        assert_eq!(grid.remove(&Tile::at(9, 9, 'Z')), None);
    }

    #[test]
    fn test_tiles_row_major() {
        let grid = small();
        let tiles: Vec<_> = grid.tiles().collect();
        assert_eq!(
            tiles,
            vec![Tile::at(0, 0, 'V'), Tile::at(1, 1, 'I'), Tile::at(2, 1, 'N')]
        );
    }

    #[test]
    fn test_lower_case_layout() {
        let grid = Grid::from_rows(&["ab"]).unwrap();
        assert_eq!(grid.tile_at(Position::new(1, 0)).map(|t| t.letter), Some('B'));
    }

    #[test]
    fn test_invalid_layouts() {
        let empty: [&str; 0] = [];
        assert!(matches!(Grid::from_rows(&empty), Err(GameError::InvalidLayout(_))));
        assert!(matches!(Grid::from_rows(&[""]), Err(GameError::InvalidLayout(_))));
        assert!(matches!(
            Grid::from_rows(&["ABC", "AB"]),
            Err(GameError::InvalidLayout(msg)) if msg.contains("row 1")
        ));
        assert!(matches!(Grid::from_rows(&["A1"]), Err(GameError::InvalidLayout(_))));
    }
}
