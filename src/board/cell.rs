//! Board coordinates.
//!
//! A [`Cell`] is a plain `(row, col)` pair. It may point off the board;
//! use [`Cell::index`] or [`Cell::is_on_board`] before touching storage.
//!
//! ```
//! use focus_engine::board::Cell;
//!
//! let cell = Cell::new(2, 3);
//! assert_eq!(cell.index(), Some(15));
//! assert!(Cell::new(6, 0).index().is_none());
//! assert!(Cell::new(-1, 0).index().is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 6;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A board coordinate. Row 0 is the top row, column 0 the left column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Create a new cell. No bounds check is performed.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check whether both coordinates lie in `0..BOARD_SIZE`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0
            && self.col >= 0
            && (self.row as usize) < BOARD_SIZE
            && (self.col as usize) < BOARD_SIZE
    }

    /// Flat arena index `row * 6 + col`, or `None` if off the board.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * BOARD_SIZE + self.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Cell::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_SIZE) as i32,
            col: (index % BOARD_SIZE) as i32,
        }
    }

    /// True when exactly one of row or column differs.
    #[must_use]
    pub const fn is_orthogonal_to(self, other: Cell) -> bool {
        (self.row == other.row) != (self.col == other.col)
    }

    /// Grid distance `|drow| + |dcol|`.
    #[must_use]
    pub const fn distance_to(self, other: Cell) -> usize {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as usize
    }

    /// Iterate over every on-board cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell::from_index)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Cell::new(0, 0).is_on_board());
        assert!(Cell::new(5, 5).is_on_board());
        assert!(!Cell::new(6, 5).is_on_board());
        assert!(!Cell::new(5, 6).is_on_board());
        assert!(!Cell::new(-1, 2).is_on_board());
        assert!(!Cell::new(2, -1).is_on_board());
    }

    #[test]
    fn test_index_round_trip() {
        for (i, cell) in Cell::all().enumerate() {
            assert_eq!(cell.index(), Some(i));
            assert_eq!(Cell::from_index(i), cell);
        }
        assert_eq!(Cell::all().count(), CELL_COUNT);
    }

    #[test]
    fn test_orthogonal() {
        let origin = Cell::new(2, 2);
        assert!(origin.is_orthogonal_to(Cell::new(2, 4)));
        assert!(origin.is_orthogonal_to(Cell::new(0, 2)));
        assert!(!origin.is_orthogonal_to(Cell::new(3, 3)));
        assert!(!origin.is_orthogonal_to(origin));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Cell::new(0, 0).distance_to(Cell::new(0, 3)), 3);
        assert_eq!(Cell::new(4, 1).distance_to(Cell::new(1, 1)), 3);
        assert_eq!(Cell::new(1, 1).distance_to(Cell::new(2, 2)), 2);
    }

    #[test]
    fn test_from_tuple_and_display() {
        let cell: Cell = (3, 4).into();
        assert_eq!(cell, Cell::new(3, 4));
        assert_eq!(cell.to_string(), "(3, 4)");
    }
}
