//! The 6x6 grid of piece stacks.
//!
//! `BoardState` is pure data plus stack primitives. It knows nothing about
//! players, turns or scoring; legality is checked elsewhere before any of
//! the mutating methods are called.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, BOARD_SIZE, CELL_COUNT};
use super::piece::PieceColor;
use crate::core::error::{GameError, GameResult};

/// Pieces on one cell, bottom first. The last element is the top piece.
///
/// Inline capacity covers a full stack plus a merged-in overflow before
/// capture trims it back down.
pub type CellStack = SmallVec<[PieceColor; 8]>;

const R: PieceColor = PieceColor::Red;
const G: PieceColor = PieceColor::Green;

/// Row pattern for even rows.
const EVEN_ROW: [PieceColor; BOARD_SIZE] = [R, R, G, G, R, R];
/// Row pattern for odd rows.
const ODD_ROW: [PieceColor; BOARD_SIZE] = [G, G, R, R, G, G];

/// Flat arena of 36 stacks indexed `row * 6 + col`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    stacks: Vec<CellStack>,
}

impl BoardState {
    /// A board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            stacks: vec![CellStack::new(); CELL_COUNT],
        }
    }

    /// The fixed opening layout: single-piece stacks alternating
    /// `R R G G R R` and `G G R R G G` by row.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for cell in Cell::all() {
            let pattern = if cell.row % 2 == 0 { &EVEN_ROW } else { &ODD_ROW };
            board.stacks[cell_index(cell)].push(pattern[cell.col as usize]);
        }
        board
    }

    /// Read-only view of a stack, bottom first.
    pub fn stack_at(&self, cell: Cell) -> GameResult<&[PieceColor]> {
        cell.index()
            .map(|i| self.stacks[i].as_slice())
            .ok_or(GameError::OutOfBounds { cell })
    }

    /// Number of pieces on a cell.
    pub fn height(&self, cell: Cell) -> GameResult<usize> {
        self.stack_at(cell).map(<[PieceColor]>::len)
    }

    /// Top piece of a cell, if any.
    pub fn top(&self, cell: Cell) -> GameResult<Option<PieceColor>> {
        self.stack_at(cell).map(|s| s.last().copied())
    }

    /// Move the top `n` pieces of `source` onto `destination`, keeping
    /// their relative order.
    ///
    /// # Panics
    ///
    /// Panics if either cell is off the board, the cells are equal, or
    /// `n` is not in `1..=height(source)`.
    pub fn merge_top(&mut self, source: Cell, destination: Cell, n: usize) {
        let from = cell_index(source);
        let to = cell_index(destination);
        assert_ne!(from, to, "cannot merge a stack onto itself");
        let height = self.stacks[from].len();
        assert!(
            n >= 1 && n <= height,
            "merge of {n} pieces from a stack of {height}"
        );

        let moved: CellStack = self.stacks[from].drain(height - n..).collect();
        self.stacks[to].extend(moved);
    }

    /// Put a single piece on top of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is off the board.
    pub fn append_single(&mut self, cell: Cell, color: PieceColor) {
        self.stacks[cell_index(cell)].push(color);
    }

    /// Remove and return the bottom `height - keep` pieces, bottom first.
    ///
    /// Returns an empty stack when the cell already holds `keep` pieces
    /// or fewer.
    ///
    /// # Panics
    ///
    /// Panics if the cell is off the board.
    pub fn truncate_bottom(&mut self, cell: Cell, keep: usize) -> CellStack {
        let stack = &mut self.stacks[cell_index(cell)];
        let excess = stack.len().saturating_sub(keep);
        stack.drain(..excess).collect()
    }

    /// Replace the stack on a cell. Used to set up custom positions.
    pub fn set_stack(&mut self, cell: Cell, pieces: &[PieceColor]) -> GameResult<()> {
        let index = cell.index().ok_or(GameError::OutOfBounds { cell })?;
        self.stacks[index] = CellStack::from_slice(pieces);
        Ok(())
    }

    /// Iterate over `(cell, stack)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, &[PieceColor])> {
        self.stacks
            .iter()
            .enumerate()
            .map(|(i, s)| (Cell::from_index(i), s.as_slice()))
    }

    /// Number of pieces of `color` anywhere on the board.
    #[must_use]
    pub fn count(&self, color: PieceColor) -> usize {
        self.stacks
            .iter()
            .flatten()
            .filter(|&&c| c == color)
            .count()
    }

    /// Height of the tallest stack.
    #[must_use]
    pub fn max_height(&self) -> usize {
        self.stacks.iter().map(SmallVec::len).max().unwrap_or(0)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

fn cell_index(cell: Cell) -> usize {
    match cell.index() {
        Some(i) => i,
        None => panic!("cell {cell} is off the board"),
    }
}
