//! Overflow resolution.
//!
//! When a stack grows past the height limit, its bottom pieces fall off.
//! Pieces of the mover's own color return to the mover's reserve; pieces
//! of the opponent's color count as the mover's captures. Who owns the
//! pieces at the bottom decides the split, not who caused the overflow.

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Cell, CellStack, PieceColor};

/// Pieces removed from one overflowing stack.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    /// The trimmed cell.
    pub cell: Cell,

    /// Evicted pieces, bottom first.
    pub evicted: CellStack,

    /// Evicted pieces of the mover's color, credited to their reserve.
    pub reserve_gain: u32,

    /// Evicted pieces of the opponent's color, credited as captures.
    pub captured_gain: u32,
}

/// Trims overflowing stacks back to the height limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureResolver {
    max_height: usize,
}

impl CaptureResolver {
    /// Create a resolver for the given height limit.
    #[must_use]
    pub const fn new(max_height: usize) -> Self {
        Self { max_height }
    }

    /// Trim `cell` if it exceeds the limit.
    ///
    /// Returns `None` and leaves the board alone when the stack fits.
    pub fn resolve(&self, board: &mut BoardState, cell: Cell, mover: PieceColor) -> Option<Capture> {
        let height = board.height(cell).ok()?;
        if height <= self.max_height {
            return None;
        }

        let evicted = board.truncate_bottom(cell, self.max_height);
        let own = evicted.iter().filter(|&&c| c == mover).count() as u32;
        let opponent = evicted.len() as u32 - own;

        Some(Capture {
            cell,
            evicted,
            reserve_gain: own,
            captured_gain: opponent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: PieceColor = PieceColor::Red;
    const G: PieceColor = PieceColor::Green;

    #[test]
    fn test_no_overflow() {
        let mut board = BoardState::empty();
        let cell = Cell::new(1, 1);
        board.set_stack(cell, &[R, G, R, G, R]).unwrap();

        let resolver = CaptureResolver::new(5);
        assert_eq!(resolver.resolve(&mut board, cell, R), None);
        assert_eq!(board.height(cell).unwrap(), 5);
    }

    #[test]
    fn test_opponent_pieces_are_captured() {
        let mut board = BoardState::empty();
        let cell = Cell::new(0, 1);
        board.set_stack(cell, &[G, G, G, G, G, R, R]).unwrap();

        let capture = CaptureResolver::new(5).resolve(&mut board, cell, R).unwrap();

        assert_eq!(capture.evicted.as_slice(), &[G, G]);
        assert_eq!(capture.captured_gain, 2);
        assert_eq!(capture.reserve_gain, 0);
        assert_eq!(board.stack_at(cell).unwrap(), &[G, G, G, R, R]);
    }

    #[test]
    fn test_own_pieces_return_to_reserve() {
        let mut board = BoardState::empty();
        let cell = Cell::new(4, 4);
        board.set_stack(cell, &[G, R, G, G, R, G]).unwrap();

        let capture = CaptureResolver::new(5).resolve(&mut board, cell, G).unwrap();

        assert_eq!(capture.evicted.as_slice(), &[G]);
        assert_eq!(capture.reserve_gain, 1);
        assert_eq!(capture.captured_gain, 0);
    }

    #[test]
    fn test_mixed_eviction() {
        let mut board = BoardState::empty();
        let cell = Cell::new(3, 0);
        board.set_stack(cell, &[R, G, R, G, G, G, G, G]).unwrap();

        let capture = CaptureResolver::new(5).resolve(&mut board, cell, G).unwrap();

        assert_eq!(capture.evicted.as_slice(), &[R, G, R]);
        assert_eq!(capture.reserve_gain, 1);
        assert_eq!(capture.captured_gain, 2);
        assert_eq!(board.height(cell).unwrap(), 5);
    }

    #[test]
    fn test_custom_limit() {
        let mut board = BoardState::empty();
        let cell = Cell::new(0, 0);
        board.set_stack(cell, &[R, G, G]).unwrap();

        let capture = CaptureResolver::new(2).resolve(&mut board, cell, G).unwrap();
        assert_eq!(capture.captured_gain, 1);
        assert_eq!(board.stack_at(cell).unwrap(), &[G, G]);
    }
}
