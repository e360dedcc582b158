//! Board representation: colors, coordinates and the grid of stacks.
//!
//! The board is a fixed 6x6 arena. Each cell holds an ordered stack of
//! pieces with the top piece last.

mod cell;
mod piece;
mod state;

pub use cell::{Cell, BOARD_SIZE, CELL_COUNT};
pub use piece::PieceColor;
pub use state::{BoardState, CellStack};
