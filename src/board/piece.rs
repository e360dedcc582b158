//! Piece colors.

use serde::{Deserialize, Serialize};

/// The color of a single piece. Each player owns exactly one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    Red,
    Green,
}

impl PieceColor {
    /// Both colors, in a fixed order.
    pub const ALL: [PieceColor; 2] = [PieceColor::Red, PieceColor::Green];

    /// The other color.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::Red => PieceColor::Green,
            PieceColor::Green => PieceColor::Red,
        }
    }

    /// Single-letter code used in layouts and messages.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            PieceColor::Red => 'R',
            PieceColor::Green => 'G',
        }
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
