//! Error types for engine operations.
//!
//! Every rejected operation reports exactly one [`GameError`] and leaves
//! the game untouched. Construction problems are reported separately as
//! [`SetupError`].

use thiserror::Error;

use crate::board::{Cell, PieceColor};

/// Why a move was rejected with [`GameError::InvalidLocation`].
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationFault {
    /// Source cell lies outside the board.
    #[error("source {0} is off the board")]
    SourceOffBoard(Cell),

    /// Destination cell lies outside the board.
    #[error("destination {0} is off the board")]
    DestinationOffBoard(Cell),

    /// The top piece of the source stack belongs to the other player.
    #[error("top piece is {top}, not the mover's color")]
    NotOwner { top: PieceColor },

    /// Source and destination do not share exactly one axis.
    #[error("move is not orthogonal")]
    NotOrthogonal,

    /// Distance travelled does not match the number of pieces moved.
    #[error("moved {distance} cells with {count} pieces")]
    DistanceMismatch { distance: usize, count: usize },
}

/// Errors returned by [`GameEngine`](crate::rules::GameEngine) operations.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The player moved last and must wait for the opponent.
    #[error("not {player}'s turn")]
    NotYourTurn { player: String },

    /// The name matches neither registered player.
    #[error("unknown player: {name}")]
    UnknownPlayer { name: String },

    /// A queried cell lies outside the 6x6 board.
    #[error("cell {cell} is out of bounds")]
    OutOfBounds { cell: Cell },

    /// Wrong color on top, off-board cell, diagonal or mis-sized move.
    #[error("invalid location: {0}")]
    InvalidLocation(LocationFault),

    /// Empty source stack or piece count outside `1..=height`.
    #[error("invalid number of pieces: requested {requested}, stack holds {available}")]
    InvalidPieceCount { requested: usize, available: usize },

    /// Reserve placement attempted with nothing in reserve.
    #[error("{player} has no pieces in reserve")]
    EmptyReserve { player: String },
}

/// Errors raised while constructing a game.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// Both identities share a name.
    #[error("players must have distinct names, both are {0:?}")]
    DuplicateName(String),

    /// Both identities share a color.
    #[error("players must have distinct colors, both are {0}")]
    DuplicateColor(PieceColor),

    /// A custom starting board holds a stack above the height limit.
    #[error("stack at {cell} has height {height}, limit is {limit}")]
    StackTooTall { cell: Cell, height: usize, limit: usize },
}

/// Result type alias for engine operations.
pub type GameResult<T> = Result<T, GameError>;
