//! # focus-engine
//!
//! Rule engine for Focus (also sold as Domination), a two-player stacking
//! game on a 6x6 board.
//!
//! ## Rules in brief
//!
//! - Each player controls one color and may move any stack whose top piece
//!   is theirs.
//! - Moving `n` pieces off the top of a stack carries them exactly `n`
//!   cells along a row or column.
//! - A stack taller than five pieces loses its bottom pieces. The mover
//!   keeps their own color in reserve and captures the opponent's.
//! - A reserve piece can be dropped on any cell instead of moving.
//! - Six captures win.
//!
//! ## Design Principles
//!
//! 1. **Atomic operations**: every check runs before the first mutation,
//!    so a rejected call never changes the game.
//! 2. **Closed errors**: failures are a `GameError` variant, never a string.
//! 3. **Flat board**: 36 stacks in an arena indexed `row * 6 + col`.
//!
//! ## Modules
//!
//! - `board`: colors, coordinates and the grid of stacks
//! - `bank`: reserve and captured counts
//! - `core`: players, configuration, actions, errors, snapshots
//! - `rules`: validation, capture, turn order, and the `GameEngine` facade
//!
//! ## Example
//!
//! ```
//! use focus_engine::{GameEngine, GameError, PieceColor};
//!
//! let mut game = GameEngine::new(("PlayerA", PieceColor::Red), ("PlayerB", PieceColor::Green))?;
//!
//! game.move_piece("PlayerA", (0, 0), (0, 1), 1)?;
//! game.move_piece("PlayerB", (0, 2), (0, 1), 1)?;
//!
//! assert_eq!(
//!     game.stack_at((0, 1))?,
//!     &[PieceColor::Red, PieceColor::Red, PieceColor::Green]
//! );
//! assert!(matches!(
//!     game.move_piece("PlayerB", (1, 0), (2, 0), 1),
//!     Err(GameError::NotYourTurn { .. })
//! ));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bank;
pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::bank::{Counter, ReserveBank};

pub use crate::board::{BoardState, Cell, CellStack, PieceColor, BOARD_SIZE, CELL_COUNT};

pub use crate::core::{
    Action, ActionRecord,
    DistanceRule, RulesConfig,
    GameError, GameResult, LocationFault, SetupError,
    Player, PlayerId, PlayerMap, Players,
    GameSnapshot, PlayerSummary, TurnState,
};

pub use crate::rules::{
    Capture, CaptureResolver, GameBuilder, GameEngine, MoveValidator, TurnController,
};
