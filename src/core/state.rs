//! Turn state and read-only game snapshots.
//!
//! ## TurnState
//!
//! `NotStarted` until the first action completes, then
//! `AwaitingMove { last_mover }` naming whoever acted most recently.
//!
//! ## GameSnapshot
//!
//! An owned copy of everything a display layer needs: the board, each
//! player's reserve and captured counts, and the turn state. Snapshots
//! serialize with serde and compare with `==`.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::board::{BoardState, Cell, PieceColor};

/// Whose move was most recent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// No action has completed yet. Either player may open.
    #[default]
    NotStarted,
    /// The named player acted last and may not act again until the
    /// opponent does.
    AwaitingMove { last_mover: PlayerId },
}

impl TurnState {
    /// The player who acted last, if any.
    #[must_use]
    pub const fn last_mover(self) -> Option<PlayerId> {
        match self {
            TurnState::NotStarted => None,
            TurnState::AwaitingMove { last_mover } => Some(last_mover),
        }
    }
}

/// Public per-player information.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub color: PieceColor,
    pub reserve: u32,
    pub captured: u32,
}

/// Owned, read-only view of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// All 36 stacks.
    pub board: BoardState,

    /// Identity and scores per seat.
    pub players: PlayerMap<PlayerSummary>,

    /// Turn state at the time of the snapshot.
    pub turn: TurnState,

    /// Number of completed actions.
    pub ply: u32,
}

impl GameSnapshot {
    /// Stack on a cell, or an empty slice for off-board cells.
    #[must_use]
    pub fn stack(&self, cell: Cell) -> &[PieceColor] {
        self.board.stack_at(cell).unwrap_or(&[])
    }

    /// Name of the player who acted last.
    #[must_use]
    pub fn last_mover_name(&self) -> Option<&str> {
        self.turn
            .last_mover()
            .map(|p| self.players[p].name.as_str())
    }
}
