//! Action representation and history records.
//!
//! A player's turn is one of two actions:
//! - move the top `count` pieces of a stack they control, or
//! - place one piece from their reserve.
//!
//! Completed actions are kept as [`ActionRecord`]s in the engine history.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::Cell;
use crate::rules::Capture;

/// A single turn's action.
///
/// ```
/// use focus_engine::board::Cell;
/// use focus_engine::core::Action;
///
/// let slide = Action::stack((0, 0), (0, 1), 1);
/// assert_eq!(slide.destination(), Cell::new(0, 1));
///
/// let drop = Action::reserve((3, 3));
/// assert!(drop.is_reserve());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the top `count` pieces from `source` to `destination`.
    Stack {
        source: Cell,
        destination: Cell,
        count: usize,
    },
    /// Place one reserve piece on `destination`.
    Reserve { destination: Cell },
}

impl Action {
    /// Create a stack move.
    #[must_use]
    pub fn stack(source: impl Into<Cell>, destination: impl Into<Cell>, count: usize) -> Self {
        Action::Stack {
            source: source.into(),
            destination: destination.into(),
            count,
        }
    }

    /// Create a reserve placement.
    #[must_use]
    pub fn reserve(destination: impl Into<Cell>) -> Self {
        Action::Reserve {
            destination: destination.into(),
        }
    }

    /// The cell that receives pieces.
    #[must_use]
    pub const fn destination(&self) -> Cell {
        match *self {
            Action::Stack { destination, .. } | Action::Reserve { destination } => destination,
        }
    }

    /// Check if this is a reserve placement.
    #[must_use]
    pub const fn is_reserve(&self) -> bool {
        matches!(self, Action::Reserve { .. })
    }
}

/// A completed action with its consequences, for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// 1-based count of completed actions in the game.
    pub ply: u32,

    /// Pieces trimmed from the destination, if it overflowed.
    pub capture: Option<Capture>,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, ply: u32, capture: Option<Capture>) -> Self {
        Self {
            player,
            action,
            ply,
            capture,
        }
    }
}
