//! Turn alternation.

use crate::core::player::PlayerId;
use crate::core::state::TurnState;

/// Tracks who acted last. A player may never act twice in a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnController {
    state: TurnState,
}

impl TurnController {
    /// Start in `NotStarted`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `candidate` may act now.
    #[must_use]
    pub fn may_move(&self, candidate: PlayerId) -> bool {
        match self.state {
            TurnState::NotStarted => true,
            TurnState::AwaitingMove { last_mover } => candidate != last_mover,
        }
    }

    /// Note that `player` just completed an action.
    pub fn record_move(&mut self, player: PlayerId) {
        self.state = TurnState::AwaitingMove { last_mover: player };
    }

    /// Current turn state.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }
}
