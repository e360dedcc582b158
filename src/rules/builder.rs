//! Game construction.

use crate::board::BoardState;
use crate::core::config::RulesConfig;
use crate::core::error::SetupError;
use crate::core::player::{Player, Players};

use super::engine::GameEngine;

/// Builder for creating a `GameEngine`.
///
/// Defaults to the standard rules and the opening layout. A custom board
/// is useful for puzzles and tests.
///
/// ```
/// use focus_engine::board::{BoardState, Cell, PieceColor::{Green, Red}};
/// use focus_engine::core::RulesConfig;
/// use focus_engine::rules::GameBuilder;
///
/// let mut board = BoardState::empty();
/// board.set_stack(Cell::new(2, 2), &[Green, Red]).unwrap();
///
/// let game = GameBuilder::new(("Ann", Red), ("Bo", Green))
///     .config(RulesConfig::default().with_capture_goal(3))
///     .board(board)
///     .build()
///     .unwrap();
/// assert_eq!(game.height((2, 2)), Ok(2));
/// ```
pub struct GameBuilder {
    first: Player,
    second: Player,
    config: RulesConfig,
    board: BoardState,
}

impl GameBuilder {
    pub fn new(first: impl Into<Player>, second: impl Into<Player>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            config: RulesConfig::default(),
            board: BoardState::initial(),
        }
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    pub fn board(mut self, board: BoardState) -> Self {
        self.board = board;
        self
    }

    /// Build the game.
    ///
    /// Fails if the players share a name or color, or if the starting
    /// board has a stack above the configured height limit.
    pub fn build(self) -> Result<GameEngine, SetupError> {
        let players = Players::new(self.first, self.second)?;

        let limit = self.config.max_stack_height;
        if let Some((cell, stack)) = self.board.cells().find(|(_, s)| s.len() > limit) {
            return Err(SetupError::StackTooTall {
                cell,
                height: stack.len(),
                limit,
            });
        }

        Ok(GameEngine::from_parts(self.config, players, self.board))
    }
}
