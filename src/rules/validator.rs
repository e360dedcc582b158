//! Legality checks for stack moves.
//!
//! Checks run in a fixed order and the first failure is reported:
//!
//! 1. both cells on the board
//! 2. source stack non-empty
//! 3. top piece is the mover's color
//! 4. `1 <= n <= height(source)`
//! 5. source and destination share exactly one axis
//! 6. distance travelled satisfies the [`DistanceRule`]

use crate::board::{BoardState, Cell, PieceColor};
use crate::core::config::DistanceRule;
use crate::core::error::{GameError, GameResult, LocationFault};

/// Pure legality checker for stack moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveValidator {
    distance_rule: DistanceRule,
}

impl MoveValidator {
    /// Create a validator with the given distance rule.
    #[must_use]
    pub const fn new(distance_rule: DistanceRule) -> Self {
        Self { distance_rule }
    }

    /// Check a move of `n` pieces by the player controlling `mover`.
    ///
    /// Never mutates the board; identical inputs give identical results.
    pub fn validate(
        &self,
        board: &BoardState,
        mover: PieceColor,
        source: Cell,
        destination: Cell,
        n: usize,
    ) -> GameResult<()> {
        if !source.is_on_board() {
            return Err(GameError::InvalidLocation(LocationFault::SourceOffBoard(source)));
        }
        if !destination.is_on_board() {
            return Err(GameError::InvalidLocation(LocationFault::DestinationOffBoard(
                destination,
            )));
        }

        let stack = board.stack_at(source)?;
        let Some(&top) = stack.last() else {
            return Err(GameError::InvalidPieceCount {
                requested: n,
                available: 0,
            });
        };

        if top != mover {
            return Err(GameError::InvalidLocation(LocationFault::NotOwner { top }));
        }

        if n == 0 || n > stack.len() {
            return Err(GameError::InvalidPieceCount {
                requested: n,
                available: stack.len(),
            });
        }

        if !source.is_orthogonal_to(destination) {
            return Err(GameError::InvalidLocation(LocationFault::NotOrthogonal));
        }

        let distance = source.distance_to(destination);
        if !self.distance_rule.allows(distance, n) {
            return Err(GameError::InvalidLocation(LocationFault::DistanceMismatch {
                distance,
                count: n,
            }));
        }

        Ok(())
    }
}
