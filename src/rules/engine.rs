//! The game facade.
//!
//! `GameEngine` owns the board, the bank, the turn controller and the
//! history, and exposes the two turn operations:
//! - [`GameEngine::move_piece`]: move the top `n` pieces of a stack
//! - [`GameEngine::reserved_move`]: place one piece from reserve
//!
//! Every check runs before the first mutation, so a rejected call leaves
//! the game exactly as it was.

use im::Vector;
use tracing::{debug, info, trace};

use super::builder::GameBuilder;
use super::capture::{Capture, CaptureResolver};
use super::turn::TurnController;
use super::validator::MoveValidator;
use crate::bank::{Counter, ReserveBank};
use crate::board::{BoardState, Cell, PieceColor};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::RulesConfig;
use crate::core::error::{GameError, GameResult, LocationFault, SetupError};
use crate::core::player::{Player, PlayerId, PlayerMap, Players};
use crate::core::state::{GameSnapshot, PlayerSummary, TurnState};

/// One game between two named, colored players.
///
/// ```
/// use focus_engine::board::PieceColor::{Green, Red};
/// use focus_engine::rules::GameEngine;
///
/// let mut game = GameEngine::new(("PlayerA", Red), ("PlayerB", Green)).unwrap();
///
/// game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
/// assert_eq!(game.stack_at((0, 1)).unwrap(), &[Red, Red]);
/// assert!(game.move_piece("PlayerA", (0, 1), (0, 3), 2).is_err());
/// assert_eq!(game.captured_of("PlayerA"), Ok(0));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: RulesConfig,
    players: Players,
    board: BoardState,
    bank: ReserveBank,
    turns: TurnController,
    validator: MoveValidator,
    resolver: CaptureResolver,
    history: Vector<ActionRecord>,
}

impl GameEngine {
    /// Start a standard game from the opening layout.
    pub fn new(first: impl Into<Player>, second: impl Into<Player>) -> Result<Self, SetupError> {
        GameBuilder::new(first, second).build()
    }

    /// Assemble an engine from already-validated parts.
    pub(crate) fn from_parts(config: RulesConfig, players: Players, board: BoardState) -> Self {
        let bank = ReserveBank::new(&players);
        Self {
            validator: MoveValidator::new(config.distance_rule),
            resolver: CaptureResolver::new(config.max_stack_height),
            config,
            players,
            board,
            bank,
            turns: TurnController::new(),
            history: Vector::new(),
        }
    }

    // === Turn Operations ===

    /// Move the top `count` pieces from `source` to `destination`.
    ///
    /// Fails with `UnknownPlayer`, `NotYourTurn`, or the first validation
    /// failure, in that order. On success the destination is trimmed if it
    /// overflowed and the turn passes.
    pub fn move_piece(
        &mut self,
        name: &str,
        source: impl Into<Cell>,
        destination: impl Into<Cell>,
        count: usize,
    ) -> GameResult<ActionRecord> {
        let (source, destination) = (source.into(), destination.into());
        let player = self.acting_player(name)?;
        let color = self.players.get(player).color;

        self.validator
            .validate(&self.board, color, source, destination, count)
            .inspect_err(|err| trace!(player = name, %source, %destination, count, %err, "move rejected"))?;

        self.board.merge_top(source, destination, count);
        debug!(player = name, %source, %destination, count, "stack moved");

        let capture = self.settle(player, destination)?;
        Ok(self.finish(player, Action::Stack { source, destination, count }, capture))
    }

    /// Place one piece from the player's reserve on `destination`.
    ///
    /// Fails with `UnknownPlayer`, `NotYourTurn`, `EmptyReserve`, then
    /// `InvalidLocation` for an off-board destination.
    pub fn reserved_move(&mut self, name: &str, destination: impl Into<Cell>) -> GameResult<ActionRecord> {
        let destination = destination.into();
        let player = self.acting_player(name)?;

        if self.bank.reserve_of(name)? == 0 {
            trace!(player = name, "reserve placement rejected: empty reserve");
            return Err(GameError::EmptyReserve { player: name.to_string() });
        }
        if !destination.is_on_board() {
            trace!(player = name, %destination, "reserve placement rejected: off board");
            return Err(GameError::InvalidLocation(LocationFault::DestinationOffBoard(destination)));
        }

        let color = self.players.get(player).color;
        self.board.append_single(destination, color);
        self.bank.debit_reserve(name)?;
        debug!(player = name, %destination, "reserve piece placed");

        let capture = self.settle(player, destination)?;
        Ok(self.finish(player, Action::Reserve { destination }, capture))
    }

    /// Resolve `name` and check that they may act now.
    fn acting_player(&self, name: &str) -> GameResult<PlayerId> {
        let player = self
            .players
            .id_of(name)
            .ok_or_else(|| GameError::UnknownPlayer { name: name.to_string() })?;

        if !self.turns.may_move(player) {
            trace!(player = name, "rejected: not this player's turn");
            return Err(GameError::NotYourTurn { player: name.to_string() });
        }
        Ok(player)
    }

    /// Trim an overflowing destination and credit the mover.
    fn settle(&mut self, player: PlayerId, cell: Cell) -> GameResult<Option<Capture>> {
        let mover = self.players.get(player);
        let Some(capture) = self.resolver.resolve(&mut self.board, cell, mover.color) else {
            return Ok(None);
        };

        self.bank.credit(Counter::Reserve, &mover.name, capture.reserve_gain)?;
        self.bank.credit(Counter::Captured, &mover.name, capture.captured_gain)?;
        debug!(
            player = %mover.name,
            %cell,
            reserve_gain = capture.reserve_gain,
            captured_gain = capture.captured_gain,
            "stack overflow trimmed"
        );

        let captured = self.bank.account(player).captured;
        if capture.captured_gain > 0 && captured >= self.config.capture_goal {
            info!(player = %mover.name, captured, "capture goal reached");
        }
        Ok(Some(capture))
    }

    /// Pass the turn and append the history record.
    fn finish(&mut self, player: PlayerId, action: Action, capture: Option<Capture>) -> ActionRecord {
        self.turns.record_move(player);
        let record = ActionRecord::new(player, action, self.history.len() as u32 + 1, capture);
        self.history.push_back(record.clone());
        record
    }

    // === Queries ===

    /// Stack on a cell, bottom first.
    pub fn stack_at(&self, cell: impl Into<Cell>) -> GameResult<&[PieceColor]> {
        self.board.stack_at(cell.into())
    }

    /// Number of pieces on a cell.
    pub fn height(&self, cell: impl Into<Cell>) -> GameResult<usize> {
        self.board.height(cell.into())
    }

    /// Pieces in a player's reserve.
    pub fn reserve_of(&self, name: &str) -> GameResult<u32> {
        self.bank.reserve_of(name)
    }

    /// Opponent pieces a player has captured.
    pub fn captured_of(&self, name: &str) -> GameResult<u32> {
        self.bank.captured_of(name)
    }

    /// Check whether a player has reached the capture goal.
    pub fn has_won(&self, name: &str) -> GameResult<bool> {
        Ok(self.captured_of(name)? >= self.config.capture_goal)
    }

    /// The player who has reached the capture goal, if any.
    ///
    /// The engine keeps accepting moves after this; ending the game is up
    /// to the caller.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.players
            .iter()
            .find(|(id, _)| self.bank.account(*id).captured >= self.config.capture_goal)
            .map(|(_, player)| player)
    }

    /// Pieces of `color` on the board, in its owner's reserve, and in the
    /// opponent's captured pile. Constant for the whole game.
    #[must_use]
    pub fn color_total(&self, color: PieceColor) -> usize {
        let owner = self.players.id_of_color(color);
        let reserve = self.bank.account(owner).reserve;
        let captured = self.bank.account(owner.opponent()).captured;
        self.board.count(color) + reserve as usize + captured as usize
    }

    /// Current turn state.
    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turns.state()
    }

    /// Name of the player who acted last.
    #[must_use]
    pub fn last_mover(&self) -> Option<&str> {
        self.turns
            .state()
            .last_mover()
            .map(|p| self.players.get(p).name.as_str())
    }

    /// Completed actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The registered players.
    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The rules in force.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Owned copy of board, scores and turn state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            players: PlayerMap::new(|p| {
                let player = self.players.get(p);
                let account = self.bank.account(p);
                PlayerSummary {
                    name: player.name.clone(),
                    color: player.color,
                    reserve: account.reserve,
                    captured: account.captured,
                }
            }),
            turn: self.turns.state(),
            ply: self.history.len() as u32,
        }
    }
}
