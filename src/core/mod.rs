//! Core engine types: players, configuration, actions, errors, snapshots.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{DistanceRule, RulesConfig, DEFAULT_CAPTURE_GOAL, DEFAULT_MAX_STACK_HEIGHT};
pub use error::{GameError, GameResult, LocationFault, SetupError};
pub use player::{Player, PlayerId, PlayerMap, Players, PLAYER_COUNT};
pub use state::{GameSnapshot, PlayerSummary, TurnState};
