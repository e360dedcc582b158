//! Game rules: legality, capture, turn order, and the `GameEngine` facade.
//!
//! The engine calls into the smaller pieces in a fixed order:
//! name lookup and turn check, validation, board mutation, capture
//! resolution, then turn and history bookkeeping.

mod builder;
mod capture;
mod engine;
mod turn;
mod validator;

pub use builder::GameBuilder;
pub use capture::{Capture, CaptureResolver};
pub use engine::GameEngine;
pub use turn::TurnController;
pub use validator::MoveValidator;
