//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is an input: the host passes timestamps into [`advance`]
//! - No rendering or platform dependencies
//! - A single owner drives the state; there is no internal synchronization

pub mod board;
pub mod collision;
pub mod state;
pub mod tick;

pub use board::Board;
pub use collision::{Outcome, check};
pub use state::{
    Direction, GameOverReason, GamePhase, GameState, ObstacleField, Position, SnakeBody, Snapshot,
};
pub use tick::advance;
