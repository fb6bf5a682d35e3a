//! Grid Snake - a discrete-time snake simulation on a bounded grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board, snake body, obstacles, collision, tick)
//! - `config`: Runtime simulation configuration
//! - `term`: Crossterm-based terminal front end used by the binary
//!
//! The simulation is driven entirely by the host: it feeds timestamps into
//! [`sim::advance`] and reads back a [`sim::Snapshot`] for rendering. No
//! wall-clock reads happen inside `sim`, which keeps every tick reproducible
//! under test.

pub mod config;
pub mod sim;
pub mod term;

pub use config::{ConfigError, SimConfig};
pub use sim::{Direction, GameOverReason, GamePhase, GameState, Snapshot, advance};
