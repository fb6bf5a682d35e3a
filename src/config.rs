//! Simulation configuration
//!
//! The original build baked board dimensions into compile-time parameters;
//! here they are runtime values so tests can vary board size per case.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of the freshly spawned snake (head plus four trailing segments).
pub const INITIAL_SNAKE_LEN: u16 = 5;

/// Runtime parameters for one simulation instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Board width in cells
    pub width: u16,
    /// Board height in cells
    pub height: u16,
    /// Milliseconds that must elapse between logical ticks
    pub tick_interval_ms: u64,
    /// A segment is appended every this many ticks
    pub growth_interval: u64,
    /// An obstacle is spawned every this many ticks
    pub spawn_interval: u64,
    /// Segments gained when a good obstacle is consumed
    pub good_growth_bonus: u16,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            tick_interval_ms: 50,
            growth_interval: 10,
            spawn_interval: 30,
            good_growth_bonus: 5,
        }
    }
}

impl SimConfig {
    /// Check that a simulation can actually start with these parameters.
    ///
    /// The initial snake is a vertical line of [`INITIAL_SNAKE_LEN`] cells
    /// with the head at the board center, and every cell of it must sit
    /// strictly inside the border ring. A board that cannot hold it is a
    /// construction-time error, never a deferred `GameOver`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let center_x = self.width / 2;
        let center_y = self.height / 2;
        let tail_y = center_y + (INITIAL_SNAKE_LEN - 1);

        let fits_x = center_x >= 1 && center_x + 1 < self.width;
        let fits_y = center_y >= 1 && tail_y + 1 < self.height;
        if !fits_x || !fits_y {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        if self.growth_interval == 0 || self.spawn_interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(())
    }
}

/// Rejected configuration, reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The board cannot hold the initial snake inside its border ring
    BoardTooSmall { width: u16, height: u16 },
    /// Growth/spawn cadences must be at least one tick
    ZeroInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooSmall { width, height } => write!(
                f,
                "board {width}x{height} cannot hold the initial {INITIAL_SNAKE_LEN}-segment snake"
            ),
            ConfigError::ZeroInterval => {
                write!(f, "growth and spawn intervals must be at least 1 tick")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
