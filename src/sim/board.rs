//! Board geometry
//!
//! A board is a fixed `width x height` cell grid. The outermost ring of
//! cells is the border; touching it is fatal, so the playable area is the
//! interior `(width - 2) x (height - 2)` rectangle.

use serde::{Deserialize, Serialize};

use super::state::Position;

/// Immutable board dimensions plus the border predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: u16,
    height: u16,
}

impl Board {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Center cell, where the initial snake head is placed.
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// True iff the cell lies on the outermost ring.
    #[inline]
    pub fn is_border(&self, pos: Position) -> bool {
        pos.x == 0 || pos.x == self.width - 1 || pos.y == 0 || pos.y == self.height - 1
    }
}
