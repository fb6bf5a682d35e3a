//! Collision detection
//!
//! A pure check of the head position against the body, the border ring, and
//! the obstacle field. It runs once per tick, after the head move, and its
//! outcome is the only thing that drives the `Running -> GameOver`
//! transition.

use super::board::Board;
use super::state::{GameOverReason, ObstacleField, SnakeBody};

/// What the head landed on this tick. First match wins, in the order the
/// checks are listed in [`check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing hit
    Miss,
    FatalBorder,
    FatalSelf,
    FatalBadObstacle,
    /// Non-fatal: triggers the obstacle field reset and a growth bonus
    GoodObstacleHit,
}

impl Outcome {
    /// Termination reason, if this outcome ends the run.
    pub fn fatal_reason(&self) -> Option<GameOverReason> {
        match self {
            Outcome::FatalBorder => Some(GameOverReason::Border),
            Outcome::FatalSelf => Some(GameOverReason::SelfCollision),
            Outcome::FatalBadObstacle => Some(GameOverReason::BadObstacle),
            Outcome::Miss | Outcome::GoodObstacleHit => None,
        }
    }
}

/// Evaluate the head against everything it can collide with.
///
/// Precedence: self-overlap, then border contact, then bad obstacles, then
/// good obstacles. Overlapping entries across the two obstacle sets resolve
/// in favour of the bad one.
pub fn check(body: &SnakeBody, board: &Board, obstacles: &ObstacleField) -> Outcome {
    let head = body.head();

    if body.segments()[1..].contains(&head) {
        return Outcome::FatalSelf;
    }

    if board.is_border(head) {
        return Outcome::FatalBorder;
    }

    if obstacles.bad().contains(&head) {
        return Outcome::FatalBadObstacle;
    }

    if obstacles.good().contains(&head) {
        return Outcome::GoodObstacleHit;
    }

    Outcome::Miss
}
