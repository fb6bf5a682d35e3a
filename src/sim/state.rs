//! Game state and core simulation types
//!
//! Everything the simulation owns lives here: the snake body, the obstacle
//! field, the current heading, and the run phase. Hosts never mutate these
//! directly; they call [`set_direction`](GameState::set_direction), drive
//! [`advance`](crate::sim::advance), and read back a [`Snapshot`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::config::{ConfigError, INITIAL_SNAKE_LEN, SimConfig};

/// One grid cell, `(x, y)` with `x` in `[0, width)` and `y` in `[0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    ///
    /// Coordinates are not clamped; a step off the board is caught by the
    /// collision check that follows every head move (the head can never
    /// start a tick on the border while the game is running, so the offset
    /// cannot carry a coordinate past the ring).
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position::new((self.x as i32 + dx) as u16, (self.y as i32 + dy) as u16)
    }
}

/// Cardinal heading of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Unit offset in grid coordinates; north is negative y.
    #[inline]
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    Border,
    SelfCollision,
    BadObstacle,
}

impl GameOverReason {
    pub fn describe(&self) -> &'static str {
        match self {
            GameOverReason::Border => "hit the wall",
            GameOverReason::SelfCollision => "ran into itself",
            GameOverReason::BadObstacle => "hit an obstacle",
        }
    }
}

/// Run phase. `GameOver` is terminal; once entered, `advance` is a no-op
/// and the only way back is constructing a fresh simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    GameOver(GameOverReason),
}

/// Ordered snake segments, head at index 0, tail last.
///
/// The body never shrinks and holds at least one segment while the game is
/// running. Segments may momentarily coincide: growth appends duplicates of
/// the tail, which fan out on subsequent shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeBody {
    segments: Vec<Position>,
}

impl SnakeBody {
    /// Canonical starting shape: a vertical line with the head at the board
    /// center and the rest trailing in +y.
    pub fn initial(board: &Board) -> Self {
        let head = board.center();
        let segments = (0..INITIAL_SNAKE_LEN)
            .map(|i| Position::new(head.x, head.y + i))
            .collect();
        Self { segments }
    }

    #[inline]
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every segment except the head adopts its predecessor's pre-tick
    /// position. Walking tail-to-head makes the update simultaneous: each
    /// cell read is still a pre-tick value.
    ///
    /// Must run before the head move; that ordering is what keeps the tail
    /// trailing one step behind.
    pub(crate) fn shift_follow(&mut self) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
    }

    /// Move the head one cell in `direction`. The rest of the body is
    /// untouched; `shift_follow` has already made room.
    pub(crate) fn move_head(&mut self, direction: Direction) {
        self.segments[0] = self.segments[0].step(direction);
    }

    /// Grow by duplicating the tail `count` times.
    pub(crate) fn append(&mut self, count: u16) {
        if let Some(&tail) = self.segments.last() {
            for _ in 0..count {
                self.segments.push(tail);
            }
        }
    }
}

/// Two independent sets of timed-spawned hazards.
///
/// Spawning performs no occupancy checks: an obstacle may land on the snake
/// body, on the border, or on another obstacle. That mirrors the spawner's
/// seed-derived placement, which only depends on the tick timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleField {
    good: HashSet<Position>,
    bad: HashSet<Position>,
}

impl ObstacleField {
    pub fn good(&self) -> &HashSet<Position> {
        &self.good
    }

    pub fn bad(&self) -> &HashSet<Position> {
        &self.bad
    }

    /// Derive a candidate cell from the tick timestamp and classify it:
    /// seeds divisible by 3 spawn a good obstacle, everything else a bad one.
    pub(crate) fn spawn(&mut self, seed: u64, board: &Board) {
        let pos = Position::new(
            (seed % u64::from(board.width())) as u16,
            (seed % u64::from(board.height())) as u16,
        );

        if seed % 3 == 0 {
            log::debug!("good obstacle spawned at ({}, {})", pos.x, pos.y);
            self.good.insert(pos);
        } else {
            log::debug!("bad obstacle spawned at ({}, {})", pos.x, pos.y);
            self.bad.insert(pos);
        }
    }

    /// Consume reaction: wipe both sets, then immediately spawn one fresh
    /// obstacle from the same tick seed.
    pub(crate) fn reset_and_spawn(&mut self, seed: u64, board: &Board) {
        self.good.clear();
        self.bad.clear();
        self.spawn(seed, board);
    }
}

/// Read-only view of the simulation for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Body segments, head first
    pub body: Vec<Position>,
    pub good_obstacles: HashSet<Position>,
    pub bad_obstacles: HashSet<Position>,
    pub phase: GamePhase,
}

/// Complete simulation state for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: SimConfig,
    pub(crate) board: Board,
    pub(crate) body: SnakeBody,
    pub(crate) direction: Direction,
    pub(crate) obstacles: ObstacleField,
    pub(crate) phase: GamePhase,
    /// Timestamp of the most recent logical tick
    pub(crate) last_tick_ms: u64,
    /// Logical ticks fired so far
    pub(crate) tick_count: u64,
}

impl GameState {
    /// Build the initial state: centered snake heading north, empty obstacle
    /// field, phase `Running`. Rejects boards the initial snake cannot fit.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = Board::new(config.width, config.height);
        let body = SnakeBody::initial(&board);

        log::info!(
            "simulation started: {}x{} board, {}ms tick",
            config.width,
            config.height,
            config.tick_interval_ms
        );

        Ok(Self {
            config,
            board,
            body,
            direction: Direction::North,
            obstacles: ObstacleField::default(),
            phase: GamePhase::Running,
            last_tick_ms: 0,
            tick_count: 0,
        })
    }

    /// Overwrite the heading; last write before a tick wins. Reversing onto
    /// the neck is allowed and will be fatal on the next tick.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Copy out everything a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.body.segments().to_vec(),
            good_obstacles: self.obstacles.good().clone(),
            bad_obstacles: self.obstacles.bad().clone(),
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_board() -> Board {
        Board::new(20, 20)
    }

    #[test]
    fn test_initial_body_shape() {
        let body = SnakeBody::initial(&test_board());
        let expected: Vec<Position> = (10..15).map(|y| Position::new(10, y)).collect();
        assert_eq!(body.segments(), expected.as_slice());
        assert_eq!(body.head(), Position::new(10, 10));
    }

    #[test]
    fn test_shift_follow_then_move_head() {
        let mut body = SnakeBody::initial(&test_board());
        let before = body.segments().to_vec();

        body.shift_follow();
        body.move_head(Direction::East);

        // Every segment adopted its predecessor's pre-tick position
        for i in 1..body.len() {
            assert_eq!(body.segments()[i], before[i - 1]);
        }
        assert_eq!(body.head(), Position::new(11, 10));
    }

    #[test]
    fn test_append_duplicates_tail() {
        let mut body = SnakeBody::initial(&test_board());
        let tail = *body.segments().last().unwrap();

        body.append(3);

        assert_eq!(body.len(), 8);
        assert!(body.segments()[5..].iter().all(|&p| p == tail));
    }

    #[test]
    fn test_direction_offsets() {
        let p = Position::new(5, 5);
        assert_eq!(p.step(Direction::North), Position::new(5, 4));
        assert_eq!(p.step(Direction::South), Position::new(5, 6));
        assert_eq!(p.step(Direction::East), Position::new(6, 5));
        assert_eq!(p.step(Direction::West), Position::new(4, 5));
    }

    #[test]
    fn test_set_direction_last_write_wins() {
        let mut state = GameState::new(SimConfig::default()).unwrap();
        state.set_direction(Direction::East);
        state.set_direction(Direction::West);
        // No reversal guard: west sticks even though the snake heads east
        assert_eq!(state.direction(), Direction::West);
    }

    #[test]
    fn test_spawn_classification() {
        let board = test_board();
        let mut field = ObstacleField::default();

        field.spawn(60, &board); // 60 % 3 == 0 -> good at (0, 0)
        assert!(field.good().contains(&Position::new(0, 0)));
        assert!(field.bad().is_empty());

        field.spawn(61, &board); // bad at (1, 1)
        assert!(field.bad().contains(&Position::new(1, 1)));
    }

    #[test]
    fn test_reset_and_spawn_leaves_one_obstacle() {
        let board = test_board();
        let mut field = ObstacleField::default();
        field.spawn(7, &board);
        field.spawn(11, &board);
        field.spawn(9, &board);

        field.reset_and_spawn(43, &board);

        assert_eq!(field.good().len() + field.bad().len(), 1);
        assert!(field.bad().contains(&Position::new(3, 3)));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let state = GameState::new(SimConfig::default()).unwrap();
        let snapshot = state.snapshot();

        assert_eq!(snapshot.body, state.body().segments());
        assert!(snapshot.good_obstacles.is_empty());
        assert!(snapshot.bad_obstacles.is_empty());
        assert_eq!(snapshot.phase, GamePhase::Running);
    }

    #[test]
    fn test_new_rejects_tiny_board() {
        let config = SimConfig {
            width: 4,
            height: 6,
            ..Default::default()
        };
        assert!(GameState::new(config).is_err());
    }
}
