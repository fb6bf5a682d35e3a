//! Tick scheduling and the logical tick
//!
//! The host calls [`advance`] once per frame with a monotonic timestamp.
//! A logical tick fires when the configured interval has elapsed since the
//! last one; each tick shifts the body, moves the head, runs the collision
//! check, and applies the periodic growth/spawn events. Time never comes
//! from the wall clock here, so every sequence of timestamps replays
//! identically.

use super::collision::{self, Outcome};
use super::state::{GamePhase, GameState};

/// Advance the simulation to `now_ms`.
///
/// At most one logical tick fires per call. Non-increasing timestamps are
/// accepted and simply never fire a tick. Once the phase is terminal this
/// is a no-op.
pub fn advance(state: &mut GameState, now_ms: u64) {
    if !state.is_running() {
        return;
    }

    if now_ms.saturating_sub(state.last_tick_ms) <= state.config.tick_interval_ms {
        return;
    }

    state.last_tick_ms = now_ms;
    state.tick_count += 1;
    tick(state, now_ms);
}

/// One logical tick: shift, move head, collide, then periodic events.
///
/// The shift runs before the head move; together they implement "every
/// segment moves to where its predecessor was". The periodic growth and
/// spawn cadences are evaluated once per tick, on the post-increment count,
/// so they land on ticks 10, 20, ... and 30, 60, ...
fn tick(state: &mut GameState, now_ms: u64) {
    state.body.shift_follow();
    state.body.move_head(state.direction);

    let outcome = collision::check(&state.body, &state.board, &state.obstacles);
    if let Some(reason) = outcome.fatal_reason() {
        log::info!(
            "game over on tick {}: snake {}",
            state.tick_count,
            reason.describe()
        );
        state.phase = GamePhase::GameOver(reason);
        return;
    }

    if outcome == Outcome::GoodObstacleHit {
        state.obstacles.reset_and_spawn(now_ms, &state.board);
        state.body.append(state.config.good_growth_bonus);
        log::debug!(
            "good obstacle consumed on tick {}, body length {}",
            state.tick_count,
            state.body.len()
        );
    }

    if state.tick_count % state.config.growth_interval == 0 {
        state.body.append(1);
        log::debug!(
            "periodic growth on tick {}, body length {}",
            state.tick_count,
            state.body.len()
        );
    }

    if state.tick_count % state.config.spawn_interval == 0 {
        state.obstacles.spawn(now_ms, &state.board);
    }
}
