//! Fixed-step rules: gravity, obstacle scroll and spawn, collision, jump.
//!
//! Each tick runs the sub-steps in a fixed order (gravity, scroll or spawn,
//! collision) so the collision check always sees the state both movers left
//! behind.

use super::types::{GameState, JumpOutcome, TickEvents};
use crate::config::GameConfig;
use rand::Rng;

/// Advance the simulation by one tick.
pub fn tick<R: Rng>(state: &mut GameState, config: &GameConfig, rng: &mut R) -> TickEvents {
    let mut events = TickEvents::default();
    if !state.started {
        return events;
    }

    events.fell = gravity_step(state, config);

    if state.obstacle_left >= -config.obstacle_width {
        events.scrolled = scroll_step(state, config);
    } else {
        spawn_obstacle(state, config, rng);
        state.score += 1;
        events.spawned = true;
    }

    events.collided = apply_collision(state, config);
    events
}

/// Move the bird down by one gravity step while it is above the floor.
///
/// The step is not clamped to the floor; an oversized gravity overshoots it.
pub fn gravity_step(state: &mut GameState, config: &GameConfig) -> bool {
    if !state.started || state.bird_top >= config.floor() {
        return false;
    }
    state.bird_top = state.bird_top.saturating_add(config.gravity);
    true
}

/// Move the obstacle pair left while it has not fully left the field.
pub fn scroll_step(state: &mut GameState, config: &GameConfig) -> bool {
    if !state.started || state.obstacle_left < -config.obstacle_width {
        return false;
    }
    state.obstacle_left = state.obstacle_left.saturating_sub(config.scroll_speed);
    true
}

/// Put a new obstacle pair at the right edge with a random top height.
///
/// Does not touch the score; the caller decides whether this spawn counts.
pub fn spawn_obstacle<R: Rng>(state: &mut GameState, config: &GameConfig, rng: &mut R) {
    state.obstacle_left = config.spawn_left();
    state.obstacle_height = rng.gen_range(config.spawn_range());
}

/// Axis-aligned overlap test between the bird and the current obstacle pair.
pub fn is_collision(state: &GameState, config: &GameConfig) -> bool {
    let bottom_obstacle_height = state.bottom_obstacle_height(config);

    let collided_top = state.bird_top >= 0 && state.bird_top < state.obstacle_height;
    let collided_bottom = state.bird_top <= config.game_height
        && state.bird_top >= config.game_height - bottom_obstacle_height;
    let in_obstacle_zone =
        state.obstacle_left >= 0 && state.obstacle_left <= config.obstacle_width;

    in_obstacle_zone && (collided_top || collided_bottom)
}

/// Stop the run if the bird overlaps an obstacle. Returns true if it did.
pub fn apply_collision(state: &mut GameState, config: &GameConfig) -> bool {
    if state.started && is_collision(state, config) {
        state.started = false;
        return true;
    }
    false
}

/// Handle the single player action.
///
/// Starting a run resets the score and brings in a fresh obstacle pair so a
/// restart never begins inside the obstacle that ended the last run. The
/// bird never goes above the top edge.
pub fn jump<R: Rng>(state: &mut GameState, config: &GameConfig, rng: &mut R) -> JumpOutcome {
    let candidate = state.bird_top.saturating_sub(config.jump_height);

    let mut outcome = JumpOutcome::Flapped;
    if !state.started {
        state.started = true;
        state.score = 0;
        spawn_obstacle(state, config, rng);
        outcome = JumpOutcome::Started;
    }

    state.bird_top = candidate.max(0);

    if apply_collision(state, config) {
        return JumpOutcome::Collided;
    }
    outcome
}
