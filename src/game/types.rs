//! Flappy game data structures.

use crate::config::GameConfig;
use serde::Serialize;

/// The mutable record every handler reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Vertical offset of the bird from the top of the play field (px).
    pub bird_top: i32,
    /// Whether the simulation clock is running.
    pub started: bool,
    /// Height of the top obstacle for the current obstacle cycle.
    pub obstacle_height: i32,
    /// Horizontal offset of the obstacle pair from the left edge.
    pub obstacle_left: i32,
    /// Obstacles passed in the current run.
    pub score: u32,
}

impl GameState {
    /// Fresh state at process start: bird mid-field, obstacle at the right edge.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bird_top: config.initial_bird_top,
            started: false,
            obstacle_height: config.initial_obstacle_height,
            obstacle_left: config.spawn_left(),
            score: 0,
        }
    }

    pub fn bottom_obstacle_height(&self, config: &GameConfig) -> i32 {
        config.bottom_obstacle_height(self.obstacle_height)
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not started yet; waiting for the first jump.
    Ready,
    Running,
    /// Idle after a collision; the next jump restarts.
    GameOver,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Gravity moved the bird down.
    pub fell: bool,
    /// The obstacle pair moved left.
    pub scrolled: bool,
    /// A new obstacle pair was spawned and the score went up by one.
    pub spawned: bool,
    /// The bird hit an obstacle and the run ended.
    pub collided: bool,
}

/// Result of handling a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// The jump began a new run (first run or restart).
    Started,
    /// The run was already going; only the bird moved.
    Flapped,
    /// The jump itself put the bird inside an obstacle.
    Collided,
}

/// Snapshot handed to the presentation layer each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderState {
    pub phase: Phase,
    pub game_width: i32,
    pub game_height: i32,
    pub bird_top: i32,
    pub bird_left: i32,
    pub bird_size: i32,
    pub obstacle_left: i32,
    pub obstacle_width: i32,
    pub obstacle_height: i32,
    pub bottom_obstacle_top: i32,
    pub bottom_obstacle_height: i32,
    pub score: u32,
    pub best_score: u32,
}

impl RenderState {
    pub fn new(state: &GameState, config: &GameConfig, phase: Phase, best_score: u32) -> Self {
        let bottom_obstacle_height = state.bottom_obstacle_height(config);
        Self {
            phase,
            game_width: config.game_width,
            game_height: config.game_height,
            bird_top: state.bird_top,
            bird_left: config.bird_left(),
            bird_size: config.bird_size,
            obstacle_left: state.obstacle_left,
            obstacle_width: config.obstacle_width,
            obstacle_height: state.obstacle_height,
            bottom_obstacle_top: config.game_height - bottom_obstacle_height,
            bottom_obstacle_height,
            score: state.score,
            best_score,
        }
    }
}
