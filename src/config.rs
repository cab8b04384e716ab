//! Game configuration.
//!
//! Every tunable of the simulation lives here so the TUI, the simulator and
//! the tests all step the exact same rules. `Default` reproduces the classic
//! constants from `constants.rs`.

use crate::constants::*;
use crate::error::{FlappyError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::time::Duration;

/// Dimensions, speeds and timing for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Play field width in pixels
    pub game_width: i32,

    /// Play field height in pixels
    pub game_height: i32,

    /// Side length of the bird's square hitbox
    pub bird_size: i32,

    /// Bird top offset when the process starts
    pub initial_bird_top: i32,

    /// Pixels added to the bird's top offset per tick
    pub gravity: i32,

    /// Pixels removed from the bird's top offset per jump
    pub jump_height: i32,

    /// Obstacle column width
    pub obstacle_width: i32,

    /// Vertical opening between top and bottom obstacle
    pub obstacle_gap: i32,

    /// Top obstacle height before the first spawn
    pub initial_obstacle_height: i32,

    /// Pixels the obstacle pair moves left per tick
    pub scroll_speed: i32,

    /// Fixed step length
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,
            bird_size: BIRD_SIZE,
            initial_bird_top: INITIAL_BIRD_TOP,
            gravity: GRAVITY,
            jump_height: JUMP_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            initial_obstacle_height: INITIAL_OBSTACLE_HEIGHT,
            scroll_speed: SCROLL_SPEED,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Check that the config describes a playable field.
    ///
    /// The spawn draw needs a non-empty height range, and every size and
    /// speed must be positive. Gravity and jump height are not bounded above:
    /// an oversized step only makes the bird overshoot.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("game_width", self.game_width),
            ("game_height", self.game_height),
            ("bird_size", self.bird_size),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_gap", self.obstacle_gap),
            ("scroll_speed", self.scroll_speed),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(FlappyError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.gravity < 0 || self.jump_height < 0 {
            return Err(FlappyError::InvalidConfig(
                "gravity and jump_height must not be negative".to_string(),
            ));
        }
        if self.obstacle_gap >= self.game_height {
            return Err(FlappyError::InvalidConfig(format!(
                "obstacle_gap ({}) must be smaller than game_height ({})",
                self.obstacle_gap, self.game_height
            )));
        }
        if self.obstacle_width >= self.game_width {
            return Err(FlappyError::InvalidConfig(format!(
                "obstacle_width ({}) must be smaller than game_width ({})",
                self.obstacle_width, self.game_width
            )));
        }
        if !self.spawn_range().contains(&self.initial_obstacle_height) {
            return Err(FlappyError::InvalidConfig(format!(
                "initial_obstacle_height ({}) outside {:?}",
                self.initial_obstacle_height,
                self.spawn_range()
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(FlappyError::InvalidConfig(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Half-open range a freshly spawned top obstacle height is drawn from.
    pub fn spawn_range(&self) -> Range<i32> {
        0..self.game_height - self.obstacle_gap
    }

    /// Horizontal offset of a freshly spawned obstacle pair.
    pub fn spawn_left(&self) -> i32 {
        self.game_width - self.obstacle_width
    }

    /// Lowest top offset at which gravity still applies.
    pub fn floor(&self) -> i32 {
        self.game_height - self.bird_size
    }

    /// Bottom obstacle height for the given top obstacle height.
    pub fn bottom_obstacle_height(&self, obstacle_height: i32) -> i32 {
        self.game_height - self.obstacle_gap - obstacle_height
    }

    /// Column the collision zone is anchored on; the bird is drawn here.
    pub fn bird_left(&self) -> i32 {
        self.obstacle_width
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.game_width, 500);
        assert_eq!(config.game_height, 500);
        assert_eq!(config.bird_size, 20);
        assert_eq!(config.gravity, 6);
        assert_eq!(config.jump_height, 100);
        assert_eq!(config.obstacle_width, 40);
        assert_eq!(config.obstacle_gap, 200);
        assert_eq!(config.tick_interval_ms, 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_values() {
        let config = GameConfig::default();
        assert_eq!(config.spawn_range(), 0..300);
        assert_eq!(config.spawn_left(), 460);
        assert_eq!(config.floor(), 480);
        assert_eq!(config.bottom_obstacle_height(200), 100);
        assert_eq!(config.tick_interval(), Duration::from_millis(24));
    }

    #[test]
    fn test_gap_filling_field_is_rejected() {
        let config = GameConfig {
            obstacle_gap: 500,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("obstacle_gap"));
    }

    #[test]
    fn test_zero_scroll_speed_is_rejected() {
        let config = GameConfig {
            scroll_speed: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tick_interval_is_rejected() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_initial_height_must_be_spawnable() {
        let config = GameConfig {
            initial_obstacle_height: 300,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_large_gravity_is_allowed() {
        let config = GameConfig {
            gravity: 1000,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_string(&GameConfig::default()).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GameConfig::default());
    }
}
