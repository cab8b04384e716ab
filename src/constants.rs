// Play field dimensions (pixels)
pub const GAME_WIDTH: i32 = 500;
pub const GAME_HEIGHT: i32 = 500;

// Bird
pub const BIRD_SIZE: i32 = 20;
pub const INITIAL_BIRD_TOP: i32 = 250;
pub const GRAVITY: i32 = 6;
pub const JUMP_HEIGHT: i32 = 100;

// Obstacles
pub const OBSTACLE_WIDTH: i32 = 40;
pub const OBSTACLE_GAP: i32 = 200;
pub const INITIAL_OBSTACLE_HEIGHT: i32 = 200;
pub const SCROLL_SPEED: i32 = 5;

// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 24;

// Logging
pub const LOG_ENV_VAR: &str = "FLAPPY_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
