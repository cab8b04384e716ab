//! Simulation configuration.

use crate::config::GameConfig;

/// Configuration for a batch of autopilot runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to perform
    pub num_runs: u32,

    /// Seed of the first run; run `i` uses `seed + i` (None = random)
    pub seed: Option<u64>,

    /// Ticks after which a run still flying is stopped and counted as timed out
    pub max_ticks_per_run: u64,

    /// Rules every run is stepped with
    pub game: GameConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            max_ticks_per_run: 50_000,
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Single short run, handy for dumping frames.
    pub fn single_run(seed: u64, max_ticks: u64) -> Self {
        Self {
            num_runs: 1,
            seed: Some(seed),
            max_ticks_per_run: max_ticks,
            ..Default::default()
        }
    }
}
