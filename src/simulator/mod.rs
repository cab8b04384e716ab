//! Headless autopilot simulator.
//!
//! Plays many seeded runs with a scripted player to check that the fixed
//! constants give a passable game: scores, run lengths, and how often the
//! autopilot survives to the tick limit.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::{jump_threshold, should_jump};
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
