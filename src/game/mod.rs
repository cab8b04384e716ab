//! Flappy Bird simulation.
//!
//! A bird falls under constant gravity and jumps a fixed height on input,
//! while one obstacle pair scrolls in from the right. Passing an obstacle
//! scores a point; touching one ends the run.

pub mod logic;
pub mod session;
pub mod types;

pub use logic::*;
pub use session::Session;
pub use types::*;
