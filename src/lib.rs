//! Flappy - terminal Flappy Bird.
//!
//! The simulation (`game`) is independent of the terminal; the `ui` module
//! draws its `RenderState` with ratatui and the `simulator` plays it headless.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod ui;

pub use config::GameConfig;
pub use constants::*;
pub use error::{FlappyError, Result};
pub use game::{GameState, Phase, RenderState, Session};
