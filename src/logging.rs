//! tracing-subscriber setup shared by both binaries.

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Output goes to stderr, filtered by `FLAPPY_LOG` (e.g. `FLAPPY_LOG=debug`).
/// The TUI draws on stdout in the alternate screen, so redirect stderr
/// (`flappy 2>flappy.log`) when raising the level during play.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Install the subscriber with the quiet default used by the game screen.
pub fn init_default() {
    init(DEFAULT_LOG_FILTER);
}
