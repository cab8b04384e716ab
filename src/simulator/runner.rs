//! Drives `Session` with the autopilot, no terminal involved.

use super::autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::error::Result;
use crate::game::{RenderState, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Run every configured run and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = base_seed.wrapping_add(run_idx as u64);
        let stats = simulate_single_run(config, seed, |_| {})?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - seed {}, score {}, ticks {}{}",
                run_idx + 1,
                config.num_runs,
                stats.seed,
                stats.score,
                stats.ticks,
                if stats.timed_out { " (timed out)" } else { "" }
            );
        }
        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(config.game, all_runs))
}

/// Play one run from the first jump to the crash (or the tick limit).
///
/// `on_frame` sees the render state after every tick.
pub fn simulate_single_run<F>(config: &SimConfig, seed: u64, mut on_frame: F) -> Result<RunStats>
where
    F: FnMut(&RenderState),
{
    let mut session = Session::new(config.game, ChaCha8Rng::seed_from_u64(seed))?;
    let gravity = config.game.gravity;
    let mut jumps = 0u64;

    loop {
        if autopilot::should_jump(&session.render_state(), gravity) {
            session.jump();
            jumps += 1;
        }
        if session.runs() > 0 && !session.state().started {
            break;
        }
        if session.ticks() >= config.max_ticks_per_run {
            break;
        }

        session.tick();
        on_frame(&session.render_state());

        if !session.state().started {
            break;
        }
    }

    let stats = RunStats {
        seed,
        score: session.state().score,
        ticks: session.ticks(),
        jumps,
        timed_out: session.state().started,
    };
    debug!(seed, score = stats.score, ticks = stats.ticks, "run finished");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_same_seed_same_run() {
        let config = SimConfig::single_run(7, 5_000);
        let a = simulate_single_run(&config, 7, |_| {}).unwrap();
        let b = simulate_single_run(&config, 7, |_| {}).unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.jumps, b.jumps);
    }

    #[test]
    fn test_tick_limit_stops_run() {
        let config = SimConfig::single_run(1, 10);
        let stats = simulate_single_run(&config, 1, |_| {}).unwrap();
        assert!(stats.ticks <= 10);
        if stats.timed_out {
            assert_eq!(stats.ticks, 10);
        }
    }

    #[test]
    fn test_frames_reported_every_tick() {
        let config = SimConfig::single_run(3, 200);
        let mut frames = 0u64;
        let stats = simulate_single_run(&config, 3, |_| frames += 1).unwrap();
        assert_eq!(frames, stats.ticks);
    }

    #[test]
    fn test_report_covers_all_runs() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(100),
            max_ticks_per_run: 2_000,
            verbosity: 0,
            ..Default::default()
        };
        let report = run_simulation(&config).unwrap();
        assert_eq!(report.num_runs, 5);
        let seeds: Vec<u64> = report.run_stats.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![100, 101, 102, 103, 104]);
    }

    #[test]
    fn test_invalid_game_config_is_an_error() {
        let config = SimConfig {
            game: GameConfig {
                obstacle_gap: 1_000,
                ..Default::default()
            },
            ..SimConfig::single_run(0, 10)
        };
        assert!(run_simulation(&config).is_err());
    }
}
