//! Session: owns the game state, its config and RNG, and the counters that
//! outlive a single run.

use super::logic;
use super::types::{GameState, JumpOutcome, Phase, RenderState, TickEvents};
use crate::config::GameConfig;
use crate::error::Result;
use rand::Rng;
use tracing::{debug, info};

pub struct Session<R: Rng> {
    config: GameConfig,
    state: GameState,
    rng: R,
    /// Runs started since the session was created.
    runs: u32,
    /// Best score of any run this process; kept in memory only.
    best_score: u32,
    /// Ticks stepped while running, across all runs.
    ticks: u64,
}

impl<R: Rng> Session<R> {
    /// Create a session after validating the config.
    pub fn new(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(&config),
            config,
            rng,
            runs: 0,
            best_score: 0,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted setups in tests and tools.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn phase(&self) -> Phase {
        if self.state.started {
            Phase::Running
        } else if self.runs == 0 {
            Phase::Ready
        } else {
            Phase::GameOver
        }
    }

    /// Step one fixed interval.
    pub fn tick(&mut self) -> TickEvents {
        if !self.state.started {
            return TickEvents::default();
        }
        self.ticks += 1;

        let events = logic::tick(&mut self.state, &self.config, &mut self.rng);
        if events.spawned {
            self.best_score = self.best_score.max(self.state.score);
            debug!(
                score = self.state.score,
                obstacle_height = self.state.obstacle_height,
                "obstacle spawned"
            );
        }
        if events.collided {
            self.log_run_over();
        }
        events
    }

    /// The player's activate gesture.
    pub fn jump(&mut self) -> JumpOutcome {
        let outcome = logic::jump(&mut self.state, &self.config, &mut self.rng);
        match outcome {
            JumpOutcome::Started => {
                self.runs += 1;
                info!(
                    run = self.runs,
                    obstacle_height = self.state.obstacle_height,
                    "run started"
                );
            }
            JumpOutcome::Collided => self.log_run_over(),
            JumpOutcome::Flapped => {}
        }
        outcome
    }

    pub fn render_state(&self) -> RenderState {
        RenderState::new(&self.state, &self.config, self.phase(), self.best_score)
    }

    fn log_run_over(&self) {
        info!(
            run = self.runs,
            score = self.state.score,
            bird_top = self.state.bird_top,
            obstacle_left = self.state.obstacle_left,
            "collision, run over"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> Session<ChaCha8Rng> {
        Session::new(GameConfig::default(), ChaCha8Rng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            obstacle_gap: 600,
            ..Default::default()
        };
        assert!(Session::new(config, ChaCha8Rng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn test_phase_lifecycle() {
        let mut session = session();
        assert_eq!(session.phase(), Phase::Ready);

        session.jump();
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.runs(), 1);

        // Force a collision
        let state = session.state_mut();
        state.bird_top = 10;
        state.obstacle_height = 200;
        state.obstacle_left = 25;
        let events = session.tick();
        assert!(events.collided);
        assert_eq!(session.phase(), Phase::GameOver);

        session.jump();
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.runs(), 2);
    }

    #[test]
    fn test_max_gravity_config_keeps_running() {
        let config = GameConfig {
            gravity: i32::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let mut session = Session::new(config, ChaCha8Rng::seed_from_u64(0)).unwrap();

        session.jump();
        for _ in 0..200 {
            session.tick();
        }
        assert_eq!(session.state().bird_top, i32::MAX);
        // Far below the field, so nothing can hit it
        assert_eq!(session.phase(), Phase::Running);
        let render = session.render_state();
        assert_eq!(render.bird_top, i32::MAX);
    }

    #[test]
    fn test_ticks_only_count_while_running() {
        let mut session = session();
        session.tick();
        session.tick();
        assert_eq!(session.ticks(), 0);

        session.jump();
        session.tick();
        assert_eq!(session.ticks(), 1);
    }

    #[test]
    fn test_best_score_survives_restart() {
        let mut session = session();
        session.jump();
        session.state_mut().score = 5;
        session.state_mut().obstacle_left = -45;
        session.tick();
        assert_eq!(session.state().score, 6);
        assert_eq!(session.best_score(), 6);

        // End the run and restart; score resets, best does not
        session.state_mut().started = false;
        session.jump();
        assert_eq!(session.state().score, 0);
        assert_eq!(session.best_score(), 6);
        assert_eq!(session.render_state().best_score, 6);
    }
}
