//! Scripted player used by the simulator.

use crate::game::{Phase, RenderState};

/// Lowest bird top the autopilot tolerates before jumping.
///
/// Keeps the bird one bird-size plus two gravity steps above the bottom
/// obstacle, so a jump lands it back inside the gap.
pub fn jump_threshold(render: &RenderState, gravity: i32) -> i32 {
    render
        .bottom_obstacle_top
        .saturating_sub(render.bird_size)
        .saturating_sub(gravity.saturating_mul(2))
}

/// Decide whether to press jump this tick.
pub fn should_jump(render: &RenderState, gravity: i32) -> bool {
    match render.phase {
        Phase::Ready => true,
        Phase::Running => render.bird_top >= jump_threshold(render, gravity),
        Phase::GameOver => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::GameState;

    fn render(bird_top: i32, phase: Phase) -> RenderState {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.bird_top = bird_top;
        RenderState::new(&state, &config, phase, 0)
    }

    #[test]
    fn test_threshold_sits_inside_gap() {
        // Gap spans 200..400 for the initial obstacle
        let r = render(0, Phase::Running);
        assert_eq!(jump_threshold(&r, 6), 368);
    }

    #[test]
    fn test_jumps_near_bottom_of_gap() {
        assert!(should_jump(&render(370, Phase::Running), 6));
        assert!(!should_jump(&render(300, Phase::Running), 6));
    }

    #[test]
    fn test_threshold_with_huge_gravity() {
        let r = render(250, Phase::Running);
        assert_eq!(jump_threshold(&r, i32::MAX), 380 - i32::MAX);
        assert!(should_jump(&r, i32::MAX));
    }

    #[test]
    fn test_starts_but_never_restarts() {
        assert!(should_jump(&render(250, Phase::Ready), 6));
        assert!(!should_jump(&render(480, Phase::GameOver), 6));
    }
}
