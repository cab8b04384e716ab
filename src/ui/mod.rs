pub mod flappy_scene;
pub mod game_common;

use crate::game::RenderState;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Smallest terminal the game screen is drawn in.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 14;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, render: &RenderState) {
    let size = frame.size();
    if size.width < MIN_COLS || size.height < MIN_ROWS {
        render_too_small(frame);
        return;
    }
    flappy_scene::render_flappy(frame, size, render);
}

/// Render a "terminal too small" message.
fn render_too_small(frame: &mut Frame) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_COLS, MIN_ROWS, area.width, area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{GameState, Phase};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_too_small_message() {
        let config = GameConfig::default();
        let render = RenderState::new(&GameState::new(&config), &config, Phase::Ready, 0);

        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal.draw(|frame| draw_ui(frame, &render)).unwrap();

        let buffer = terminal.backend().buffer();
        let first_line: String = (0..30).map(|x| buffer.get(x, 0).symbol()).collect();
        assert!(first_line.contains("Terminal too small"));
    }
}
