//! UI rendering for the Flappy game screen.

use crate::game::{Phase, RenderState};
use crate::ui::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;
const CONTROLS: &[(&str, &str)] = &[("[Space/Up/Click]", "Jump"), ("[Q]", "Quit")];

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Sky,
    Obstacle,
    Bird,
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, render: &RenderState) {
    let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan, INFO_PANEL_WIDTH);

    let field = fit_play_area(layout.content);
    render_play_area(frame, field, render);
    render_status_bar_content(frame, layout.status_bar, render);
    render_info_panel(frame, layout.info_panel, render);

    if render.phase == Phase::GameOver {
        render_game_over_banner(
            frame,
            layout.content,
            "CRASH!",
            &format!("You passed {} obstacles.", render.score),
        );
    }
}

/// Largest centered rect inside `area` with the square field's on-screen
/// proportions (a terminal cell is about twice as tall as it is wide).
pub fn fit_play_area(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).max(1).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Classify the cell at (`col`, `row`) of a `width` x `height` grid.
///
/// Obstacles are sampled at the cell center. The bird is snapped to the cells
/// its hitbox maps onto so it never disappears on a small terminal. An empty
/// grid is all sky.
pub fn cell_kind(render: &RenderState, col: u16, row: u16, width: u16, height: u16) -> CellKind {
    if width == 0 || height == 0 {
        return CellKind::Sky;
    }
    let (w, h) = (width as i64, height as i64);
    let (gw, gh) = (render.game_width as i64, render.game_height as i64);

    let bird_row = ((render.bird_top as i64 + render.bird_size as i64 / 2) * h / gh).clamp(0, h - 1);
    let bird_col_start = render.bird_left as i64 * w / gw;
    let bird_col_end = ((render.bird_left + render.bird_size) as i64 * w / gw).max(bird_col_start + 1);
    if row as i64 == bird_row && (bird_col_start..bird_col_end).contains(&(col as i64)) {
        return CellKind::Bird;
    }

    let x = (col as i64 * 2 + 1) * gw / (2 * w);
    let y = (row as i64 * 2 + 1) * gh / (2 * h);
    let left = render.obstacle_left as i64;
    let in_column = x >= left && x < left + render.obstacle_width as i64;
    let in_top = y < render.obstacle_height as i64;
    let in_bottom = y >= render.bottom_obstacle_top as i64;

    if in_column && (in_top || in_bottom) {
        CellKind::Obstacle
    } else {
        CellKind::Sky
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, render: &RenderState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let spans: Vec<Span> = (0..area.width)
            .map(|col| match cell_kind(render, col, row, area.width, area.height) {
                CellKind::Bird => Span::styled(
                    "●",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                CellKind::Obstacle => Span::styled("█", Style::default().fg(Color::Green)),
                CellKind::Sky => Span::raw(" "),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().style(Style::default().bg(Color::Blue)));
    frame.render_widget(paragraph, area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, render: &RenderState) {
    match render.phase {
        Phase::Ready => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            CONTROLS,
        ),
        Phase::Running => render_status_bar(
            frame,
            area,
            &format!("Score: {}", render.score),
            Color::Green,
            CONTROLS,
        ),
        Phase::GameOver => render_status_bar(
            frame,
            area,
            &format!("Crashed with {} - press Space to restart", render.score),
            Color::Red,
            CONTROLS,
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, render: &RenderState) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (phase_text, phase_color) = match render.phase {
        Phase::Ready => ("Ready", Color::Yellow),
        Phase::Running => ("Flying", Color::Green),
        Phase::GameOver => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", phase_text),
            Style::default()
                .fg(phase_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", render.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", render.best_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Gap: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}..{}", render.obstacle_height, render.bottom_obstacle_top),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
