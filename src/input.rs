//! Terminal input mapping.
//!
//! The game has one gameplay action; everything else is either quit or
//! ignored.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Input actions for the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Jump (Space, Enter, Up, `k`, or left click). Also starts a run.
    Jump,
    /// Leave the game (`q`, Esc, Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

/// Map a key event to a game input.
pub fn map_key(key: KeyEvent) -> GameInput {
    // Windows terminals report key releases too
    if key.kind == KeyEventKind::Release {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up | KeyCode::Char('k') => GameInput::Jump,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Map a mouse event to a game input. Only a left-button press jumps.
pub fn map_mouse(mouse: MouseEvent) -> GameInput {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => GameInput::Jump,
        _ => GameInput::Other,
    }
}

/// Map any terminal event to a game input.
pub fn map_event(event: &Event) -> GameInput {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse),
        _ => GameInput::Other,
    }
}
