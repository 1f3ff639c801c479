//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to session actions.

use crate::session::Action;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Map a key press to an action
///
/// Releases and repeats reported by some terminals are ignored so a single
/// press never toggles twice.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Picker commands
        (KeyCode::Enter, _) => Action::Toggle,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::Yank,
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => Action::SwitchMode,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Reload,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => Action::Up,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => Action::Down,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Home, _) => Action::Home,
        (KeyCode::End, _) => Action::End,

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::Insert(c),
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Delete, _) => Action::Delete,
        (KeyCode::Left, _) => Action::CursorLeft,
        (KeyCode::Right, _) => Action::CursorRight,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearQuery,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Action::DeleteWord,

        _ => return None,
    };

    Some(action)
}

/// Handle mouse events
const fn map_mouse(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::Up),
        MouseEventKind::ScrollDown => Some(Action::Down),
        _ => None,
    }
}

/// Poll for one event and translate it
///
/// Returns `Ok(None)` on timeout, resize, or any event without a binding.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_action(timeout: Duration) -> std::io::Result<Option<Action>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let action = match event::read()? {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    };

    Ok(action)
}
