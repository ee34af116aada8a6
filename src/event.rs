// Event module - Keyboard events mapped to app actions

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    Up,
    Down,
    /// Expand or collapse the selected plant's details.
    ToggleDetails,
    /// Flip the selected plant's watered flag.
    ToggleWatered,
    Top,
}

/// Waits up to `timeout` for a terminal event.
pub fn read_event(timeout: Duration) -> anyhow::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_key_event(key: KeyEvent) -> Option<AppEvent> {
    // Windows reports both press and release.
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::Down),
        KeyCode::Enter => Some(AppEvent::ToggleDetails),
        KeyCode::Char(' ') | KeyCode::Char('w') => Some(AppEvent::ToggleWatered),
        KeyCode::Home | KeyCode::Char('g') => Some(AppEvent::Top),
        _ => None,
    }
}
