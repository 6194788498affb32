//! Keyboard input: maps terminal key events to [`GameInput`].

use crate::game::GameInput;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

/// Source of at most one key per frame.
pub trait InputSource {
    fn poll_input(&mut self) -> io::Result<Option<GameInput>>;
}

/// Translate a key event. Releases are dropped; unknown keys map to `Other`.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    Some(match key.code {
        KeyCode::Char(' ') => GameInput::Jump,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    })
}

/// Reads the real terminal without blocking.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        // One event per frame; anything else stays queued for later frames
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}
