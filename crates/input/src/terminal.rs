//! Terminal-backed input source.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

use crate::engine::InputSource;
use crate::map::handle_key_event;
use crate::types::InputEvent;

/// Reads key presses from the terminal through crossterm.
///
/// Expects the terminal to already be in raw mode. Keys that map to nothing
/// are skipped without ending the wait; read errors end it as a timeout.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Option<InputEvent> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining).unwrap_or(false) {
                return None;
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(event) = handle_key_event(key) {
                        return Some(event);
                    }
                }
                // Releases, repeats, mouse and resize events carry nothing for the engine.
                Ok(_) => {}
                Err(_) => return None,
            }

            if remaining.is_zero() {
                return None;
            }
        }
    }
}
