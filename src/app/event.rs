//! Terminal events for the chat panel's loop

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;

/// One event-loop turn's input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing arrived within the poll interval
    Tick,
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Anything else the terminal reports; only needs a redraw
    Redraw,
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) => Self::Key(key),
            CrosstermEvent::Mouse(mouse) => Self::Mouse(mouse),
            _ => Self::Redraw,
        }
    }
}

/// Polls the terminal for the next event
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    poll_interval: Duration,
}

impl Handler {
    /// Create a handler that waits up to `poll_interval_ms` per turn
    #[must_use]
    pub const fn new(poll_interval_ms: u64) -> Self {
        Self {
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Wait for the next event, yielding [`Event::Tick`] on timeout
    ///
    /// # Errors
    ///
    /// Returns an error if polling or reading the terminal fails
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.poll_interval)? {
            Ok(event::read()?.into())
        } else {
            Ok(Event::Tick)
        }
    }
}
