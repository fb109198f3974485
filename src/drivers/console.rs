use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use super::InputDriver;

/// Crossterm-backed input with key normalization.
///
/// `poll` reads ahead and parks the normalized event in `event_queue`, so a
/// poll only reports events `read` will actually hand out. Raw events that
/// normalize to nothing (key releases, repeats) are consumed during the poll.
#[derive(Debug, Default)]
pub struct ConsoleDriver {
    event_queue: VecDeque<Event>,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pulls raw events from `source` until one survives normalization or
    /// the source runs dry. Only the first wait uses `timeout`.
    fn fill_queue<F>(&mut self, timeout: Duration, mut source: F) -> io::Result<bool>
    where
        F: FnMut(Duration) -> io::Result<Option<Event>>,
    {
        if !self.event_queue.is_empty() {
            return Ok(true);
        }
        let mut wait = timeout;
        while let Some(raw) = source(wait)? {
            if let Some(event) = normalize(raw) {
                self.event_queue.push_back(event);
                return Ok(true);
            }
            wait = Duration::ZERO;
        }
        Ok(false)
    }

    fn read_internal(&mut self) -> io::Result<Event> {
        loop {
            let evt = crossterm::event::read()?;
            if let Some(normalized) = normalize(evt) {
                return Ok(normalized);
            }
        }
    }
}

fn crossterm_source(timeout: Duration) -> io::Result<Option<Event>> {
    if crossterm::event::poll(timeout)? {
        crossterm::event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Folds Shift+Tab into BackTab and drops key releases and repeats that
/// some platforms report alongside presses.
pub fn normalize(evt: Event) -> Option<Event> {
    match evt {
        Event::Key(mut key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
                key.code = KeyCode::BackTab;
                key.modifiers.remove(KeyModifiers::SHIFT);
            }
            if key.code == KeyCode::BackTab {
                key.modifiers.remove(KeyModifiers::SHIFT);
            }
            Some(Event::Key(key))
        }
        other => Some(other),
    }
}

impl InputDriver for ConsoleDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        self.fill_queue(timeout, crossterm_source)
    }

    fn read(&mut self) -> io::Result<Event> {
        if let Some(evt) = self.event_queue.pop_front() {
            return Ok(evt);
        }
        self.read_internal()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            crossterm::execute!(io::stdout(), crossterm::event::EnableMouseCapture)
        } else {
            crossterm::execute!(io::stdout(), crossterm::event::DisableMouseCapture)
        }
    }
}
