// Key sources for the event loop

use crossterm::event;
use std::io;
use std::time::Duration;

use super::keys::Key;

pub trait KeySource {
    /// Wait up to `timeout` for the next key. `Ok(None)` means nothing
    /// arrived (or the event was not a key the loop cares about).
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;
}

/// Reads keys from the controlling terminal.
#[derive(Debug, Default)]
pub struct CrosstermTty;

impl CrosstermTty {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermTty {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(Key::from_event(event::read()?))
    }
}
