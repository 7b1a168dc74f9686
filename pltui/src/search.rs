//! Search entry debouncing
//!
//! Typing re-arms a deadline; the search runs once the user pauses, and
//! only if the text differs from what was last searched.

use pltconfig::Config;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    timeout: Duration,
    text: String,
    last_activated: String,
    deadline: Option<Instant>,
}

impl SearchDebouncer {
    pub fn new(timeout: Duration, initial_text: impl Into<String>) -> Self {
        let text = initial_text.into();
        Self {
            timeout,
            last_activated: text.clone(),
            text,
            deadline: None,
        }
    }

    /// Uses `gui.search_timeout_millisecs`
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(config.get_search_timeout()?, ""))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The clear icon is only usable with something to clear.
    pub fn clear_icon_sensitive(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.deadline = Some(now + self.timeout);
    }

    /// Returns the text to search for once the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.fire(),
            _ => None,
        }
    }

    /// Empties the entry and searches right away.
    pub fn clear(&mut self) -> Option<String> {
        self.text.clear();
        self.fire()
    }

    /// Explicit activation (Enter): searches the current text unconditionally.
    pub fn activate(&mut self) -> String {
        self.deadline = None;
        self.last_activated = self.text.clone();
        self.text.clone()
    }

    fn fire(&mut self) -> Option<String> {
        self.deadline = None;
        if self.text == self.last_activated {
            return None;
        }
        Some(self.activate())
    }
}
