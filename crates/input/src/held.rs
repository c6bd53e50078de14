//! Held-key tracking for terminal environments.
//!
//! Terminals report presses (and auto-repeats) but usually not releases. When
//! release events are unavailable a key counts as held for a short timeout
//! after the last press or repeat it produced.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::key_from_code;
use crate::types::{Key, KeyState};

// Long enough to bridge the gap between a terminal's initial press and its
// first auto-repeat on common settings.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 200;

#[derive(Debug, Clone)]
pub struct HeldKeys {
    last_seen: [Option<Instant>; Key::COUNT],
    release_events: bool,
    release_timeout: Duration,
}

fn slot(key: Key) -> usize {
    match key {
        Key::Escape => 0,
        Key::W => 1,
        Key::S => 2,
        Key::I => 3,
        Key::K => 4,
    }
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            last_seen: [None; Key::COUNT],
            release_events: false,
            release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    /// Whether the terminal reports key releases. Disables the timeout.
    pub fn set_release_events(&mut self, enabled: bool) {
        self.release_events = enabled;
    }

    pub fn press(&mut self, key: Key, now: Instant) {
        self.last_seen[slot(key)] = Some(now);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen[slot(key)] = None;
    }

    /// Feed a terminal key event. Returns the game key it touched, if any.
    pub fn apply(&mut self, event: KeyEvent, now: Instant) -> Option<Key> {
        let key = key_from_code(event.code)?;
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(key, now),
            KeyEventKind::Release => self.release(key),
        }
        Some(key)
    }

    pub fn state(&self, now: Instant) -> KeyState {
        let mut state = KeyState::new();
        for key in Key::ALL {
            if let Some(seen) = self.last_seen[slot(key)] {
                let fresh = now.saturating_duration_since(seen) <= self.release_timeout;
                state.set(key, self.release_events || fresh);
            }
        }
        state
    }

    pub fn reset(&mut self) {
        self.last_seen = [None; Key::COUNT];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
