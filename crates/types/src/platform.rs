//! Platform collaborator contract.
//!
//! The game loop talks to the display and keyboard only through [`Platform`].
//! The terminal implementation lives in `tui-pong-term`; tests use scripted
//! in-memory implementations.

use thiserror::Error;

/// Keys the game reads from the held-key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    W,
    S,
    I,
    K,
}

impl Key {
    pub const COUNT: usize = 5;
    pub const ALL: [Key; Key::COUNT] = [Key::Escape, Key::W, Key::S, Key::I, Key::K];

    fn bit(self) -> u8 {
        match self {
            Key::Escape => 1 << 0,
            Key::W => 1 << 1,
            Key::S => 1 << 2,
            Key::I => 1 << 3,
            Key::K => 1 << 4,
        }
    }
}

/// Snapshot of which keys are currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    held: u8,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state with exactly `keys` held.
    pub fn from_held(keys: &[Key]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.set(key, true);
        }
        state
    }

    pub fn set(&mut self, key: Key, held: bool) {
        if held {
            self.held |= key.bit();
        } else {
            self.held &= !key.bit();
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.held == 0
    }
}

/// Discrete platform event drained by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// The surface was asked to close.
    Quit,
}

/// RGBA draw color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Integer rectangle in field coordinates (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Startup failure. Carries the platform-reported error string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("failed to create surface: {0}")]
    Surface(String),
    #[error("failed to create renderer: {0}")]
    Renderer(String),
}

/// Display surface, renderer and keyboard as seen by the game loop.
///
/// Teardown methods must be idempotent and never fail; implementations log
/// whatever goes wrong and carry on.
pub trait Platform {
    fn create_surface(
        &mut self,
        title: &str,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Result<(), InitError>;

    fn create_renderer(&mut self) -> Result<(), InitError>;

    /// Next pending event, or `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<PlatformEvent>;

    fn key_state(&mut self) -> KeyState;

    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn present(&mut self);

    fn destroy_renderer(&mut self);

    fn destroy_surface(&mut self);

    fn shutdown(&mut self);

    /// Release everything in reverse creation order.
    fn teardown(&mut self) {
        self.destroy_renderer();
        self.destroy_surface();
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_state_tracks_each_key_independently() {
        let mut state = KeyState::from_held(&[Key::W, Key::K]);
        assert!(state.is_held(Key::W));
        assert!(state.is_held(Key::K));
        assert!(!state.is_held(Key::S));
        assert!(!state.is_held(Key::Escape));

        state.set(Key::W, false);
        assert!(!state.is_held(Key::W));
        assert!(state.is_held(Key::K));

        state.set(Key::K, false);
        assert!(state.is_empty());
    }

    #[test]
    fn init_error_carries_platform_message() {
        let err = InitError::Renderer("terminal too small".to_string());
        assert_eq!(err.to_string(), "failed to create renderer: terminal too small");
    }
}
