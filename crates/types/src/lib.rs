//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain values with no I/O, making them usable in any context
//! (physics, rendering, input mapping, the terminal shim).
//!
//! # Field Dimensions
//!
//! The play field is a fixed logical surface; the terminal shim projects it
//! onto whatever grid of cells is available.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WINDOW_WIDTH` | 1024 | Logical field width |
//! | `WINDOW_HEIGHT` | 768 | Logical field height |
//! | `THICKNESS` | 15 | Wall thickness, paddle width, ball size |
//! | `PADDLE_HEIGHT` | 100 | Paddle height |
//! | `PADDLE_SPEED` | 300 | Paddle speed in units per second |
//!
//! # Timing
//!
//! - `FRAME_MS`: 16ms minimum frame interval (~60 FPS)
//! - `MAX_DELTA_SECS`: 0.05s upper bound on a single physics step
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{FieldConfig, Vector2, PADDLE_HEIGHT, THICKNESS};
//!
//! let field = FieldConfig::default();
//! assert_eq!(field.paddle_y_min(), PADDLE_HEIGHT / 2.0 + THICKNESS);
//!
//! let pos = Vector2::new(512.0, 384.0) + Vector2::new(-200.0, 235.0) * 0.016;
//! assert!((pos.x - 508.8).abs() < 1e-3);
//! ```

use std::ops::{Add, AddAssign, Mul, Sub};

pub mod platform;

pub use platform::{Color, InitError, Key, KeyState, Platform, PlatformEvent, Rect};

/// Logical field width.
pub const WINDOW_WIDTH: f32 = 1024.0;

/// Logical field height.
pub const WINDOW_HEIGHT: f32 = 768.0;

/// Wall thickness; also the paddle width and the ball edge length.
pub const THICKNESS: f32 = 15.0;

/// Paddle height.
pub const PADDLE_HEIGHT: f32 = 100.0;

/// Paddle speed in field units per second.
pub const PADDLE_SPEED: f32 = 300.0;

/// Distance from the field edge to the left edge of a paddle.
pub const PADDLE_INSET: f32 = 10.0;

/// A ball at or left of this x can be returned by the left paddle.
pub const PADDLE_HIT_X: f32 = 25.0;

/// Minimum frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u64 = 16;

/// Largest delta time handed to physics, in seconds.
pub const MAX_DELTA_SECS: f32 = 0.05;

/// Title shown for the display surface.
pub const WINDOW_TITLE: &str = "tui-pong";

/// Requested surface origin. Terminals ignore it.
pub const WINDOW_X: i32 = 100;
pub const WINDOW_Y: i32 = 100;

/// 2D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Immutable field geometry shared by physics and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub paddle_hit_x: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            thickness: THICKNESS,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
            paddle_hit_x: PADDLE_HIT_X,
        }
    }
}

impl FieldConfig {
    /// Lowest allowed paddle center y.
    pub fn paddle_y_min(&self) -> f32 {
        self.paddle_height / 2.0 + self.thickness
    }

    /// Highest allowed paddle center y.
    pub fn paddle_y_max(&self) -> f32 {
        self.height - self.paddle_height / 2.0 - self.thickness
    }

    /// X of the left edge of the right paddle. Also its collision boundary.
    pub fn right_paddle_x(&self) -> f32 {
        self.width - self.paddle_inset - self.thickness
    }

    /// A ball at or beyond this x has left the field on the right.
    pub fn right_exit_x(&self) -> f32 {
        self.width - self.thickness
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Left or right paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleSide {
    Left,
    Right,
}

impl PaddleSide {
    pub const BOTH: [PaddleSide; 2] = [PaddleSide::Left, PaddleSide::Right];

    pub fn index(self) -> usize {
        match self {
            PaddleSide::Left => 0,
            PaddleSide::Right => 1,
        }
    }
}

/// Result of one input poll.
///
/// `paddle_dir` holds -1 (up), 0 or +1 (down) per paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    pub quit: bool,
    pub escape: bool,
    pub paddle_dir: [i8; 2],
}

impl InputFrame {
    pub fn should_stop(&self) -> bool {
        self.quit || self.escape
    }
}

/// Why the game loop left the running state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The platform delivered a quit signal.
    Quit,
    /// Escape was held during an input poll.
    Escape,
    /// The ball at `index` crossed the left or right edge.
    BallExited { index: usize },
}
