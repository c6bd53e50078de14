//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the scene and everything that mutates or reads it.
//! It has **zero dependencies** on terminals, clocks, or I/O:
//!
//! - **Deterministic**: the same scene and delta always produce the same result
//! - **Testable**: every collision rule is exercised by unit tests
//! - **Allocation-free ticks**: [`physics::update`] never touches the heap
//!
//! # Module Structure
//!
//! - [`scene`]: paddles, balls, and the running/stopped flag
//! - [`physics`]: paddle motion, ball integration, collision and game-over
//! - [`render`]: maps a scene onto platform draw calls
//!
//! # Example
//!
//! ```
//! use tui_pong_core::{physics, Scene};
//!
//! let mut scene = Scene::default();
//! scene.set_paddle_directions([1, 0]);
//! physics::update(&mut scene, 0.016);
//!
//! assert!(scene.is_running());
//! assert!(scene.paddles[0].position.y > 384.0);
//! ```

pub mod physics;
pub mod render;
pub mod scene;

pub use tui_pong_types as types;

pub use render::{draw_scene, for_each_rect};
pub use scene::{Ball, Paddle, Scene};
