//! Game engine: frame pacing and the run loop.
//!
//! Wires the pieces together. Each tick of [`Game`] does, in order:
//!
//! 1. [`input::poll`](crate::input::poll) drains platform events and samples held keys
//! 2. [`FrameTimer::next_delta`] waits out the 16ms frame and yields a clamped delta
//! 3. [`physics::update`](crate::core::physics::update) advances the scene
//! 4. [`draw_scene`](crate::core::draw_scene) renders and presents
//!
//! The loop is single-threaded; the only blocking point is the frame timer.

pub mod game_loop;
pub mod timer;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_types as types;

pub use game_loop::{Game, RunState};
pub use timer::{Clock, FrameTimer, ManualClock, SystemClock};
