//! Terminal platform module.
//!
//! Realises the game's platform contract on a terminal with crossterm:
//!
//! - [`fb`]: framebuffer of colored cells
//! - [`projection`]: scales the 1024x768 logical field onto the cell grid
//! - [`renderer`]: writes a framebuffer, diffing against the previous frame
//! - [`platform`]: [`TerminalPlatform`], the surface/renderer/keyboard shim
//!
//! Everything except [`platform`] is pure and unit-tested without a terminal.

pub mod fb;
pub mod platform;
pub mod projection;
pub mod renderer;

pub use tui_pong_input as input;
pub use tui_pong_types as types;

pub use fb::{Cell, FrameBuffer, Rgb};
pub use platform::{TerminalPlatform, MIN_COLS, MIN_ROWS};
pub use projection::{CellRect, Projection};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
