//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the game's [`Key`](crate::types::Key) set,
//! tracks which keys are held (including on terminals without key-release
//! events), and turns platform state into one [`InputFrame`](crate::types::InputFrame)
//! per tick.

pub mod held;
pub mod map;
pub mod mapper;

pub use tui_pong_types as types;

pub use held::HeldKeys;
pub use map::{is_quit, key_from_code};
pub use mapper::{paddle_directions, poll};
