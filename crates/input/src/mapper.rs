//! Input mapper: platform events and held keys to an [`InputFrame`].

use crate::types::{InputFrame, Key, KeyState, Platform, PlatformEvent};

/// Paddle intents from held keys.
///
/// Left paddle: `W` up, `S` down. Right paddle: `I` up, `K` down.
/// Holding both keys of a pair cancels out to 0.
pub fn paddle_directions(keys: &KeyState) -> [i8; 2] {
    let axis = |up: Key, down: Key| -> i8 {
        let mut dir = 0;
        if keys.is_held(up) {
            dir -= 1;
        }
        if keys.is_held(down) {
            dir += 1;
        }
        dir
    };
    [axis(Key::W, Key::S), axis(Key::I, Key::K)]
}

/// Drain every pending platform event, then sample the held keys.
pub fn poll<P: Platform + ?Sized>(platform: &mut P) -> InputFrame {
    let mut quit = false;
    while let Some(event) = platform.poll_event() {
        match event {
            PlatformEvent::Quit => quit = true,
        }
    }

    let keys = platform.key_state();
    InputFrame {
        quit,
        escape: keys.is_held(Key::Escape),
        paddle_dir: paddle_directions(&keys),
    }
}
