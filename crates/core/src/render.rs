//! Scene drawing.
//!
//! Pure mapping from [`Scene`] to platform draw calls. No I/O happens here;
//! the platform decides what "present" means.

use crate::scene::Scene;
use crate::types::{Color, Platform, Rect};

pub const BACKGROUND: Color = Color::BLUE;
pub const FOREGROUND: Color = Color::WHITE;

/// Draw one frame: background, walls, paddles, balls, then present.
pub fn draw_scene<P: Platform + ?Sized>(platform: &mut P, scene: &Scene) {
    platform.clear(BACKGROUND);
    for_each_rect(scene, |rect| platform.fill_rect(rect, FOREGROUND));
    platform.present();
}

/// Visit every foreground rectangle of the scene in draw order.
///
/// Walls first (top, bottom), then paddles, then balls. There is no side wall.
pub fn for_each_rect(scene: &Scene, mut f: impl FnMut(Rect)) {
    let c = &scene.config;
    let width = c.width as i32;
    let thickness = c.thickness as i32;

    f(Rect::new(0, 0, width, thickness));
    f(Rect::new(0, (c.height - c.thickness) as i32, width, thickness));

    for paddle in &scene.paddles {
        f(Rect::new(
            paddle.position.x as i32,
            (paddle.position.y - c.paddle_height / 2.0) as i32,
            thickness,
            c.paddle_height as i32,
        ));
    }

    for ball in &scene.balls {
        f(Rect::new(
            (ball.position.x - c.thickness / 2.0) as i32,
            (ball.position.y - c.thickness / 2.0) as i32,
            thickness,
            thickness,
        ));
    }
}
