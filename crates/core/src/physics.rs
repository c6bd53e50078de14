//! Physics and collision.
//!
//! One call to [`update`] advances the scene by one tick:
//!
//! 1. Paddles move by their direction and are hard-clamped to the field.
//! 2. Every ball integrates its velocity.
//! 3. Each ball may bounce off at most one paddle (left is checked first).
//! 4. Any ball at or past the left/right edge stops the game.
//! 5. Balls reflect off the top and bottom walls.
//!
//! Steps 3-5 run for every ball regardless of what happened to other balls.

use crate::scene::{Ball, Paddle, Scene};
use crate::types::{FieldConfig, PaddleSide, StopReason, MAX_DELTA_SECS};

/// Advance the scene by `delta` seconds (clamped to [`MAX_DELTA_SECS`]).
pub fn update(scene: &mut Scene, delta: f32) {
    let delta = delta.min(MAX_DELTA_SECS);
    let config = scene.config;

    move_paddles(&mut scene.paddles, &config, delta);

    let mut exited = None;
    for (index, ball) in scene.balls.iter_mut().enumerate() {
        ball.position += ball.velocity * delta;

        paddle_bounce(ball, &scene.paddles, &config);

        if has_exited(ball, &config) && exited.is_none() {
            exited = Some(index);
        }

        reflect_walls(ball, &config);
    }

    if let Some(index) = exited {
        scene.stop(StopReason::BallExited { index });
    }
}

fn move_paddles(paddles: &mut [Paddle; 2], config: &FieldConfig, delta: f32) {
    for paddle in paddles.iter_mut() {
        if paddle.direction == 0 {
            continue;
        }
        paddle.position.y += f32::from(paddle.direction) * config.paddle_speed * delta;
        paddle.position.y = paddle
            .position
            .y
            .clamp(config.paddle_y_min(), config.paddle_y_max());
    }
}

/// Flip `velocity.x` if the ball is at a paddle and moving toward it.
///
/// Returns the paddle that returned the ball, if any.
pub fn paddle_bounce(
    ball: &mut Ball,
    paddles: &[Paddle; 2],
    config: &FieldConfig,
) -> Option<PaddleSide> {
    let side = PaddleSide::BOTH.into_iter().find(|&side| {
        let paddle = &paddles[side.index()];
        let diff = (paddle.position.y - ball.position.y).abs();
        if diff > config.paddle_height / 2.0 {
            return false;
        }
        match side {
            PaddleSide::Left => ball.position.x <= config.paddle_hit_x && ball.velocity.x < 0.0,
            PaddleSide::Right => {
                ball.position.x >= config.right_paddle_x() && ball.velocity.x > 0.0
            }
        }
    })?;

    ball.velocity.x = -ball.velocity.x;
    Some(side)
}

pub fn has_exited(ball: &Ball, config: &FieldConfig) -> bool {
    ball.position.x <= 0.0 || ball.position.x >= config.right_exit_x()
}

fn reflect_walls(ball: &mut Ball, config: &FieldConfig) {
    if ball.position.y <= config.thickness && ball.velocity.y < 0.0 {
        ball.velocity.y = -ball.velocity.y;
    } else if ball.position.y >= config.height - config.thickness && ball.velocity.y > 0.0 {
        ball.velocity.y = -ball.velocity.y;
    }
}
