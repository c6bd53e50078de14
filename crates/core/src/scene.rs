//! Scene state: two paddles, the balls in play, and the run flag.

use crate::types::{FieldConfig, PaddleSide, StopReason, Vector2};

/// A paddle, identified by its slot in [`Scene::paddles`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// `x` is the paddle's left edge, `y` its vertical center.
    pub position: Vector2,
    /// -1 (up), 0 or +1 (down). Overwritten every tick from input.
    pub direction: i8,
}

impl Paddle {
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            direction: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vector2,
    pub velocity: Vector2,
}

impl Ball {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self { position, velocity }
    }
}

/// The complete mutable simulation snapshot for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub config: FieldConfig,
    pub paddles: [Paddle; 2],
    pub balls: Vec<Ball>,
    stop_reason: Option<StopReason>,
}

impl Scene {
    /// Paddles centered vertically at their insets, with the given balls.
    pub fn new(config: FieldConfig, balls: Vec<Ball>) -> Self {
        let mid_y = config.height / 2.0;
        Self {
            config,
            paddles: [
                Paddle::new(Vector2::new(config.paddle_inset, mid_y)),
                Paddle::new(Vector2::new(config.right_paddle_x(), mid_y)),
            ],
            balls,
            stop_reason: None,
        }
    }

    /// Two balls from the field center, heading in opposite directions.
    pub fn with_default_balls(config: FieldConfig) -> Self {
        let center = config.center();
        Self::new(
            config,
            vec![
                Ball::new(center, Vector2::new(-200.0, 235.0)),
                Ball::new(center, Vector2::new(100.0, -150.0)),
            ],
        )
    }

    pub fn single_ball(config: FieldConfig) -> Self {
        let center = config.center();
        Self::new(config, vec![Ball::new(center, Vector2::new(-200.0, 235.0))])
    }

    pub fn paddle(&self, side: PaddleSide) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: PaddleSide) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn set_paddle_directions(&mut self, dirs: [i8; 2]) {
        for (paddle, dir) in self.paddles.iter_mut().zip(dirs) {
            paddle.direction = dir.signum();
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_reason.is_none()
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// Leave the running state. The first recorded reason is kept.
    pub fn stop(&mut self, reason: StopReason) {
        if self.stop_reason.is_none() {
            self.stop_reason = Some(reason);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::with_default_balls(FieldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_layout() {
        let scene = Scene::default();
        assert!(scene.is_running());
        assert_eq!(scene.paddle(PaddleSide::Left).position, Vector2::new(10.0, 384.0));
        assert_eq!(scene.paddle(PaddleSide::Right).position, Vector2::new(999.0, 384.0));
        assert_eq!(scene.balls.len(), 2);
        assert_eq!(scene.balls[0].position, Vector2::new(512.0, 384.0));
        assert_eq!(scene.balls[0].velocity, Vector2::new(-200.0, 235.0));
        assert_eq!(scene.balls[1].velocity, Vector2::new(100.0, -150.0));
    }

    #[test]
    fn single_ball_is_first_default_ball() {
        let single = Scene::single_ball(FieldConfig::default());
        let multi = Scene::default();
        assert_eq!(single.balls.as_slice(), &multi.balls[..1]);
    }

    #[test]
    fn first_stop_reason_wins() {
        let mut scene = Scene::default();
        scene.stop(StopReason::BallExited { index: 1 });
        scene.stop(StopReason::Quit);
        assert!(!scene.is_running());
        assert_eq!(scene.stop_reason(), Some(StopReason::BallExited { index: 1 }));
    }

    #[test]
    fn paddle_directions_are_normalized() {
        let mut scene = Scene::default();
        scene.set_paddle_directions([-3, 2]);
        assert_eq!(scene.paddles[0].direction, -1);
        assert_eq!(scene.paddles[1].direction, 1);
    }
}
