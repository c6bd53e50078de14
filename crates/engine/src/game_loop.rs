//! Game loop controller.
//!
//! Owns the platform, the scene and the frame timer. Each iteration runs
//! input, update and output in that order; the loop ends when the scene stops.

use tracing::{debug, info, warn};

use crate::core::{draw_scene, physics, Scene};
use crate::input;
use crate::timer::{Clock, FrameTimer, SystemClock};
use crate::types::{
    InitError, Platform, StopReason, WINDOW_TITLE, WINDOW_X, WINDOW_Y,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

pub struct Game<P: Platform, C: Clock = SystemClock> {
    platform: P,
    scene: Scene,
    timer: FrameTimer<C>,
    state: RunState,
    torn_down: bool,
    ticks: u64,
}

impl<P: Platform> Game<P, SystemClock> {
    pub fn initialize(platform: P, scene: Scene) -> Result<Self, InitError> {
        Self::initialize_with_clock(platform, scene, SystemClock::new())
    }
}

impl<P: Platform, C: Clock> Game<P, C> {
    /// Create the surface and renderer, then enter the running state.
    ///
    /// On failure every platform resource acquired so far is released before
    /// the error is returned.
    pub fn initialize_with_clock(
        mut platform: P,
        scene: Scene,
        clock: C,
    ) -> Result<Self, InitError> {
        let width = scene.config.width as u32;
        let height = scene.config.height as u32;

        let created = platform
            .create_surface(WINDOW_TITLE, WINDOW_X, WINDOW_Y, width, height)
            .and_then(|()| platform.create_renderer());
        if let Err(err) = created {
            platform.teardown();
            warn!(error = %err, "initialization failed");
            return Err(err);
        }

        info!(width, height, balls = scene.balls.len(), "game initialized");
        Ok(Self {
            platform,
            scene,
            timer: FrameTimer::new(clock),
            state: RunState::Running,
            torn_down: false,
            ticks: 0,
        })
    }

    /// Run until the scene stops, then tear the platform down.
    pub fn run_loop(&mut self) -> Option<StopReason> {
        while self.state == RunState::Running {
            self.tick();
        }
        self.shutdown();
        self.scene.stop_reason()
    }

    /// One full iteration: input, update, output. No-op once stopped.
    pub fn tick(&mut self) {
        if self.state == RunState::Stopped {
            return;
        }

        self.process_input();
        self.update_game();
        self.generate_output();
        self.ticks += 1;

        if !self.scene.is_running() {
            self.state = RunState::Stopped;
            info!(reason = ?self.scene.stop_reason(), ticks = self.ticks, "game stopped");
        }
    }

    fn process_input(&mut self) {
        let frame = input::poll(&mut self.platform);
        if frame.quit {
            self.scene.stop(StopReason::Quit);
        } else if frame.escape {
            self.scene.stop(StopReason::Escape);
        }
        self.scene.set_paddle_directions(frame.paddle_dir);
    }

    fn update_game(&mut self) {
        let delta = self.timer.next_delta();
        physics::update(&mut self.scene, delta);
    }

    fn generate_output(&mut self) {
        draw_scene(&mut self.platform, &self.scene);
    }

    /// Release platform resources. Safe to call any number of times.
    pub fn shutdown(&mut self) {
        self.state = RunState::Stopped;
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.platform.teardown();
        debug!(ticks = self.ticks, "platform released");
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn timer(&self) -> &FrameTimer<C> {
        &self.timer
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl<P: Platform, C: Clock> Drop for Game<P, C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
