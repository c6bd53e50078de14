//! Frame pacing.
//!
//! [`FrameTimer::next_delta`] blocks until at least [`FRAME_MS`] have passed
//! since the previous frame, then returns the elapsed time in seconds,
//! clamped to [`MAX_DELTA_SECS`].

use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

use crate::types::{FRAME_MS, MAX_DELTA_SECS};

/// Millisecond time source the timer waits on.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;

    /// Block the calling thread for roughly `ms` milliseconds.
    fn wait_ms(&self, ms: u64);
}

/// Wall clock backed by [`Instant`] and [`thread::sleep`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn wait_ms(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Clock that only moves when told to. Waiting advances it instantly.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    waited: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
            waited: Cell::new(0),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Total milliseconds spent in [`Clock::wait_ms`].
    pub fn waited_ms(&self) -> u64 {
        self.waited.get()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn wait_ms(&self, ms: u64) {
        self.waited.set(self.waited.get() + ms);
        self.advance(ms);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn wait_ms(&self, ms: u64) {
        (**self).wait_ms(ms)
    }
}

#[derive(Debug)]
pub struct FrameTimer<C: Clock> {
    clock: C,
    last_ms: u64,
    min_frame_ms: u64,
    max_delta: f32,
}

impl<C: Clock> FrameTimer<C> {
    /// The first frame is measured from construction time.
    pub fn new(clock: C) -> Self {
        let last_ms = clock.now_ms();
        Self {
            clock,
            last_ms,
            min_frame_ms: FRAME_MS,
            max_delta: MAX_DELTA_SECS,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Wait out the rest of the frame and return the clamped delta in seconds.
    pub fn next_delta(&mut self) -> f32 {
        let now = loop {
            let now = self.clock.now_ms();
            let elapsed = now.saturating_sub(self.last_ms);
            if elapsed >= self.min_frame_ms {
                break now;
            }
            self.clock.wait_ms(self.min_frame_ms - elapsed);
        };

        let delta = (now - self.last_ms) as f32 / 1000.0;
        self.last_ms = now;
        delta.min(self.max_delta)
    }
}
