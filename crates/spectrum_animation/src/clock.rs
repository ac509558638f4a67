//! Time sources for the animation scheduler
//!
//! All animation times are seconds, as `f32`, measured from the moment the
//! clock was created. There is no reset: keyframe times are absolute, so
//! moving a running scheduler's time origin would misplace every timeline.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A monotonic source of elapsed time
pub trait Clock {
    /// Seconds elapsed since the clock started
    fn elapsed(&self) -> f32;
}

/// Wall clock backed by [`Instant`]
#[derive(Clone, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Externally driven clock
///
/// Clones share the same underlying time, so a test (or an offline renderer
/// stepping frame by frame) can keep one handle and give another to the
/// scheduler.
///
/// ```
/// use spectrum_animation::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// clock.advance(0.25);
/// assert_eq!(handle.elapsed(), 0.25);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f32>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to an absolute time
    pub fn set(&self, seconds: f32) {
        self.now.set(seconds);
    }

    /// Move time forward by `dt` seconds
    pub fn advance(&self, dt: f32) {
        self.now.set(self.now.get() + dt);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> f32 {
        self.now.get()
    }
}
