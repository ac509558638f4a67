//! Animation scheduler
//!
//! Keeps one [`Timeline`] per animated variable and writes interpolated
//! values back into each variable once per frame. Variables of any
//! [`Blend`] type share the same registry.
//!
//! ```
//! use spectrum_animation::{AnimationScheduler, Easing, ManualClock, Var};
//!
//! let clock = ManualClock::new();
//! let mut scheduler = AnimationScheduler::with_clock(clock.clone());
//! let opacity = Var::new(0.0f32);
//!
//! scheduler.start_transition(&opacity, 0.0, 1.0, 2.0, Easing::linear().shared());
//! clock.set(1.0);
//! scheduler.advance();
//! assert_eq!(opacity.get(), 0.5);
//! ```

use std::any::Any;

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::clock::{Clock, SystemClock};
use crate::easing::EasingRef;
use crate::error::{AnimationError, Result};
use crate::keyframe::Keyframe;
use crate::presets::Transition;
use crate::timeline::Timeline;
use crate::values::Blend;
use crate::var::{Var, VarId};

/// Type-erased timeline entry for the registry
trait AnyTrack {
    /// Write the value at `t` into the variable
    fn advance(&mut self, t: f32) -> Result<()>;

    fn is_running(&self, t: f32) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A timeline together with the storage it drives
struct Track<T> {
    var: Var<T>,
    timeline: Timeline<T>,
}

impl<T: Blend> AnyTrack for Track<T> {
    fn advance(&mut self, t: f32) -> Result<()> {
        let value = self.timeline.evaluate(t)?;
        if !self.var.try_set(value) {
            warn!(
                "AnimationScheduler: {:?} is borrowed, skipping frame at {}",
                self.var.id(),
                t
            );
        }
        Ok(())
    }

    fn is_running(&self, t: f32) -> bool {
        self.timeline.is_running(t)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The registry that drives all keyframe animations
///
/// Single-threaded: call [`advance`](Self::advance) exactly once per
/// rendered frame from the thread that owns the animated variables.
pub struct AnimationScheduler<C: Clock = SystemClock> {
    tracks: FxHashMap<VarId, Box<dyn AnyTrack>>,
    clock: C,
}

impl AnimationScheduler<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for AnimationScheduler<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AnimationScheduler<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            tracks: FxHashMap::default(),
            clock,
        }
    }

    /// Current scheduler time in seconds
    pub fn now(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of variables currently animated
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    fn timeline<T: Blend>(&self, var: &Var<T>) -> Option<&Timeline<T>> {
        self.tracks
            .get(&var.id())
            .and_then(|track| track.as_any().downcast_ref::<Track<T>>())
            .map(|track| &track.timeline)
    }

    /// Add a keyframe `dt` seconds from now
    ///
    /// With `dt == 0` the value is also assigned immediately. Use that (with
    /// no easing) to pin the starting point before adding later keyframes.
    pub fn add_keyframe<T: Blend>(
        &mut self,
        var: &Var<T>,
        dt: f32,
        value: T,
        easing: Option<EasingRef>,
    ) {
        if dt == 0.0 {
            var.set(value.clone());
        }
        let keyframe = Keyframe::new(self.now() + dt, value, easing);

        let id = var.id();
        let existing = self
            .tracks
            .get_mut(&id)
            .and_then(|track| track.as_any_mut().downcast_mut::<Track<T>>());
        match existing {
            Some(track) => track.timeline.insert(keyframe),
            None => {
                debug!("AnimationScheduler: new timeline for {:?}", id);
                self.tracks.insert(
                    id,
                    Box::new(Track {
                        var: var.clone(),
                        timeline: Timeline::starting_with(keyframe),
                    }),
                );
            }
        }
    }

    /// Replace any animation of `var` with a transition from `start` to `end`
    ///
    /// A zero `duration` assigns `end` directly and leaves the variable
    /// unanimated.
    pub fn start_transition<T: Blend>(
        &mut self,
        var: &Var<T>,
        start: T,
        end: T,
        duration: f32,
        easing: EasingRef,
    ) {
        self.cancel(var);
        if duration > 0.0 {
            self.add_keyframe(var, 0.0, start, None);
            self.add_keyframe(var, duration, end, Some(easing));
        } else {
            var.set(end);
        }
    }

    /// Retarget `var` to `end`, continuing from its current value
    ///
    /// When interrupting a running animation the new transition is
    /// shortened by the time the old one still had to run, so a reversal
    /// halfway through takes half as long. The variable's value does not
    /// change at the moment of the call unless the shortened duration is 0,
    /// in which case `end` is assigned directly.
    pub fn restart_transition<T: Blend>(
        &mut self,
        var: &Var<T>,
        end: T,
        duration: f32,
        easing: EasingRef,
    ) {
        let mut length = duration;
        if self.is_animated(var) {
            length = (length - self.remaining(var)).max(0.0);
            self.cancel(var);
        }

        if length > 0.0 {
            let current = var.get();
            self.add_keyframe(var, 0.0, current, None);
            self.add_keyframe(var, length, end, Some(easing));
        } else {
            var.set(end);
        }
    }

    /// [`start_transition`](Self::start_transition) using a preset
    pub fn start_with<T: Blend>(
        &mut self,
        var: &Var<T>,
        start: T,
        end: T,
        transition: &Transition,
    ) {
        self.start_transition(
            var,
            start,
            end,
            transition.duration,
            transition.easing.clone(),
        );
    }

    /// [`restart_transition`](Self::restart_transition) using a preset
    pub fn restart_with<T: Blend>(&mut self, var: &Var<T>, end: T, transition: &Transition) {
        self.restart_transition(var, end, transition.duration, transition.easing.clone());
    }

    /// Value of `var`: the live value if `instantaneous`, else the target
    pub fn evaluate<T: Blend>(&self, var: &Var<T>, instantaneous: bool) -> T {
        if instantaneous {
            var.get()
        } else {
            self.target(var)
        }
    }

    pub fn is_animated<T: Blend>(&self, var: &Var<T>) -> bool {
        self.timeline(var).is_some()
    }

    /// Drop the animation of `var`, leaving its current value in place
    pub fn cancel<T: Blend>(&mut self, var: &Var<T>) {
        if self.tracks.remove(&var.id()).is_some() {
            debug!("AnimationScheduler: cancelled timeline for {:?}", var.id());
        }
    }

    /// Starting value of the running animation
    pub fn initial<T: Blend>(&self, var: &Var<T>) -> Result<T> {
        self.timeline(var)
            .ok_or(AnimationError::UnknownVariable("AnimationScheduler::initial"))?
            .initial()
    }

    /// Final value `var` is heading to, or its current value if unanimated
    pub fn target<T: Blend>(&self, var: &Var<T>) -> T {
        self.timeline(var)
            .and_then(|timeline| timeline.target().ok())
            .unwrap_or_else(|| var.get())
    }

    /// Seconds since the animation of `var` started
    pub fn elapsed<T: Blend>(&self, var: &Var<T>) -> Result<f32> {
        let timeline = self
            .timeline(var)
            .ok_or(AnimationError::UnknownVariable("AnimationScheduler::elapsed"))?;
        Ok(timeline.elapsed(self.now()))
    }

    /// Seconds until the animation of `var` ends (0 if unanimated)
    pub fn remaining<T: Blend>(&self, var: &Var<T>) -> f32 {
        self.timeline(var)
            .map_or(0.0, |timeline| timeline.remaining(self.now()))
    }

    /// Tick all animations
    ///
    /// Writes every animated variable's value at the current time, then
    /// retires the timelines whose last keyframe has passed. Their
    /// variables keep the final value.
    pub fn advance(&mut self) {
        let t = self.now();

        self.tracks.retain(|id, track| {
            if let Err(err) = track.advance(t) {
                warn!("AnimationScheduler: dropping {:?}: {}", id, err);
                return false;
            }
            let running = track.is_running(t);
            if !running {
                trace!("AnimationScheduler: {:?} finished at {}", id, t);
            }
            running
        });
    }
}
