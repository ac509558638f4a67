//! Animation of values that cannot be blended
//!
//! Modes, labels and other enumerated state can't be interpolated, but a
//! change between two of them can still be animated: keep both ends and
//! animate a plain `f32` progress from 0 to 1. Rendering code then
//! cross-fades (or switches) between `initial` and `target` by `progress`.

use crate::clock::Clock;
use crate::presets::Transition;
use crate::scheduler::AnimationScheduler;
use crate::var::Var;

/// A discrete value plus the progress of its latest change
///
/// Cloning copies the progress into fresh storage: the clone animates
/// independently of the original.
#[derive(Debug)]
pub struct Discrete<T> {
    pub initial: T,
    pub target: T,
    /// 0 at the start of a change, 1 once it is complete
    pub progress: Var<f32>,
}

impl<T: Clone> Discrete<T> {
    pub fn new(value: T) -> Self {
        Self {
            initial: value.clone(),
            target: value,
            progress: Var::new(1.0),
        }
    }

    /// Set the value outright, as if no change were in flight
    ///
    /// Does not cancel a running progress animation; use
    /// [`cancel`](Self::cancel) first if one may be active.
    pub fn assign(&mut self, value: T) {
        self.initial = value.clone();
        self.target = value;
        self.progress.set(1.0);
    }

    /// Begin a change from the current target to `value`
    pub fn transition_to<C: Clock>(
        &mut self,
        scheduler: &mut AnimationScheduler<C>,
        value: T,
        transition: &Transition,
    ) {
        self.initial = std::mem::replace(&mut self.target, value);
        scheduler.start_with(&self.progress, 0.0, 1.0, transition);
    }

    pub fn is_animated<C: Clock>(&self, scheduler: &AnimationScheduler<C>) -> bool {
        scheduler.is_animated(&self.progress)
    }

    /// Stop the change and snap to the target
    pub fn cancel<C: Clock>(&mut self, scheduler: &mut AnimationScheduler<C>) {
        scheduler.cancel(&self.progress);
        self.progress.set(1.0);
    }

    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    /// The value to show when only one can be shown
    pub fn current(&self) -> &T {
        if self.progress() < 0.5 {
            &self.initial
        } else {
            &self.target
        }
    }
}

impl<T: Clone> Clone for Discrete<T> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            target: self.target.clone(),
            progress: Var::new(self.progress()),
        }
    }
}

impl<T: Clone + Default> Default for Discrete<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
