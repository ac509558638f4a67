//! Per-variable keyframe timelines
//!
//! A [`Timeline`] holds the keyframes scheduled for one variable, ordered by
//! absolute time, and evaluates the interpolated value at any query time.

use smallvec::SmallVec;

use crate::error::{AnimationError, Result};
use crate::keyframe::Keyframe;
use crate::values::Blend;

/// Ordered keyframes for one animated variable
///
/// Keyframe times are strictly increasing; inserting at an existing time
/// replaces the keyframe there.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    // Most timelines are a plain start/end transition
    keyframes: SmallVec<[Keyframe<T>; 2]>,
}

impl<T: Blend> Timeline<T> {
    pub fn new() -> Self {
        Self {
            keyframes: SmallVec::new(),
        }
    }

    /// Timeline starting with a single keyframe
    pub fn starting_with(keyframe: Keyframe<T>) -> Self {
        let mut timeline = Self::new();
        timeline.insert(keyframe);
        timeline
    }

    /// Add a keyframe, replacing any keyframe at the same time
    pub fn insert(&mut self, keyframe: Keyframe<T>) {
        let idx = self.keyframes.partition_point(|k| k.time < keyframe.time);
        match self.keyframes.get_mut(idx) {
            Some(existing) if existing.time == keyframe.time => *existing = keyframe,
            _ => self.keyframes.insert(idx, keyframe),
        }
    }

    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Whether some keyframe lies at or after `t`
    pub fn is_running(&self, t: f32) -> bool {
        self.keyframes.last().is_some_and(|k| k.time >= t)
    }

    /// Interpolated value at time `t`
    ///
    /// Before the first keyframe this is the initial value, after the last
    /// it is the target. In between, the arrival easing of the upcoming
    /// keyframe weights the blend from the previous one.
    pub fn evaluate(&self, t: f32) -> Result<T> {
        if self.keyframes.is_empty() {
            return Err(AnimationError::EmptyAnimation("Timeline::evaluate"));
        }

        let idx = self.keyframes.partition_point(|k| k.time < t);
        if idx == self.keyframes.len() {
            return self.target();
        }
        if idx == 0 {
            return self.initial();
        }

        let prev = &self.keyframes[idx - 1];
        let next = &self.keyframes[idx];

        let span = next.time - prev.time;
        let f = if span > 0.0 { (t - prev.time) / span } else { 1.0 };
        let x = next.easing.as_ref().map_or(0.0, |e| e.apply(f));

        Ok(prev.value.blend(&next.value, x))
    }

    /// Value of the first keyframe
    pub fn initial(&self) -> Result<T> {
        self.keyframes
            .first()
            .map(|k| k.value.clone())
            .ok_or(AnimationError::EmptyAnimation("Timeline::initial"))
    }

    /// Value of the last keyframe
    pub fn target(&self) -> Result<T> {
        self.keyframes
            .last()
            .map(|k| k.value.clone())
            .ok_or(AnimationError::EmptyAnimation("Timeline::target"))
    }

    /// Time since the first keyframe (0 when empty)
    pub fn elapsed(&self, t: f32) -> f32 {
        self.keyframes.first().map_or(0.0, |k| t - k.time)
    }

    /// Time until the last keyframe (0 when empty)
    pub fn remaining(&self, t: f32) -> f32 {
        self.keyframes.last().map_or(0.0, |k| k.time - t)
    }
}

impl<T: Blend> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
