//! Keyframes

use crate::easing::EasingRef;

/// A single keyframe on a variable's timeline
#[derive(Clone, Debug)]
pub struct Keyframe<T> {
    /// Absolute time in seconds on the scheduler clock
    pub time: f32,
    /// Value the variable reaches at `time`
    pub value: T,
    /// Easing used when transitioning TO this keyframe; `None` holds the
    /// previous value until this keyframe is passed
    pub easing: Option<EasingRef>,
}

impl<T> Keyframe<T> {
    pub fn new(time: f32, value: T, easing: Option<EasingRef>) -> Self {
        Self {
            time,
            value,
            easing,
        }
    }

    /// Keyframe with no arrival easing, as used for the starting point
    pub fn at(time: f32, value: T) -> Self {
        Self::new(time, value, None)
    }
}
