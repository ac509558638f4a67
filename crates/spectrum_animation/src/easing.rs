//! Easing functions for animations
//!
//! An easing maps normalized progress `x` in `[0, 1]` to a blend weight.
//! Standard easings are a shape (`linear`, `quadratic`, `power`, `sine`, or
//! the abrupt `none`) combined with a phase (`in`, `out`, `inout`, `outin`).
//! Composite easings chain other easings through a list of checkpoints.

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::rc::Rc;

/// Shared handle to an easing, held by presets and keyframes alike
pub type EasingRef = Rc<Easing>;

/// Easing function type
#[derive(Clone, Debug, PartialEq)]
pub enum Easing {
    Standard(StandardEasing),
    Composite(CompositeEasing),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, x: f32) -> f32 {
        match self {
            Easing::Standard(e) => e.apply(x),
            Easing::Composite(e) => e.apply(x),
        }
    }

    /// Wrap into a shareable handle
    pub fn shared(self) -> EasingRef {
        Rc::new(self)
    }

    pub fn none() -> Self {
        Easing::Standard(StandardEasing::new(Shape::None))
    }

    pub fn linear() -> Self {
        Easing::Standard(StandardEasing::new(Shape::Linear))
    }

    pub fn quadratic(phase: Phase) -> Self {
        Easing::Standard(StandardEasing::new(Shape::Quadratic).with_phase(phase))
    }

    pub fn sine(phase: Phase) -> Self {
        Easing::Standard(StandardEasing::new(Shape::Sine).with_phase(phase))
    }
}

impl From<StandardEasing> for Easing {
    fn from(e: StandardEasing) -> Self {
        Easing::Standard(e)
    }
}

impl From<CompositeEasing> for Easing {
    fn from(e: CompositeEasing) -> Self {
        Easing::Composite(e)
    }
}

// ============================================================================
// Standard easing
// ============================================================================

/// Base curve of a standard easing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Abrupt: always 0, the value jumps once the keyframe is passed
    None,
    Linear,
    Quadratic,
    Power,
    Sine,
}

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::None => "none",
            Shape::Linear => "linear",
            Shape::Quadratic => "quadratic",
            Shape::Power => "power",
            Shape::Sine => "sine",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Shape::None),
            "linear" => Some(Shape::Linear),
            "quadratic" => Some(Shape::Quadratic),
            "power" => Some(Shape::Power),
            "sine" => Some(Shape::Sine),
            _ => None,
        }
    }

    /// Number of numeric parameters the shape accepts in a definition
    pub fn max_params(self) -> usize {
        match self {
            Shape::None | Shape::Linear => 0,
            Shape::Quadratic | Shape::Sine => 1,
            Shape::Power => 3,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the base curve is applied over the progress range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    In,
    Out,
    InOut,
    OutIn,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::In => "in",
            Phase::Out => "out",
            Phase::InOut => "inout",
            Phase::OutIn => "outin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "in" => Some(Phase::In),
            "out" => Some(Phase::Out),
            "inout" => Some(Phase::InOut),
            "outin" => Some(Phase::OutIn),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shape/phase pair with its tuning parameters
///
/// - `quadratic(x) = x (x + s) / (1 + s)`
/// - `power(x) = (x^p + s x^q) / (1 + s)`
/// - `sine(x) = sin(w x) / sin(w)`
///
/// where `s` is the straightness, `p` the power, `q` the sub-power and `w`
/// the angular frequency.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardEasing {
    shape: Shape,
    phase: Phase,
    power: f32,
    subpower: f32,
    straightness: f32,
    frequency: f32,
}

impl StandardEasing {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            phase: Phase::In,
            power: 2.0,
            subpower: 1.0,
            straightness: 0.0,
            frequency: FRAC_PI_2,
        }
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_power(mut self, power: f32) -> Self {
        self.power = power;
        self
    }

    pub fn with_subpower(mut self, subpower: f32) -> Self {
        self.subpower = subpower;
        self
    }

    pub fn with_straightness(mut self, straightness: f32) -> Self {
        self.straightness = straightness;
        self
    }

    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn apply(&self, x: f32) -> f32 {
        // phase has no effect on these
        match self.shape {
            Shape::None => return 0.0,
            Shape::Linear => return x,
            _ => {}
        }

        match self.phase {
            Phase::In => self.base(x),
            Phase::Out => 1.0 - self.base(1.0 - x),
            Phase::InOut => {
                if x <= 0.5 {
                    0.5 * self.base(2.0 * x)
                } else {
                    0.5 * (2.0 - self.base(2.0 - 2.0 * x))
                }
            }
            Phase::OutIn => {
                if x <= 0.5 {
                    0.5 * (1.0 - self.base(1.0 - 2.0 * x))
                } else {
                    0.5 * (1.0 + self.base(2.0 * x - 1.0))
                }
            }
        }
    }

    fn base(&self, x: f32) -> f32 {
        let s = self.straightness;
        match self.shape {
            Shape::None => 0.0,
            Shape::Linear => x,
            Shape::Quadratic => x * (x + s) / (1.0 + s),
            // expanded so that a power below the sub-power stays finite at 0
            Shape::Power => (x.powf(self.power) + s * x.powf(self.subpower)) / (1.0 + s),
            Shape::Sine => (self.frequency * x).sin() / self.frequency.sin(),
        }
    }
}

impl Default for StandardEasing {
    fn default() -> Self {
        Self::new(Shape::None)
    }
}

// ============================================================================
// Composite easing
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Checkpoint {
    time: f32,
    value: f32,
    easing: EasingRef,
}

/// Piecewise easing built from checkpoints
///
/// Each checkpoint `(t, x, easing)` means "reach `x` by time `t`, getting
/// there through `easing` from the previous checkpoint (or from 0)". Past
/// the last checkpoint the result is 1, even when that checkpoint sits
/// before `t = 1`.
///
/// ```
/// use spectrum_animation::{CompositeEasing, Easing};
///
/// let bounce = CompositeEasing::new()
///     .checkpoint(0.5, 1.2, Easing::linear().shared())
///     .checkpoint(1.0, 1.0, Easing::linear().shared());
/// assert!((bounce.apply(0.25) - 0.6).abs() < 1e-6);
/// assert!((bounce.apply(0.75) - 1.1).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompositeEasing {
    checkpoints: Vec<Checkpoint>,
}

impl CompositeEasing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a checkpoint, replacing any existing one at `time`
    pub fn checkpoint(mut self, time: f32, value: f32, easing: EasingRef) -> Self {
        self.add(time, value, easing);
        self
    }

    pub fn add(&mut self, time: f32, value: f32, easing: EasingRef) {
        let idx = self.checkpoints.partition_point(|c| c.time < time);
        let checkpoint = Checkpoint {
            time,
            value,
            easing,
        };
        match self.checkpoints.get_mut(idx) {
            Some(existing) if existing.time == time => *existing = checkpoint,
            _ => self.checkpoints.insert(idx, checkpoint),
        }
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn apply(&self, t: f32) -> f32 {
        let idx = self.checkpoints.partition_point(|c| c.time < t);
        let Some(next) = self.checkpoints.get(idx) else {
            return 1.0;
        };

        let (t0, x0) = match idx.checked_sub(1) {
            Some(prev) => (self.checkpoints[prev].time, self.checkpoints[prev].value),
            None => (0.0, 0.0),
        };

        let span = next.time - t0;
        let local = if span > 0.0 { (t - t0) / span } else { 1.0 };
        x0 + (next.value - x0) * next.easing.apply(local)
    }
}
