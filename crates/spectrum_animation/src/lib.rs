//! Spectrum Animation System
//!
//! Keyframe animation of in-memory values for the spectrum visualizer.
//!
//! # Features
//!
//! - **Keyframe Timelines**: Timed sequences per variable, each keyframe with
//!   its own arrival easing
//! - **Scheduler**: One registry for variables of every blendable type,
//!   advanced once per frame
//! - **Easing**: Standard shape/phase curves and composite chains
//! - **Presets**: Named transitions loaded from configuration
//! - **Interruptible**: Retargeting a running animation keeps the value
//!   continuous

pub mod clock;
pub mod config;
pub mod discrete;
pub mod easing;
pub mod error;
pub mod keyframe;
pub mod presets;
pub mod scheduler;
pub mod timeline;
pub mod values;
pub mod var;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{PresetsConfig, TransitionConfig};
pub use discrete::Discrete;
pub use easing::{CompositeEasing, Easing, EasingRef, Phase, Shape, StandardEasing};
pub use error::{AnimationError, Result};
pub use keyframe::Keyframe;
pub use presets::{parse_easing, SharedPresets, Transition, TransitionPresets};
pub use scheduler::AnimationScheduler;
pub use timeline::Timeline;
pub use values::{Blend, Color, Rect, Vec2};
pub use var::{Var, VarId};
