//! Animation error types

use thiserror::Error;

/// Errors raised by the animation engine and the transition preset table
#[derive(Error, Debug)]
pub enum AnimationError {
    /// A strict accessor was called on a variable with no running animation
    #[error("Unknown animation variable ({0})")]
    UnknownVariable(&'static str),

    /// A timeline was queried while it had no keyframes
    #[error("No keyframes in animation ({0})")]
    EmptyAnimation(&'static str),

    /// Lookup of a transition name that was never defined
    #[error("Transition '{0}' cannot be found in the preset table")]
    UnknownPreset(String),

    /// Badly formed transition definition text
    #[error("Malformed transition definition '{text}': {reason}")]
    MalformedTransitionText { text: String, reason: String },

    /// Shape keyword not in {none, linear, quadratic, power, sine}
    #[error("Unknown easing shape '{0}'")]
    UnknownEasingShape(String),

    /// Phase keyword not in {in, out, inout, outin}
    #[error("Unknown easing phase '{0}'")]
    UnknownEasingPhase(String),

    /// More parameters than the shape accepts
    #[error("Too many parameters for {shape} easing: expected at most {max}, found {found}")]
    TooManyEasingParameters {
        shape: &'static str,
        max: usize,
        found: usize,
    },

    /// Preset length that is negative or not finite
    #[error("Invalid length {duration} for transition '{name}'")]
    InvalidDuration { name: String, duration: f32 },

    /// Preset table document could not be deserialized
    #[error("Failed to read transition presets: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
