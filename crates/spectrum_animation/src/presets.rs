//! Named transition presets
//!
//! Displays refer to transitions by name ("fade", "zoom", ...) so the
//! timing of the whole interface is tuned in one place. The table is built
//! once from configuration and shared by handle with every consumer.
//!
//! Easing definitions use a small text grammar:
//!
//! ```text
//! <shape>[(<param>, ...)][, <phase>]
//! ```
//!
//! with `shape` one of `none`, `linear`, `quadratic(straightness)`,
//! `power(power, subpower, straightness)`, `sine(frequency)` (all parameters
//! optional) and `phase` one of `in` (the default), `out`, `inout`, `outin`.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::easing::{Easing, EasingRef, Phase, Shape, StandardEasing};
use crate::error::{AnimationError, Result};

/// Shared handle to a preset table
pub type SharedPresets = Rc<TransitionPresets>;

/// A named duration/easing pair
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Length in seconds
    pub duration: f32,
    pub easing: EasingRef,
}

impl Transition {
    pub fn new(duration: f32, easing: EasingRef) -> Self {
        Self { duration, easing }
    }

    /// Zero-length transition: the target is assigned at once
    pub fn immediate() -> Self {
        Self::new(0.0, Easing::none().shared())
    }
}

/// Name → transition dictionary
#[derive(Clone, Debug, Default)]
pub struct TransitionPresets {
    transitions: FxHashMap<String, Transition>,
}

impl TransitionPresets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, length, easing definition)` triples
    ///
    /// ```
    /// use spectrum_animation::TransitionPresets;
    ///
    /// let presets = TransitionPresets::from_definitions([
    ///     ("fade", 0.3, "quadratic, out"),
    ///     ("zoom", 0.8, "power(3), inout"),
    /// ])
    /// .unwrap();
    /// assert_eq!(presets.duration("zoom").unwrap(), 0.8);
    /// ```
    pub fn from_definitions<'a, I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f32, &'a str)>,
    {
        let mut presets = Self::new();
        for (name, duration, text) in definitions {
            if !duration.is_finite() || duration < 0.0 {
                return Err(AnimationError::InvalidDuration {
                    name: name.to_string(),
                    duration,
                });
            }
            let easing = parse_easing(text)?;
            presets.add(name, duration, Easing::Standard(easing).shared());
        }
        debug!("TransitionPresets: loaded {} transitions", presets.len());
        Ok(presets)
    }

    /// Insert or replace a transition
    pub fn add(&mut self, name: impl Into<String>, duration: f32, easing: EasingRef) {
        self.transitions
            .insert(name.into(), Transition::new(duration, easing));
    }

    pub fn get(&self, name: &str) -> Result<&Transition> {
        self.transitions
            .get(name)
            .ok_or_else(|| AnimationError::UnknownPreset(name.to_string()))
    }

    pub fn duration(&self, name: &str) -> Result<f32> {
        Ok(self.get(name)?.duration)
    }

    pub fn easing(&self, name: &str) -> Result<EasingRef> {
        Ok(self.get(name)?.easing.clone())
    }

    /// Pick the transition for a call site
    ///
    /// `requested` overrides `default_name` when non-empty; the special
    /// name `"none"` asks for an immediate change.
    pub fn resolve(&self, default_name: &str, requested: &str) -> Result<Transition> {
        match requested {
            "none" => Ok(Transition::immediate()),
            "" => self.get(default_name).cloned(),
            name => self.get(name).cloned(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transitions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }
}

// ============================================================================
// Definition grammar
// ============================================================================

fn malformed(text: &str, reason: &str) -> AnimationError {
    AnimationError::MalformedTransitionText {
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse an easing definition such as `"power(3, 1, 0.5), inout"`
pub fn parse_easing(text: &str) -> Result<StandardEasing> {
    let def = text.trim();

    // The shape clause runs up to the closing parenthesis, if any
    let (shape_clause, rest) = match (def.find('('), def.find(')')) {
        (Some(open), Some(close)) if open < close => (&def[..=close], &def[close + 1..]),
        (None, None) => match def.find(',') {
            Some(comma) => (&def[..comma], &def[comma..]),
            None => (def, ""),
        },
        _ => return Err(malformed(text, "unbalanced parentheses")),
    };

    let rest = rest.trim();
    let phase_word = if rest.is_empty() {
        None
    } else if let Some(word) = rest.strip_prefix(',') {
        Some(word.trim())
    } else {
        return Err(malformed(text, "unexpected text after the shape"));
    };

    let (shape_word, params) = match shape_clause.find('(') {
        Some(open) => {
            let inner = &shape_clause[open + 1..shape_clause.len() - 1];
            (shape_clause[..open].trim(), parse_params(text, inner)?)
        }
        None => (shape_clause.trim(), Vec::new()),
    };

    let shape = Shape::from_name(shape_word)
        .ok_or_else(|| AnimationError::UnknownEasingShape(shape_word.to_string()))?;
    let phase = match phase_word {
        Some(word) => Phase::from_name(word)
            .ok_or_else(|| AnimationError::UnknownEasingPhase(word.to_string()))?,
        None => Phase::In,
    };

    if params.len() > shape.max_params() {
        return Err(AnimationError::TooManyEasingParameters {
            shape: shape.name(),
            max: shape.max_params(),
            found: params.len(),
        });
    }

    check_params(text, shape, &params)?;

    let mut easing = StandardEasing::new(shape).with_phase(phase);
    match (shape, params.as_slice()) {
        (Shape::Quadratic, [s]) => easing = easing.with_straightness(*s),
        (Shape::Sine, [w]) => easing = easing.with_frequency(*w),
        (Shape::Power, [p, rest @ ..]) => {
            easing = easing.with_power(*p);
            if let Some(q) = rest.first() {
                easing = easing.with_subpower(*q);
            }
            if let Some(s) = rest.get(1) {
                easing = easing.with_straightness(*s);
            }
        }
        _ => {}
    }
    Ok(easing)
}

/// Reject parameters for which the curve is undefined somewhere on [0, 1]
fn check_params(text: &str, shape: Shape, params: &[f32]) -> Result<()> {
    if params.iter().any(|p| !p.is_finite()) {
        return Err(malformed(text, "parameters must be finite"));
    }
    match (shape, params) {
        (Shape::Quadratic, [s]) | (Shape::Power, [_, _, s]) if *s == -1.0 => {
            Err(malformed(text, "straightness of -1 divides by zero"))
        }
        (Shape::Power, [p, ..]) if *p <= 0.0 => Err(malformed(text, "power must be positive")),
        (Shape::Power, [_, q, ..]) if *q <= 0.0 => {
            Err(malformed(text, "sub-power must be positive"))
        }
        (Shape::Sine, [w]) if w.sin().abs() < f32::EPSILON => {
            Err(malformed(text, "frequency is a multiple of pi"))
        }
        _ => Ok(()),
    }
}

fn parse_params(text: &str, inner: &str) -> Result<Vec<f32>> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f32>()
                .map_err(|_| malformed(text, &format!("invalid parameter '{}'", p.trim())))
        })
        .collect()
}
