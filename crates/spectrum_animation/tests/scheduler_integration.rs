//! Integration tests for the scheduler, presets and discrete values
//!
//! These tests drive the engine the way a display does: presets loaded from
//! configuration and shared by handle, several variables of different types
//! animated together, and one `advance()` per simulated frame.

use std::rc::Rc;

use spectrum_animation::{
    AnimationScheduler, Color, CompositeEasing, Discrete, Easing, ManualClock, Rect,
    SharedPresets, TransitionPresets, Var, Vec2,
};

const PRESETS: &str = r#"
    [transitions]
    open = { length = 1.0, easing = "linear" }
    fade = { length = 0.5, easing = "quadratic, inout" }
    zoom = { length = 2.0, easing = "sine, out" }
"#;

const FRAME: f32 = 1.0 / 60.0;

/// Route engine logs to the test output (filter with `RUST_LOG`)
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Display {
    presets: SharedPresets,
    region: Var<Rect>,
    opacity: Var<f32>,
    color: Var<Color>,
    mode: Discrete<&'static str>,
}

impl Display {
    fn new(presets: SharedPresets) -> Self {
        Self {
            presets,
            region: Var::new(Rect::ZERO),
            opacity: Var::new(0.0),
            color: Var::new(Color::BLACK),
            mode: Discrete::new("spectrum"),
        }
    }
}

fn run_frames(clock: &ManualClock, sched: &mut AnimationScheduler<ManualClock>, frames: usize) {
    for _ in 0..frames {
        clock.advance(FRAME);
        sched.advance();
    }
}

/// Test that a display opening animates several types from shared presets
#[test]
fn test_display_open_sequence() {
    init_tracing();
    let presets: SharedPresets = Rc::new(TransitionPresets::from_toml_str(PRESETS).unwrap());
    let clock = ManualClock::new();
    let mut sched = AnimationScheduler::with_clock(clock.clone());
    let display = Display::new(Rc::clone(&presets));

    let open = display.presets.get("open").unwrap().clone();
    sched.start_with(
        &display.region,
        Rect::new(50.0, 50.0, 0.0, 0.0),
        Rect::new(0.0, 0.0, 100.0, 100.0),
        &open,
    );
    sched.start_with(&display.opacity, 0.0, 1.0, &open);
    assert_eq!(sched.len(), 2);

    // Halfway through
    clock.set(0.5);
    sched.advance();
    let region = display.region.get();
    assert!((region.x - 25.0).abs() < 1e-4);
    assert!((region.width - 50.0).abs() < 1e-4);
    assert!((display.opacity.get() - 0.5).abs() < 1e-5);

    // Past the end, everything settles on its target and is retired
    clock.set(1.1);
    sched.advance();
    assert!(sched.is_empty());
    assert_eq!(display.region.get(), Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(display.opacity.get(), 1.0);
}

/// Test that frame-by-frame retargeting never produces a jump
#[test]
fn test_restart_is_continuous_under_frames() {
    init_tracing();
    let presets = TransitionPresets::from_toml_str(PRESETS).unwrap();
    let fade = presets.get("fade").unwrap().clone();
    let clock = ManualClock::new();
    let mut sched = AnimationScheduler::with_clock(clock.clone());
    let visibility = Var::new(0.0f32);

    sched.restart_with(&visibility, 1.0, &fade);
    run_frames(&clock, &mut sched, 10);

    // Toggle back and forth mid-flight
    for target in [0.0, 1.0, 0.0] {
        let before = visibility.get();
        sched.restart_with(&visibility, target, &fade);
        assert_eq!(visibility.get(), before);
        sched.advance();
        assert!((visibility.get() - before).abs() < 1e-6);
        run_frames(&clock, &mut sched, 3);
    }

    run_frames(&clock, &mut sched, 60);
    assert!(!sched.is_animated(&visibility));
    assert_eq!(visibility.get(), 0.0);
}

/// Test that variables of different types finish independently
#[test]
fn test_mixed_types_retire_independently() {
    let clock = ManualClock::new();
    let mut sched = AnimationScheduler::with_clock(clock.clone());
    let position = Var::new(Vec2::ZERO);
    let color = Var::new(Color::BLACK);
    let gain = Var::new(1.0f32);

    let linear = Easing::linear().shared();
    sched.start_transition(&position, Vec2::ZERO, Vec2::new(1.0, 1.0), 0.25, linear.clone());
    sched.start_transition(&color, Color::BLACK, Color::WHITE, 0.5, linear.clone());
    sched.start_transition(&gain, 1.0, 0.0, 1.0, linear);

    run_frames(&clock, &mut sched, 20);
    assert!(!sched.is_animated(&position));
    assert!(sched.is_animated(&color));
    assert!(sched.is_animated(&gain));
    assert_eq!(position.get(), Vec2::new(1.0, 1.0));

    run_frames(&clock, &mut sched, 20);
    assert!(!sched.is_animated(&color));
    assert_eq!(color.get(), Color::WHITE);
    assert!(sched.is_animated(&gain));

    run_frames(&clock, &mut sched, 30);
    assert!(sched.is_empty());
    assert_eq!(gain.get(), 0.0);
}

/// Test a multi-keyframe path through the scheduler
#[test]
fn test_multi_keyframe_path() {
    let clock = ManualClock::new();
    let mut sched = AnimationScheduler::with_clock(clock.clone());
    let point = Var::new(Vec2::ZERO);
    let linear = Easing::linear().shared();

    sched.add_keyframe(&point, 0.0, Vec2::ZERO, None);
    sched.add_keyframe(&point, 1.0, Vec2::new(2.0, 0.0), Some(linear.clone()));
    sched.add_keyframe(&point, 2.0, Vec2::new(2.0, 4.0), Some(linear));

    assert_eq!(sched.remaining(&point), 2.0);
    assert_eq!(sched.target(&point), Vec2::new(2.0, 4.0));
    assert_eq!(sched.initial(&point).unwrap(), Vec2::ZERO);

    clock.set(0.5);
    sched.advance();
    assert_eq!(point.get(), Vec2::new(1.0, 0.0));

    clock.set(1.5);
    sched.advance();
    assert_eq!(point.get(), Vec2::new(2.0, 2.0));
    assert_eq!(sched.elapsed(&point).unwrap(), 1.5);
}

/// Test a composite easing used as an arrival curve
#[test]
fn test_composite_overshoot_curve() {
    let clock = ManualClock::new();
    let mut sched = AnimationScheduler::with_clock(clock.clone());
    let scale = Var::new(0.0f32);

    let overshoot = Easing::Composite(
        CompositeEasing::new()
            .checkpoint(0.5, 1.2, Easing::linear().shared())
            .checkpoint(1.0, 1.0, Easing::linear().shared()),
    )
    .shared();
    sched.start_transition(&scale, 0.0, 10.0, 1.0, overshoot);

    clock.set(0.5);
    sched.advance();
    assert!((scale.get() - 12.0).abs() < 1e-4);

    clock.set(1.5);
    sched.advance();
    assert_eq!(scale.get(), 10.0);
    assert!(!sched.is_animated(&scale));
}

/// Test a discrete mode switch driven by a shared preset
#[test]
fn test_discrete_mode_switch() {
    init_tracing();
    let presets: SharedPresets = Rc::new(TransitionPresets::from_toml_str(PRESETS).unwrap());
    let clock = ManualClock::new();
    let mut sched = AnimationScheduler::with_clock(clock.clone());
    let mut display = Display::new(presets);

    let fade = display.presets.resolve("fade", "").unwrap();
    display.mode.transition_to(&mut sched, "oscilloscope", &fade);
    sched.restart_with(&display.color, Color::WHITE, &fade);

    assert_eq!(*display.mode.current(), "spectrum");
    run_frames(&clock, &mut sched, 20);
    assert!(display.mode.is_animated(&sched));
    assert_eq!(*display.mode.current(), "oscilloscope");

    run_frames(&clock, &mut sched, 20);
    assert_eq!(*display.mode.current(), "oscilloscope");
    assert!(!display.mode.is_animated(&sched));
    assert_eq!(display.color.get(), Color::WHITE);

    let immediate = display.presets.resolve("fade", "none").unwrap();
    display
        .mode
        .transition_to(&mut sched, "spectrogram", &immediate);
    assert_eq!(display.mode.initial, "oscilloscope");
    assert_eq!(*display.mode.current(), "spectrogram");
}
