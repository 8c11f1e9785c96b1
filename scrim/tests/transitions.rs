use std::time::{Duration, Instant};

use scrim::driver::{AnimationDriver, DriverEvent, DriverPhase};
use scrim::transitions::{Easing, TransitionConfig};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    // EaseIn: t * t (quadratic, slow start)
    assert_eq!(Easing::EaseIn.apply(0.0), 0.0);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseIn.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_out() {
    // EaseOut: 1 - (1-t)^2 (quadratic, fast start)
    assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
}

#[test]
fn test_easing_boundaries() {
    // All easing functions map 0->0 and 1->1
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// Transition Config Tests
// =============================================================================

#[test]
fn test_default_show_transition() {
    let config = TransitionConfig::show_default();
    assert_eq!(config.duration, Duration::from_millis(300));
    assert_eq!(config.easing, Easing::EaseIn);
}

#[test]
fn test_default_hide_transition() {
    let config = TransitionConfig::hide_default();
    assert_eq!(config.duration, Duration::from_millis(200));
    assert_eq!(config.easing, Easing::EaseOut);
}

#[test]
fn test_instant_keeps_easing() {
    let config = TransitionConfig::show_default().instant();
    assert!(config.duration.is_zero());
    assert_eq!(config.easing, Easing::EaseIn);
}

// =============================================================================
// Driver Lifecycle Tests
// =============================================================================

fn linear_driver() -> AnimationDriver {
    let config = TransitionConfig::new(Duration::from_millis(200), Easing::Linear);
    AnimationDriver::new(0.0, 0.0)
        .with_show(config)
        .with_hide(config)
}

#[test]
fn test_show_progresses_with_the_clock() {
    let mut driver = linear_driver();
    let t0 = Instant::now();

    assert!(driver.show(t0));
    assert_eq!(driver.phase(), DriverPhase::Showing);

    driver.tick(t0 + Duration::from_millis(100));
    assert!((driver.value() - 0.5).abs() < 0.01);

    // Time passed before the next tick is simply caught up.
    let event = driver.tick(t0 + Duration::from_millis(500));
    assert_eq!(event, Some(DriverEvent::ShowComplete));
    assert_eq!(driver.value(), 1.0);
}

#[test]
fn test_show_then_hide_round_trip() {
    let mut driver = linear_driver();
    let t0 = Instant::now();

    driver.show(t0);
    driver.tick(t0 + Duration::from_millis(200));
    assert_eq!(driver.value(), 1.0);

    let t1 = t0 + Duration::from_millis(300);
    assert!(driver.hide(t1));
    let event = driver.tick(t1 + Duration::from_millis(200));
    assert_eq!(event, Some(DriverEvent::HideComplete));
    assert_eq!(driver.value(), 0.0);
    assert_eq!(driver.phase(), DriverPhase::Idle);
}

#[test]
fn test_overlap_policy_drops_both_directions() {
    let mut driver = linear_driver();
    let t0 = Instant::now();

    driver.show(t0);
    assert!(!driver.show(t0 + Duration::from_millis(10)));
    assert!(!driver.hide(t0 + Duration::from_millis(10)));

    // The in-flight transition is unaffected by the dropped requests.
    let event = driver.tick(t0 + Duration::from_millis(200));
    assert_eq!(event, Some(DriverEvent::ShowComplete));
}

#[test]
fn test_hide_from_partial_progress() {
    let mut driver = linear_driver();
    let t0 = Instant::now();

    driver.show(t0);
    driver.tick(t0 + Duration::from_millis(100));
    driver.tick(t0 + Duration::from_millis(200));

    // Hiding interpolates from wherever the value currently rests.
    let t1 = t0 + Duration::from_millis(250);
    driver.hide(t1);
    driver.tick(t1 + Duration::from_millis(100));
    assert!((driver.value() - 0.5).abs() < 0.01);
}

#[test]
fn test_stop_leaves_value_in_place() {
    let mut driver = linear_driver();
    let t0 = Instant::now();

    driver.show(t0);
    driver.tick(t0 + Duration::from_millis(100));
    let mid = driver.value();

    driver.stop();
    assert_eq!(driver.phase(), DriverPhase::Idle);
    assert_eq!(driver.tick(t0 + Duration::from_millis(400)), None);
    assert_eq!(driver.value(), mid);
}
