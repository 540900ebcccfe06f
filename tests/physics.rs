#![cfg(not(target_arch = "wasm32"))]

use castaway_frames::physics::{
    magnetic_offset, PointerTracker, Vec2, DECAY, MAX_VELOCITY, REST_EPSILON,
};
use pretty_assertions::assert_eq;

#[test]
fn velocity_never_exceeds_clamp() {
    let mut tracker = PointerTracker::new();
    let positions = [
        (0.0, 0.0),
        (3000.0, -3000.0),
        (-500.0, 9999.0),
        (-500.1, 9999.2),
        (42.0, 42.0),
    ];
    for (x, y) in positions {
        tracker.sample(x, y);
        let v = tracker.velocity();
        assert!(v.x.abs() <= MAX_VELOCITY, "x blew the clamp: {v:?}");
        assert!(v.y.abs() <= MAX_VELOCITY, "y blew the clamp: {v:?}");
    }
}

#[test]
fn extreme_delta_clamps_to_exactly_fifty() {
    let mut tracker = PointerTracker::new();
    tracker.sample(0.0, 0.0);
    tracker.sample(10_000.0, -10_000.0);
    assert_eq!(tracker.velocity(), Vec2::new(MAX_VELOCITY, -MAX_VELOCITY));
}

#[test]
fn decay_is_monotonic_until_exact_zero() {
    let mut tracker = PointerTracker::new();
    tracker.sample(0.0, 0.0);
    tracker.sample(40.0, -25.0);

    let mut previous = tracker.velocity();
    let mut steps = 0;
    while !tracker.at_rest() {
        let current = tracker.step();
        assert!(
            current.x.abs() < previous.x.abs() || current.x == 0.0,
            "x magnitude grew at step {steps}"
        );
        assert!(
            current.y.abs() < previous.y.abs() || current.y == 0.0,
            "y magnitude grew at step {steps}"
        );
        previous = current;
        steps += 1;
        assert!(steps < 1_000, "velocity never reached rest");
    }

    // Exactly zero, not an asymptotic residue.
    assert_eq!(tracker.velocity(), Vec2::ZERO);
}

#[test]
fn snaps_to_zero_below_epsilon() {
    let mut tracker = PointerTracker::new();
    tracker.sample(0.0, 0.0);
    tracker.sample(REST_EPSILON, REST_EPSILON);
    // One decay step takes both components under the threshold.
    assert_eq!(tracker.step(), Vec2::ZERO);
    assert!(tracker.at_rest());
}

#[test]
fn single_decay_step_multiplies_by_factor() {
    let mut tracker = PointerTracker::new();
    tracker.sample(0.0, 0.0);
    tracker.sample(10.0, 20.0);
    let v = tracker.step();
    assert!((v.x - 10.0 * DECAY).abs() < 1e-12);
    assert!((v.y - 20.0 * DECAY).abs() < 1e-12);
}

#[test]
fn reduced_motion_ignores_all_pointer_activity() {
    let mut tracker = PointerTracker::new();
    tracker.set_enabled(false);
    for i in 0..100 {
        tracker.sample((i * 13) as f64, (i * 7) as f64);
        assert_eq!(tracker.step(), Vec2::ZERO);
    }
    assert!(tracker.at_rest());
}

#[test]
fn disabling_clears_residual_velocity() {
    let mut tracker = PointerTracker::new();
    tracker.sample(0.0, 0.0);
    tracker.sample(30.0, 30.0);
    tracker.set_enabled(false);
    assert_eq!(tracker.velocity(), Vec2::ZERO);
}

#[test]
fn sway_maps_velocity_to_opposing_tilts() {
    let mut tracker = PointerTracker::new();
    tracker.sample(0.0, 0.0);
    tracker.sample(20.0, 20.0);
    let sway = tracker.sway();
    assert_eq!(sway, Vec2::new(10.0, -10.0));
}

#[test]
fn magnetic_offset_is_a_damped_pull_toward_cursor() {
    let center = Vec2::new(100.0, 100.0);
    let offset = magnetic_offset(Vec2::new(130.0, 70.0), center);
    assert_eq!(offset, Vec2::new(10.0, -10.0));

    // Cursor on center: no displacement.
    assert_eq!(magnetic_offset(center, center), Vec2::ZERO);
}
