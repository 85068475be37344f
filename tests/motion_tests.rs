// Host-side tests for the per-tick motion math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}
mod motion {
    include!("../src/motion.rs");
}

use config::*;
use motion::*;

#[test]
fn first_smoothing_tick_moves_five_percent() {
    // 0.05 * (0.2 - 0.0) = 0.01
    let next = smooth_toward(0.0, 0.2);
    assert!((next - 0.01).abs() < 1e-7, "got {next}");
}

#[test]
fn smoothing_converges_monotonically_without_overshoot() {
    let target = 0.2;
    let mut yaw = 0.0_f32;
    let mut prev_gap = (target - yaw).abs();
    for _ in 0..500 {
        yaw = smooth_toward(yaw, target);
        assert!(yaw <= target, "overshot: {yaw}");
        let gap = (target - yaw).abs();
        assert!(gap <= prev_gap, "diverged: gap {gap} > {prev_gap}");
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-4, "did not converge: gap {prev_gap}");
}

#[test]
fn smoothing_works_from_above_too() {
    let target = -0.8;
    let mut yaw = 0.2_f32;
    for _ in 0..500 {
        yaw = smooth_toward(yaw, target);
        assert!(yaw >= target, "overshot downward: {yaw}");
    }
    assert!((yaw - target).abs() < 1e-3);
}

#[test]
fn smoothing_is_stationary_at_target() {
    assert_eq!(smooth_toward(0.15, 0.15), 0.15);
}

#[test]
fn tilt_equals_baseline_at_zero_and_half_period() {
    let base = 0.3;
    assert!((idle_tilt(base, 0.0) - base).abs() < 1e-6);
    // sin(t * 0.6) completes a half period at t = pi / 0.6
    let half_period = std::f32::consts::PI / TILT_FREQ;
    assert!((idle_tilt(base, half_period) - base).abs() < 1e-5);
}

#[test]
fn tilt_amplitude_is_bounded() {
    let base = 0.0;
    let mut t = 0.0_f32;
    while t < 20.0 {
        let v = idle_tilt(base, t);
        assert!(v.abs() <= TILT_AMPLITUDE + 1e-6);
        t += 0.05;
    }
}

#[test]
fn bob_equals_baseline_at_zero_and_peaks_at_quarter_period() {
    let base = 0.7;
    assert!((idle_bob(base, 0.0) - base).abs() < 1e-6);
    let quarter = std::f32::consts::FRAC_PI_2;
    assert!((idle_bob(base, quarter) - (base + BOB_AMPLITUDE)).abs() < 1e-5);
}
