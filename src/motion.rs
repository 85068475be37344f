// Per-tick motion math for the idle animation and drag smoothing.
// All functions are pure over their inputs; the frame loop owns the state.
use crate::config::{BOB_AMPLITUDE, BOB_FREQ, TILT_AMPLITUDE, TILT_FREQ, YAW_SMOOTHING};

/// Move `current` a fixed fraction of the remaining distance toward `target`.
///
/// A leaky first-order filter: convergence time depends on tick rate, not on
/// a fixed duration. Never overshoots for fractions in (0, 1].
#[inline]
pub fn smooth_toward(current: f32, target: f32) -> f32 {
    current + (target - current) * YAW_SMOOTHING
}

/// Idle tilt around x, absolute about the configured baseline.
#[inline]
pub fn idle_tilt(base: f32, t: f32) -> f32 {
    base + (t * TILT_FREQ).sin() * TILT_AMPLITUDE
}

/// Idle vertical bob, absolute about the configured baseline.
#[inline]
pub fn idle_bob(base: f32, t: f32) -> f32 {
    base + (t * BOB_FREQ).sin() * BOB_AMPLITUDE
}
