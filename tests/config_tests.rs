// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Smoothing fraction must stay in (0, 1] or the yaw oscillates
    assert!(YAW_SMOOTHING > 0.0 && YAW_SMOOTHING <= 1.0);

    // Drag mapping and clamp window must be sane
    assert!(DRAG_SENSITIVITY > 0.0);
    assert!(YAW_TARGET_MIN < YAW_TARGET_MAX);

    // Oscillation parameters
    assert!(TILT_FREQ > 0.0);
    assert!(TILT_AMPLITUDE > 0.0);
    assert!(BOB_FREQ > 0.0);
    assert!(BOB_AMPLITUDE > 0.0);

    // Projection
    assert!(CAMERA_FOV_Y_DEG > 0.0 && CAMERA_FOV_Y_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);

    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
fn configured_yaw_sits_inside_the_drag_clamp() {
    // Otherwise the model snaps on the first drag tick.
    let yaw = MODEL_CONFIG.rotation.y;
    assert!((YAW_TARGET_MIN..=YAW_TARGET_MAX).contains(&yaw));
}

#[test]
fn fixed_scale_is_positive() {
    match MODEL_CONFIG.scale {
        Scale::Fixed(s) => assert!(s > 0.0),
        Scale::Auto => {}
    }
}

#[test]
fn camera_sits_in_front_of_the_near_plane() {
    assert!(CAMERA_CONFIG.z > CAMERA_NEAR);
}

#[test]
fn asset_url_is_absolute() {
    assert!(MODEL_URL.starts_with('/'));
}
