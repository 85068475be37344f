// Host-side tests for the load-time transform normalizer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}
mod placement {
    include!("../src/placement.rs");
}

use config::*;
use glam::Vec3;
use placement::*;

fn box_at(center: Vec3, size: Vec3) -> Aabb {
    Aabb {
        min: center - size * 0.5,
        max: center + size * 0.5,
    }
}

#[test]
fn aabb_from_points() {
    let b = Aabb::from_points([
        Vec3::new(1.0, -2.0, 0.5),
        Vec3::new(-3.0, 4.0, 0.0),
        Vec3::new(0.0, 0.0, -1.0),
    ])
    .unwrap();
    assert_eq!(b.min, Vec3::new(-3.0, -2.0, -1.0));
    assert_eq!(b.max, Vec3::new(1.0, 4.0, 0.5));
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

#[test]
fn aabb_largest_extent_picks_longest_axis() {
    let b = box_at(Vec3::ZERO, Vec3::new(4.0, 2.0, 1.0));
    assert_eq!(b.largest_extent(), 4.0);
}

#[test]
fn auto_center_moves_box_center_to_origin() {
    let cfg = ModelConfig {
        scale: Scale::Fixed(1.0),
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        auto_center: true,
    };
    let bounds = box_at(Vec3::new(3.0, 1.0, -2.0), Vec3::splat(2.0));
    let p = place_model(&cfg, &bounds);
    // Translating the center by the placement puts it at the origin.
    assert_eq!(bounds.center() + p.translation, Vec3::ZERO);
}

#[test]
fn auto_scale_fits_largest_extent_to_two_units() {
    let cfg = ModelConfig {
        scale: Scale::Auto,
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        auto_center: false,
    };
    let bounds = box_at(Vec3::ZERO, Vec3::new(4.0, 2.0, 1.0));
    let p = place_model(&cfg, &bounds);
    assert!((p.scale - 0.5).abs() < 1e-6);
    assert_eq!(p.translation, Vec3::ZERO);
}

#[test]
fn fixed_scale_is_passed_through() {
    let cfg = ModelConfig {
        scale: Scale::Fixed(1.6),
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        auto_center: false,
    };
    let bounds = box_at(Vec3::ZERO, Vec3::splat(10.0));
    assert_eq!(place_model(&cfg, &bounds).scale, 1.6);
}

#[test]
fn position_offsets_are_additive_after_centering() {
    let cfg = ModelConfig {
        scale: Scale::Fixed(1.0),
        position: Vec3::new(-0.2, 0.7, 0.0),
        rotation: Vec3::ZERO,
        auto_center: true,
    };
    let bounds = box_at(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(2.0));
    let p = place_model(&cfg, &bounds);
    assert_eq!(
        p.translation,
        -Vec3::new(1.0, 2.0, 3.0) + Vec3::new(-0.2, 0.7, 0.0)
    );
}

#[test]
fn rotation_is_absolute_from_config() {
    let cfg = ModelConfig {
        scale: Scale::Auto,
        position: Vec3::ZERO,
        rotation: Vec3::new(0.1, -0.4, 0.25),
        auto_center: true,
    };
    let bounds = box_at(Vec3::ONE, Vec3::splat(2.0));
    assert_eq!(place_model(&cfg, &bounds).rotation, Vec3::new(0.1, -0.4, 0.25));
}
