// Model placement, camera, and interaction tuning constants.
//
// The two records below are the only surface an operator is expected to
// edit: adjust the numbers and rebuild. Everything else derives from them.
use glam::Vec3;

/// Uniform scale applied to the loaded model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Fit the largest bounding-box extent to a 2-unit span.
    Auto,
    /// Use the given uniform factor. Must be positive.
    Fixed(f32),
}

#[derive(Debug, Clone, Copy)]
pub struct ModelConfig {
    pub scale: Scale,
    /// World-space offset, applied after centering.
    pub position: Vec3,
    /// Euler angles in radians (x = tilt, y = turn, z = roll), applied absolutely.
    pub rotation: Vec3,
    /// Translate the model so its bounding-box center sits at the origin.
    pub auto_center: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

pub const MODEL_CONFIG: ModelConfig = ModelConfig {
    scale: Scale::Fixed(1.6),
    position: Vec3::new(-0.2, 0.7, 0.0),
    rotation: Vec3::new(0.0, 0.0, 0.0),
    auto_center: true,
};

pub const CAMERA_CONFIG: CameraConfig = CameraConfig {
    x: -0.3,
    y: 0.6,
    z: 5.0,
};

/// URL of the single GLB asset served next to the page.
pub const MODEL_URL: &str = "/detailed_burger_meshy.glb";

// Fixed projection parameters (not operator-facing)
pub const CAMERA_FOV_Y_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Drag-to-turn mapping: pixels of horizontal travel to radians of yaw
pub const DRAG_SENSITIVITY: f32 = 0.002;
pub const YAW_TARGET_MIN: f32 = -0.8;
pub const YAW_TARGET_MAX: f32 = 0.2;

// Per-tick convergence fraction for the smoothed yaw
pub const YAW_SMOOTHING: f32 = 0.05;

// Idle animation: small tilt wobble and vertical bob
pub const TILT_FREQ: f32 = 0.6;
pub const TILT_AMPLITUDE: f32 = 0.05;
pub const BOB_FREQ: f32 = 1.0;
pub const BOB_AMPLITUDE: f32 = 0.06;

// Cap the canvas backing store at 2x CSS pixels on high-density displays
pub const MAX_PIXEL_RATIO: f64 = 2.0;
