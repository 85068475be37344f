// One-shot transform normalization, run when the model finishes loading.
use glam::Vec3;

use crate::config::{ModelConfig, Scale};

/// Axis-aligned bounding box over the model's vertex positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn largest_extent(&self) -> f32 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }
}

/// Static transform of the installed model; the frame loop animates on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub translation: Vec3,
    /// Euler angles (x, y, z), radians.
    pub rotation: Vec3,
    pub scale: f32,
}

/// Compute the model's resting transform from its bounding box.
///
/// Order matters: centering first (so the visual center sits at the origin),
/// then scale, then the additive position offsets, then absolute rotation.
/// Centering is a pure translation, so auto-scale can measure the same box.
pub fn place_model(config: &ModelConfig, bounds: &Aabb) -> Placement {
    let mut translation = Vec3::ZERO;
    if config.auto_center {
        translation -= bounds.center();
    }

    let scale = match config.scale {
        Scale::Auto => 2.0 / bounds.largest_extent(),
        Scale::Fixed(s) => s,
    };

    translation += config.position;

    Placement {
        translation,
        rotation: config.rotation,
        scale,
    }
}
