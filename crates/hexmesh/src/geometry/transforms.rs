//! Rigid transforms as free functions.

use nalgebra::{Rotation3, Unit};

use super::types::Vec3;

/// Rotate `point` by `angle` (radians) around the axis through `origin`.
pub fn rotate_around(point: Vec3, angle: f64, axis: Vec3, origin: Vec3) -> Vec3 {
    let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle);
    origin + rotation * (point - origin)
}

/// Scale `point` by `ratio` relative to `origin`.
#[inline]
pub fn scale_around(point: Vec3, ratio: f64, origin: Vec3) -> Vec3 {
    origin + (point - origin) * ratio
}

/// Angle between two vectors in radians, in [0, π].
pub fn angle_between(a: Vec3, b: Vec3) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(&b) / denom).clamp(-1.0, 1.0).acos()
}
