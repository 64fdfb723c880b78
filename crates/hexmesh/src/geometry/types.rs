//! Point type and vector alias.

use nalgebra::Vector3;

use super::transforms::{rotate_around, scale_around};

/// 3D coordinate vector used throughout the crate.
pub type Vec3 = Vector3<f64>;

/// A spatial location, optionally projected to named geometry.
///
/// Invariants:
/// - `projections` holds names of geometry entries registered on the mesh;
///   more than one name means the point snaps to their intersection.
/// - Order of projection names is preserved (it is visible in the output).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub projections: Vec<String>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            projections: Vec::new(),
        }
    }

    /// Project this point to one or more named geometries.
    pub fn project<S: Into<String>>(mut self, geometries: impl IntoIterator<Item = S>) -> Self {
        for name in geometries {
            let name = name.into();
            if !self.projections.contains(&name) {
                self.projections.push(name);
            }
        }
        self
    }

    #[inline]
    pub fn translate(mut self, displacement: Vec3) -> Self {
        self.position += displacement;
        self
    }

    #[inline]
    pub fn rotate(mut self, angle: f64, axis: Vec3, origin: Vec3) -> Self {
        self.position = rotate_around(self.position, angle, axis, origin);
        self
    }

    #[inline]
    pub fn scale(mut self, ratio: f64, origin: Vec3) -> Self {
        self.position = scale_around(self.position, ratio, origin);
        self
    }
}

impl From<Vec3> for Point {
    fn from(position: Vec3) -> Self {
        Self {
            position,
            projections: Vec::new(),
        }
    }
}

impl From<[f64; 3]> for Point {
    fn from(p: [f64; 3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}
