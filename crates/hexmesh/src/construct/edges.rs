//! Curved-edge descriptors.
//!
//! A block edge is a straight line unless the user attaches one of these to
//! the corner pair; the registry turns them into deduplicated edge entries.

use crate::geometry::{rotate_around, scale_around, Point, Vec3};

/// User declaration of a curved edge between two block corners.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeData {
    /// Circular arc through a third point.
    Arc { through: Point },
    /// Arc implied by its circle center; `flatness` 1 is a true circle.
    Origin { origin: Point, flatness: f64 },
    /// Interpolated spline through the given interior points.
    Spline { points: Vec<Point> },
    /// Straight segments through the given interior points.
    PolyLine { points: Vec<Point> },
    /// Straight parametric line snapped to named geometry.
    Project { geometries: Vec<String> },
}

impl EdgeData {
    pub fn arc(through: impl Into<Point>) -> Self {
        Self::Arc {
            through: through.into(),
        }
    }

    pub fn origin(origin: impl Into<Point>) -> Self {
        Self::Origin {
            origin: origin.into(),
            flatness: 1.0,
        }
    }

    pub fn spline<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Self {
        Self::Spline {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn polyline<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Self {
        Self::PolyLine {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn project<S: Into<String>>(geometries: impl IntoIterator<Item = S>) -> Self {
        Self::Project {
            geometries: geometries.into_iter().map(Into::into).collect(),
        }
    }

    fn map_points(&mut self, f: impl Fn(&mut Point)) {
        match self {
            Self::Arc { through } => f(through),
            Self::Origin { origin, .. } => f(origin),
            Self::Spline { points } | Self::PolyLine { points } => {
                for p in points {
                    f(p);
                }
            }
            Self::Project { .. } => {}
        }
    }

    pub fn translate(mut self, displacement: Vec3) -> Self {
        self.map_points(|p| p.position += displacement);
        self
    }

    pub fn rotate(mut self, angle: f64, axis: Vec3, origin: Vec3) -> Self {
        self.map_points(|p| p.position = rotate_around(p.position, angle, axis, origin));
        self
    }

    pub fn scale(mut self, ratio: f64, origin: Vec3) -> Self {
        self.map_points(|p| p.position = scale_around(p.position, ratio, origin));
        self
    }
}
