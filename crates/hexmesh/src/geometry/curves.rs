//! Piecewise-linear interpolated curves.
//!
//! Backs spline/polyline edge lengths and serves as a ready-made target for
//! curve clamps: `point_at` is arc-length parameterized on [0, 1].

use super::types::Vec3;

/// A curve through an ordered list of points, interpolated linearly and
/// parameterized by normalized arc length.
///
/// Invariants:
/// - At least two points.
/// - `point_at(0.0)` is the first point, `point_at(1.0)` the last; parameters
///   outside [0, 1] extrapolate along the first/last segment.
#[derive(Clone, Debug)]
pub struct InterpolatedCurve {
    points: Vec<Vec3>,
    /// Cumulative arc length up to each point; `cumulative[0] == 0`.
    cumulative: Vec<f64>,
}

impl InterpolatedCurve {
    pub fn new(points: Vec<Vec3>) -> Self {
        assert!(points.len() >= 2, "a curve needs at least two points");

        let mut cumulative = Vec::with_capacity(points.len());
        cumulative.push(0.0);
        for pair in points.windows(2) {
            let last = *cumulative.last().unwrap();
            cumulative.push(last + (pair[1] - pair[0]).norm());
        }

        Self { points, cumulative }
    }

    /// Total arc length.
    #[inline]
    pub fn length(&self) -> f64 {
        *self.cumulative.last().unwrap()
    }

    /// Point at normalized arc-length parameter `t`.
    pub fn point_at(&self, t: f64) -> Vec3 {
        let target = t * self.length();

        if target <= 0.0 {
            let dir = self.points[1] - self.points[0];
            let seg = self.cumulative[1];
            if seg == 0.0 {
                return self.points[0];
            }
            return self.points[0] + dir * (target / seg);
        }

        for i in 1..self.points.len() {
            if target <= self.cumulative[i] || i == self.points.len() - 1 {
                let seg = self.cumulative[i] - self.cumulative[i - 1];
                if seg == 0.0 {
                    return self.points[i];
                }
                let local = (target - self.cumulative[i - 1]) / seg;
                return self.points[i - 1] + (self.points[i] - self.points[i - 1]) * local;
            }
        }

        *self.points.last().unwrap()
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}
