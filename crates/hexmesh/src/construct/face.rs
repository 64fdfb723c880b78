//! Ordered four-point faces.

use crate::geometry::{rotate_around, scale_around, Point, Vec3};

use super::edges::EdgeData;

/// A quadrilateral, ordered counter-clockwise when viewed against its normal.
///
/// `edges[i]` describes the (optionally curved) edge from point `i` to point
/// `(i + 1) % 4`.
#[derive(Clone, Debug)]
pub struct Face {
    pub points: [Point; 4],
    pub edges: [Option<EdgeData>; 4],
}

impl Face {
    pub fn new(points: [impl Into<Point>; 4]) -> Self {
        Self {
            points: points.map(Into::into),
            edges: [None, None, None, None],
        }
    }

    pub fn with_edges(mut self, edges: [Option<EdgeData>; 4]) -> Self {
        self.edges = edges;
        self
    }

    /// Arithmetic mean of the four corners.
    pub fn center(&self) -> Vec3 {
        self.points.iter().map(|p| p.position).sum::<Vec3>() / 4.0
    }

    /// Unit normal from the cross product of the diagonals; robust for mildly
    /// warped quads.
    pub fn normal(&self) -> Vec3 {
        let d1 = self.points[2].position - self.points[0].position;
        let d2 = self.points[3].position - self.points[1].position;
        let n = d1.cross(&d2);
        let norm = n.norm();
        if norm == 0.0 {
            Vec3::zeros()
        } else {
            n / norm
        }
    }

    pub fn translate(mut self, displacement: Vec3) -> Self {
        for p in &mut self.points {
            p.position += displacement;
        }
        self.edges = self
            .edges
            .map(|e| e.map(|data| data.translate(displacement)));
        self
    }

    pub fn rotate(mut self, angle: f64, axis: Vec3, origin: Vec3) -> Self {
        for p in &mut self.points {
            p.position = rotate_around(p.position, angle, axis, origin);
        }
        self.edges = self
            .edges
            .map(|e| e.map(|data| data.rotate(angle, axis, origin)));
        self
    }

    pub fn scale(mut self, ratio: f64, origin: Vec3) -> Self {
        for p in &mut self.points {
            p.position = scale_around(p.position, ratio, origin);
        }
        self.edges = self.edges.map(|e| e.map(|data| data.scale(ratio, origin)));
        self
    }
}
