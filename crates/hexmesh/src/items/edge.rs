//! Mesh edges and their kinds.

use crate::geometry::{angle_between, Vec3};

use super::vertex::VertexId;

/// Stable index of an edge in the mesh's edge list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Shape of an edge between two vertices.
#[derive(Clone, Debug)]
pub enum EdgeKind {
    Line,
    /// Circular arc through a third point.
    Arc { through: Vec3 },
    /// Arc implied by its circle center; `flatness` 1 is a true circle.
    Origin { origin: Vec3, flatness: f64 },
    /// Interpolated curve through interior points.
    Spline { points: Vec<Vec3> },
    /// Straight segments through interior points.
    PolyLine { points: Vec<Vec3> },
    /// Straight line snapped to named geometry by the downstream mesher.
    Project { geometries: Vec<String> },
}

impl EdgeKind {
    pub const fn name(&self) -> &'static str {
        match self {
            EdgeKind::Line => "line",
            EdgeKind::Arc { .. } => "arc",
            EdgeKind::Origin { .. } => "origin",
            EdgeKind::Spline { .. } => "spline",
            EdgeKind::PolyLine { .. } => "polyLine",
            EdgeKind::Project { .. } => "project",
        }
    }

    /// The same edge traversed from the other vertex.
    pub fn reversed(&self) -> Self {
        match self {
            EdgeKind::Spline { points } => EdgeKind::Spline {
                points: points.iter().rev().copied().collect(),
            },
            EdgeKind::PolyLine { points } => EdgeKind::PolyLine {
                points: points.iter().rev().copied().collect(),
            },
            other => other.clone(),
        }
    }

    /// Whether two kinds describe the same geometry, for registry dedup.
    pub fn congruent(&self, other: &EdgeKind, tol: f64) -> bool {
        let close = |a: &Vec3, b: &Vec3| (a - b).norm() < tol;
        match (self, other) {
            (EdgeKind::Line, EdgeKind::Line) => true,
            (EdgeKind::Arc { through: a }, EdgeKind::Arc { through: b }) => close(a, b),
            (
                EdgeKind::Origin {
                    origin: a,
                    flatness: fa,
                },
                EdgeKind::Origin {
                    origin: b,
                    flatness: fb,
                },
            ) => close(a, b) && (fa - fb).abs() < tol,
            (EdgeKind::Spline { points: a }, EdgeKind::Spline { points: b })
            | (EdgeKind::PolyLine { points: a }, EdgeKind::PolyLine { points: b }) => {
                a.len() == b.len()
                    && (a.iter().zip(b).all(|(p, q)| close(p, q))
                        || a.iter().zip(b.iter().rev()).all(|(p, q)| close(p, q)))
            }
            (EdgeKind::Project { geometries: a }, EdgeKind::Project { geometries: b }) => {
                let mut a = a.clone();
                let mut b = b.clone();
                a.sort();
                b.sort();
                a == b
            }
            _ => false,
        }
    }

    /// Edge length between the given endpoint positions.
    pub fn length(&self, start: Vec3, end: Vec3) -> f64 {
        match self {
            EdgeKind::Line | EdgeKind::Project { .. } => (end - start).norm(),
            EdgeKind::Arc { through } => arc_length_through(start, *through, end),
            EdgeKind::Origin { origin, .. } => {
                let ra = start - origin;
                let rb = end - origin;
                let radius = 0.5 * (ra.norm() + rb.norm());
                radius * angle_between(ra, rb)
            }
            EdgeKind::Spline { points } | EdgeKind::PolyLine { points } => {
                let mut length = 0.0;
                let mut prev = start;
                for p in points {
                    length += (p - prev).norm();
                    prev = *p;
                }
                length + (end - prev).norm()
            }
        }
    }
}

/// Length of the circular arc from `a` to `c` passing through `b`.
///
/// Falls back to the chord when the three points are (nearly) collinear.
fn arc_length_through(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    let ab = b - a;
    let ac = c - a;
    let cross = ab.cross(&ac);
    let denom = 2.0 * cross.norm_squared();
    if denom < 1e-30 {
        return (c - a).norm();
    }

    let center = a
        + (ac.norm_squared() * cross.cross(&ab) + ab.norm_squared() * ac.cross(&cross)) / denom;
    let radius = (a - center).norm();

    // walk a -> b -> c so the angle covers the correct side of the circle
    let sweep = angle_between(a - center, b - center) + angle_between(b - center, c - center);
    radius * sweep
}

/// An edge entry in the mesh's edge list.
///
/// `vertices` are stored in the orientation the edge was first declared in;
/// the interior points of a spline follow that orientation.
#[derive(Clone, Debug)]
pub struct Edge {
    pub id: EdgeId,
    pub vertices: (VertexId, VertexId),
    pub kind: EdgeKind,
}

impl Edge {
    /// A line edge is not written to the output; only curved kinds are.
    #[inline]
    pub fn is_line(&self) -> bool {
        matches!(self.kind, EdgeKind::Line)
    }
}
