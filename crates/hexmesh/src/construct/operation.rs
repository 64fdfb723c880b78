//! A hexahedron declaration: two faces, optional curved side edges, chops,
//! patch names and projection targets.

use crate::geometry::{rotate_around, Point, Vec3};
use crate::grading::chop::Chop;

use super::edges::EdgeData;
use super::face::Face;

/// One of the six sides of a hexahedron, named after the block-mesh sketch:
/// bottom and top are the faces the operation was lofted between, front runs
/// along the first face edge, right along the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orient {
    Bottom,
    Top,
    Front,
    Back,
    Left,
    Right,
}

impl Orient {
    pub const ALL: [Orient; 6] = [
        Orient::Bottom,
        Orient::Top,
        Orient::Front,
        Orient::Back,
        Orient::Left,
        Orient::Right,
    ];

    /// Block-local corner indices of this side, in outward-facing order.
    pub const fn corners(self) -> [usize; 4] {
        match self {
            Orient::Bottom => [0, 1, 2, 3],
            Orient::Top => [4, 5, 6, 7],
            Orient::Front => [4, 5, 1, 0],
            Orient::Back => [7, 6, 2, 3],
            Orient::Left => [4, 0, 3, 7],
            Orient::Right => [5, 1, 2, 6],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Orient::Bottom => "bottom",
            Orient::Top => "top",
            Orient::Front => "front",
            Orient::Back => "back",
            Orient::Left => "left",
            Orient::Right => "right",
        }
    }
}

/// A single hexahedral operation; the mesh converts it to a block on
/// assembly.
///
/// Corner numbering: bottom face counter-clockwise as 0..3, top face as 4..7
/// with corner 4 above corner 0. `side_edges[i]` curves the edge between
/// corners `i` and `i + 4`.
#[derive(Clone, Debug)]
pub struct Operation {
    pub bottom: Face,
    pub top: Face,
    pub side_edges: [Option<EdgeData>; 4],
    pub chops: [Vec<Chop>; 3],
    /// `(side, patch name)` in declaration order.
    pub patch_names: Vec<(Orient, String)>,
    /// `(side, geometry name)` for sides projected to named geometry.
    pub side_projections: Vec<(Orient, String)>,
    pub cell_zone: String,
}

impl Operation {
    /// Loft between two quadrilaterals.
    pub fn new(bottom: Face, top: Face) -> Self {
        Self {
            bottom,
            top,
            side_edges: [None, None, None, None],
            chops: [Vec::new(), Vec::new(), Vec::new()],
            patch_names: Vec::new(),
            side_projections: Vec::new(),
            cell_zone: String::new(),
        }
    }

    /// Extrude a face along a displacement vector.
    pub fn extrude(base: &Face, displacement: Vec3) -> Self {
        Self::new(base.clone(), base.clone().translate(displacement))
    }

    /// Revolve a face around an axis; side edges become arcs through the
    /// half-angle positions.
    pub fn revolve(base: &Face, angle: f64, axis: Vec3, origin: Vec3) -> Self {
        let top = base.clone().rotate(angle, axis, origin);
        let mut operation = Self::new(base.clone(), top);

        for corner in 0..4 {
            let mid = rotate_around(base.points[corner].position, angle / 2.0, axis, origin);
            operation.side_edges[corner] = Some(EdgeData::arc(Point::from(mid)));
        }

        operation
    }

    /// Axis-aligned box between two diagonally opposite corners.
    pub fn cuboid(corner_1: Vec3, corner_2: Vec3) -> Self {
        let lo = corner_1.inf(&corner_2);
        let hi = corner_1.sup(&corner_2);

        let bottom = Face::new([
            Point::new(lo.x, lo.y, lo.z),
            Point::new(hi.x, lo.y, lo.z),
            Point::new(hi.x, hi.y, lo.z),
            Point::new(lo.x, hi.y, lo.z),
        ]);
        let top = bottom.clone().translate(Vec3::new(0.0, 0.0, hi.z - lo.z));

        Self::new(bottom, top)
    }

    /// Curve the edge between corners `corner_1` and `corner_1 + 4`.
    pub fn add_side_edge(&mut self, corner_1: usize, data: EdgeData) {
        assert!(corner_1 < 4, "corner_1 must index a bottom corner (0..3)");
        self.side_edges[corner_1] = Some(data);
    }

    /// Declare how to subdivide the given local axis (0, 1 or 2).
    pub fn chop(&mut self, axis: usize, chop: Chop) {
        assert!(axis < 3, "axis must be 0, 1 or 2");
        self.chops[axis].push(chop);
    }

    /// Assign a named boundary patch to one or more sides.
    pub fn set_patch(&mut self, sides: impl IntoIterator<Item = Orient>, name: &str) {
        for orient in sides {
            if let Some(entry) = self.patch_names.iter_mut().find(|(o, _)| *o == orient) {
                entry.1 = name.to_string();
            } else {
                self.patch_names.push((orient, name.to_string()));
            }
        }
    }

    /// Project a side to named geometry.
    pub fn project_side(&mut self, side: Orient, geometry: &str) {
        if let Some(entry) = self.side_projections.iter_mut().find(|(o, _)| *o == side) {
            entry.1 = geometry.to_string();
        } else {
            self.side_projections.push((side, geometry.to_string()));
        }
    }

    /// Project the edge between two corners to a surface or an intersection
    /// of surfaces.
    pub fn project_edge<S: Into<String>>(
        &mut self,
        corner_1: usize,
        corner_2: usize,
        geometries: impl IntoIterator<Item = S>,
    ) {
        let data = EdgeData::project(geometries);

        match (corner_1 < 4, corner_2 < 4) {
            (true, true) => {
                let slot = face_edge_slot(corner_1, corner_2);
                self.bottom.edges[slot] = Some(data);
            }
            (false, false) => {
                let slot = face_edge_slot(corner_1 - 4, corner_2 - 4);
                self.top.edges[slot] = Some(data);
            }
            _ => {
                let (lower, upper) = if corner_1 < 4 {
                    (corner_1, corner_2)
                } else {
                    (corner_2, corner_1)
                };
                assert!(
                    upper == lower + 4,
                    "a side edge connects corners i and i + 4"
                );
                self.side_edges[lower] = Some(data);
            }
        }
    }

    /// Project the vertex at a corner (0..7) to named geometry.
    pub fn project_corner<S: Into<String>>(
        &mut self,
        corner: usize,
        geometries: impl IntoIterator<Item = S>,
    ) {
        assert!(corner < 8, "corner must be 0..7");
        let point = if corner < 4 {
            &mut self.bottom.points[corner]
        } else {
            &mut self.top.points[corner - 4]
        };
        *point = std::mem::take(point).project(geometries);
    }

    pub fn set_cell_zone(&mut self, cell_zone: &str) {
        self.cell_zone = cell_zone.to_string();
    }

    pub fn center(&self) -> Vec3 {
        (self.bottom.center() + self.top.center()) / 2.0
    }

    pub fn translate(mut self, displacement: Vec3) -> Self {
        self.bottom = self.bottom.translate(displacement);
        self.top = self.top.translate(displacement);
        self.side_edges = self
            .side_edges
            .map(|e| e.map(|data| data.translate(displacement)));
        self
    }

    pub fn rotate(mut self, angle: f64, axis: Vec3, origin: Vec3) -> Self {
        self.bottom = self.bottom.rotate(angle, axis, origin);
        self.top = self.top.rotate(angle, axis, origin);
        self.side_edges = self
            .side_edges
            .map(|e| e.map(|data| data.rotate(angle, axis, origin)));
        self
    }

    pub fn scale(mut self, ratio: f64, origin: Vec3) -> Self {
        self.bottom = self.bottom.scale(ratio, origin);
        self.top = self.top.scale(ratio, origin);
        self.side_edges = self
            .side_edges
            .map(|e| e.map(|data| data.scale(ratio, origin)));
        self
    }
}

/// Slot of the face edge connecting two of its corners (0..3).
fn face_edge_slot(a: usize, b: usize) -> usize {
    assert!(a < 4 && b < 4);
    if (a + 1) % 4 == b {
        a
    } else if (b + 1) % 4 == a {
        b
    } else {
        panic!("corners {a} and {b} are a face diagonal, not an edge");
    }
}
