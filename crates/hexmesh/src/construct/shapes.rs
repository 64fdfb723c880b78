//! Solid shapes: bundles of operations with convenience chopping and patch
//! assignment.
//!
//! Round shapes (cylinder, frustum, elbow) loft the five faces of a
//! [`Disk`] sketch pairwise; axis 2 is always axial, shell axis 0 radial and
//! shell axis 1 tangential.

use crate::geometry::Vec3;
use crate::grading::Chop;

use super::edges::EdgeData;
use super::face::Face;
use super::operation::{Operation, Orient};
use super::sketches::{segment_angle, Disk, Grid};
use super::Additive;

/// Shared surface of the round shapes.
pub trait Round: Additive {
    fn start_sketch(&self) -> &Disk;
    fn end_sketch(&self) -> &Disk;
    fn ops_mut(&mut self) -> &mut [Operation];

    /// Chop along the shape's axis.
    fn chop_axial(&mut self, chop: Chop) {
        for op in self.ops_mut() {
            op.chop(2, chop.clone());
        }
    }

    /// Chop the shell blocks radially; the core follows by propagation.
    fn chop_radial(&mut self, chop: Chop) {
        for op in &mut self.ops_mut()[1..] {
            op.chop(0, chop.clone());
        }
    }

    /// Chop the shell blocks circumferentially.
    fn chop_tangential(&mut self, chop: Chop) {
        for op in &mut self.ops_mut()[1..] {
            op.chop(1, chop.clone());
        }
    }

    fn set_start_patch(&mut self, name: &str) {
        for op in self.ops_mut() {
            op.set_patch([Orient::Bottom], name);
        }
    }

    fn set_end_patch(&mut self, name: &str) {
        for op in self.ops_mut() {
            op.set_patch([Orient::Top], name);
        }
    }

    /// The curved outer surface (the shell blocks' arc sides).
    fn set_outer_patch(&mut self, name: &str) {
        for op in &mut self.ops_mut()[1..] {
            op.set_patch([Orient::Right], name);
        }
    }
}

/// Loft matching sketch faces into operations; `mid` adds arc side edges
/// through a half-way sketch.
fn loft_sketches(sketch_1: &Disk, sketch_2: &Disk, mid: Option<&Disk>) -> Vec<Operation> {
    sketch_1
        .faces()
        .iter()
        .zip(sketch_2.faces())
        .enumerate()
        .map(|(i, (bottom, top))| {
            let mut op = Operation::new(bottom.clone(), top.clone());
            if let Some(mid) = mid {
                for corner in 0..4 {
                    op.add_side_edge(
                        corner,
                        EdgeData::arc(mid.faces()[i].points[corner].clone()),
                    );
                }
            }
            op
        })
        .collect()
}

macro_rules! round_shape {
    ($name:ident) => {
        impl Additive for $name {
            fn operations(&self) -> Vec<Operation> {
                self.ops.clone()
            }
        }

        impl Round for $name {
            fn start_sketch(&self) -> &Disk {
                &self.sketch_1
            }
            fn end_sketch(&self) -> &Disk {
                &self.sketch_2
            }
            fn ops_mut(&mut self) -> &mut [Operation] {
                &mut self.ops
            }
        }
    };
}

/// A straight circular cylinder, blocked as an O-grid (five blocks).
pub struct Cylinder {
    pub sketch_1: Disk,
    pub sketch_2: Disk,
    ops: Vec<Operation>,
}

round_shape!(Cylinder);

impl Cylinder {
    pub fn new(axis_point_1: Vec3, axis_point_2: Vec3, radius_point_1: Vec3) -> Self {
        let axis = axis_point_2 - axis_point_1;
        let sketch_1 = Disk::new(axis_point_1, radius_point_1, axis);
        let sketch_2 = sketch_1.clone().translate(axis);
        let ops = loft_sketches(&sketch_1, &sketch_2, None);
        Self {
            sketch_1,
            sketch_2,
            ops,
        }
    }

    /// Continue from another round shape's end face.
    pub fn chain(source: &impl Round, length: f64) -> Self {
        let sketch = source.end_sketch();
        let axis = sketch.normal() * length;
        Self::new(
            sketch.center(),
            sketch.center() + axis,
            sketch.radius_point(),
        )
    }
}

/// A cone frustum: a cylinder whose end face is scaled to a second radius.
pub struct Frustum {
    pub sketch_1: Disk,
    pub sketch_2: Disk,
    ops: Vec<Operation>,
}

round_shape!(Frustum);

impl Frustum {
    pub fn new(
        axis_point_1: Vec3,
        axis_point_2: Vec3,
        radius_point_1: Vec3,
        radius_2: f64,
    ) -> Self {
        let axis = axis_point_2 - axis_point_1;
        let sketch_1 = Disk::new(axis_point_1, radius_point_1, axis);
        let ratio = radius_2 / sketch_1.radius();
        let sketch_2 = sketch_1.clone().translate(axis).scale(ratio);
        let ops = loft_sketches(&sketch_1, &sketch_2, None);
        Self {
            sketch_1,
            sketch_2,
            ops,
        }
    }

    /// Continue from another round shape's end face, changing the radius
    /// over `length`.
    pub fn chain(source: &impl Round, length: f64, radius_2: f64) -> Self {
        let sketch = source.end_sketch();
        let axis = sketch.normal() * length;
        Self::new(
            sketch.center(),
            sketch.center() + axis,
            sketch.radius_point(),
            radius_2,
        )
    }
}

/// A curved round duct of varying cross-section, swept around an external
/// arc center.
pub struct Elbow {
    pub sketch_1: Disk,
    pub sketch_2: Disk,
    ops: Vec<Operation>,
}

round_shape!(Elbow);

impl Elbow {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        center_1: Vec3,
        radius_point_1: Vec3,
        normal_1: Vec3,
        sweep_angle: f64,
        arc_center: Vec3,
        rotation_axis: Vec3,
        radius_2: f64,
    ) -> Self {
        let sketch_1 = Disk::new(center_1, radius_point_1, normal_1);
        let radius_1 = sketch_1.radius();

        let sketch_2 = sketch_1
            .clone()
            .rotate(sweep_angle, rotation_axis, arc_center)
            .scale(radius_2 / radius_1);
        let mid = sketch_1
            .clone()
            .rotate(sweep_angle / 2.0, rotation_axis, arc_center)
            .scale((radius_1 + radius_2) / (2.0 * radius_1));

        let ops = loft_sketches(&sketch_1, &sketch_2, Some(&mid));
        Self {
            sketch_1,
            sketch_2,
            ops,
        }
    }

    /// Continue from another round shape's end face.
    pub fn chain(
        source: &impl Round,
        sweep_angle: f64,
        arc_center: Vec3,
        rotation_axis: Vec3,
        radius_2: f64,
    ) -> Self {
        let sketch = source.end_sketch();
        Self::new(
            sketch.center(),
            sketch.radius_point(),
            sketch.normal(),
            sweep_angle,
            arc_center,
            rotation_axis,
            radius_2,
        )
    }
}

/// A ring of revolution: an arbitrary cross-section face revolved around an
/// axis in full, split into segments.
///
/// Cross-section points run axial-near-start, axial-near-end, outer-end,
/// outer-start, so axis 0 is axial, axis 1 radial and axis 2 the revolve
/// direction.
pub struct RevolvedRing {
    ops: Vec<Operation>,
}

impl Additive for RevolvedRing {
    fn operations(&self) -> Vec<Operation> {
        self.ops.clone()
    }
}

impl RevolvedRing {
    pub fn new(
        axis_point_1: Vec3,
        axis_point_2: Vec3,
        cross_section: &Face,
        n_segments: usize,
    ) -> Self {
        assert!(n_segments >= 3, "a ring needs at least three segments");
        let axis = axis_point_2 - axis_point_1;
        let angle = segment_angle(n_segments);

        let ops = (0..n_segments)
            .map(|i| {
                let section = cross_section
                    .clone()
                    .rotate(i as f64 * angle, axis, axis_point_1);
                Operation::revolve(&section, angle, axis, axis_point_1)
            })
            .collect();

        Self { ops }
    }

    pub fn chop_axial(&mut self, chop: Chop) {
        for op in &mut self.ops {
            op.chop(0, chop.clone());
        }
    }

    pub fn chop_radial(&mut self, chop: Chop) {
        for op in &mut self.ops {
            op.chop(1, chop.clone());
        }
    }

    pub fn chop_tangential(&mut self, chop: Chop) {
        for op in &mut self.ops {
            op.chop(2, chop.clone());
        }
    }

    pub fn set_start_patch(&mut self, name: &str) {
        for op in &mut self.ops {
            op.set_patch([Orient::Left], name);
        }
    }

    pub fn set_end_patch(&mut self, name: &str) {
        for op in &mut self.ops {
            op.set_patch([Orient::Right], name);
        }
    }

    pub fn set_inner_patch(&mut self, name: &str) {
        for op in &mut self.ops {
            op.set_patch([Orient::Front], name);
        }
    }

    pub fn set_outer_patch(&mut self, name: &str) {
        for op in &mut self.ops {
            op.set_patch([Orient::Back], name);
        }
    }
}

/// A shape made by offsetting faces along their (shared, averaged) point
/// normals; one loft per input face, chopped along axis 2.
pub struct Shell {
    ops: Vec<Operation>,
}

impl Additive for Shell {
    fn operations(&self) -> Vec<Operation> {
        self.ops.clone()
    }
}

impl Shell {
    pub fn new(faces: &[Face], amount: f64) -> Self {
        // average the normals of all faces sharing each point
        let mut shared: Vec<(Vec3, Vec3)> = Vec::new();
        for face in faces {
            let normal = face.normal();
            for point in &face.points {
                match shared
                    .iter_mut()
                    .find(|(p, _)| (*p - point.position).norm() < 1e-7)
                {
                    Some((_, n)) => *n += normal,
                    None => shared.push((point.position, normal)),
                }
            }
        }

        let offset_of = |position: Vec3| -> Vec3 {
            let (_, normal_sum) = shared
                .iter()
                .find(|(p, _)| (*p - position).norm() < 1e-7)
                .expect("every face point was registered");
            position + normal_sum.normalize() * amount
        };

        let ops = faces
            .iter()
            .map(|face| {
                let top = Face::new(face.points.clone().map(|p| offset_of(p.position)));
                Operation::new(face.clone(), top)
            })
            .collect();

        Self { ops }
    }

    /// Chop in the offset direction.
    pub fn chop(&mut self, chop: Chop) {
        for op in &mut self.ops {
            op.chop(2, chop.clone());
        }
    }

    /// The offset side of the lofts.
    pub fn set_outer_patch(&mut self, name: &str) {
        for op in &mut self.ops {
            op.set_patch([Orient::Top], name);
        }
    }
}

/// A sketch extruded along its normal: one operation per sketch face.
pub struct ExtrudedShape {
    ops: Vec<Operation>,
}

impl Additive for ExtrudedShape {
    fn operations(&self) -> Vec<Operation> {
        self.ops.clone()
    }
}

impl ExtrudedShape {
    pub fn new(sketch: &Grid, length: f64) -> Self {
        let displacement = sketch.faces()[0].normal() * length;
        let ops = sketch
            .faces()
            .iter()
            .map(|face| Operation::extrude(face, displacement))
            .collect();
        Self { ops }
    }

    pub fn chop(&mut self, axis: usize, chop: Chop) {
        for op in &mut self.ops {
            op.chop(axis, chop.clone());
        }
    }

    pub fn set_patch(&mut self, side: Orient, name: &str) {
        for op in &mut self.ops {
            op.set_patch([side], name);
        }
    }
}
