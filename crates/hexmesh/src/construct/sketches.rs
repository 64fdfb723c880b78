//! Flat sketches that solid shapes are lofted from.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::geometry::{rotate_around, Vec3};

use super::edges::EdgeData;
use super::face::Face;

/// Fraction of the radius where the O-grid core square corners sit.
const CORE_RATIO: f64 = 0.7;

/// A circular cross-section blocked as an O-grid: one square core face plus
/// four shell faces whose outer edges are arcs on the circle.
///
/// Face 0 is the core; faces 1..4 are the shell quarters. Shell faces are
/// oriented so their local axis 0 is radial and axis 1 tangential.
#[derive(Clone, Debug)]
pub struct Disk {
    faces: [Face; 5],
    center: Vec3,
    radius_point: Vec3,
    normal: Vec3,
}

impl Disk {
    pub fn new(center: Vec3, radius_point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize();
        // radius vector, forced into the disk plane
        let mut u = radius_point - center;
        u -= normal * u.dot(&normal);
        assert!(u.norm() > 0.0, "radius point must not lie on the axis");

        let spoke = |angle: f64, scale: f64| -> Vec3 {
            center + rotate_around(u, angle, normal, Vec3::zeros()) * scale
        };

        // corners on the diagonals, between the quarter arcs
        let core: [Vec3; 4] = std::array::from_fn(|i| {
            spoke(FRAC_PI_4 + i as f64 * FRAC_PI_2, CORE_RATIO)
        });
        let rim: [Vec3; 4] =
            std::array::from_fn(|i| spoke(FRAC_PI_4 + i as f64 * FRAC_PI_2, 1.0));

        let core_face = Face::new(core);
        let shells: [Face; 4] = std::array::from_fn(|i| {
            let arc_mid = spoke((i + 1) as f64 * FRAC_PI_2, 1.0);
            Face::new([core[i], rim[i], rim[(i + 1) % 4], core[(i + 1) % 4]]).with_edges([
                None,
                Some(EdgeData::arc(arc_mid)),
                None,
                None,
            ])
        });

        let [s0, s1, s2, s3] = shells;
        Self {
            faces: [core_face, s0, s1, s2, s3],
            center,
            radius_point: center + u,
            normal,
        }
    }

    #[inline]
    pub fn faces(&self) -> &[Face; 5] {
        &self.faces
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub fn radius_point(&self) -> Vec3 {
        self.radius_point
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        (self.radius_point - self.center).norm()
    }

    pub fn translate(mut self, displacement: Vec3) -> Self {
        self.faces = self.faces.map(|f| f.translate(displacement));
        self.center += displacement;
        self.radius_point += displacement;
        self
    }

    pub fn rotate(mut self, angle: f64, axis: Vec3, origin: Vec3) -> Self {
        self.faces = self.faces.map(|f| f.rotate(angle, axis, origin));
        self.center = rotate_around(self.center, angle, axis, origin);
        self.radius_point = rotate_around(self.radius_point, angle, axis, origin);
        self.normal = rotate_around(self.normal, angle, axis, Vec3::zeros());
        self
    }

    /// Scale about the disk's own center; the normal is unchanged.
    pub fn scale(mut self, ratio: f64) -> Self {
        let origin = self.center;
        self.faces = self.faces.map(|f| f.scale(ratio, origin));
        self.radius_point = origin + (self.radius_point - origin) * ratio;
        self
    }
}

/// An `n × m` array of rectangular faces in the x-y plane; the plainest
/// possible cartesian sketch, useful for extruded slabs.
#[derive(Clone, Debug)]
pub struct Grid {
    faces: Vec<Face>,
}

impl Grid {
    /// `corner_1` is lower-left, `corner_2` upper-right; `count_1` and
    /// `count_2` are the face counts along x and y.
    pub fn new(corner_1: Vec3, corner_2: Vec3, count_1: usize, count_2: usize) -> Self {
        assert!(count_1 > 0 && count_2 > 0, "a grid needs at least one face");

        let step_x = (corner_2.x - corner_1.x) / count_1 as f64;
        let step_y = (corner_2.y - corner_1.y) / count_2 as f64;
        let z = corner_1.z;

        let mut faces = Vec::with_capacity(count_1 * count_2);
        for iy in 0..count_2 {
            for ix in 0..count_1 {
                let x0 = corner_1.x + ix as f64 * step_x;
                let x1 = x0 + step_x;
                let y0 = corner_1.y + iy as f64 * step_y;
                let y1 = y0 + step_y;
                faces.push(Face::new([
                    Vec3::new(x0, y0, z),
                    Vec3::new(x1, y0, z),
                    Vec3::new(x1, y1, z),
                    Vec3::new(x0, y1, z),
                ]));
            }
        }

        Self { faces }
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn center(&self) -> Vec3 {
        let sum: Vec3 = self.faces.iter().map(Face::center).sum();
        sum / self.faces.len() as f64
    }
}

/// Sweep angle of one segment when a full revolution is split `n` ways.
pub(crate) fn segment_angle(n_segments: usize) -> f64 {
    2.0 * PI / n_segments as f64
}
