//! Per-block cell quality.
//!
//! The cost combines face non-orthogonality, inner-angle deviation from 90°
//! and edge aspect ratio. Exponential penalties make bad cells dominate the
//! sum, so the minimizer attacks the worst offenders first.

use crate::construct::Orient;
use crate::geometry::{angle_between, Vec3};
use crate::items::AXIS_PAIRS;

/// Scalar quality of one block from its corner positions; 0 is ideal,
/// larger is worse.
pub(crate) fn block_quality(points: &[Vec3; 8]) -> f64 {
    let center: Vec3 = points.iter().sum::<Vec3>() / 8.0;
    let mut quality = 0.0;

    for orient in Orient::ALL {
        let corners = orient.corners().map(|c| points[c]);
        let face_center: Vec3 = corners.iter().sum::<Vec3>() / 4.0;

        // non-orthogonality: angle between the face normal and the line
        // from the cell center to the face center
        let normal = face_normal(&corners);
        let to_face = face_center - center;
        if normal.norm() > 0.0 && to_face.norm() > 0.0 {
            let mut angle = angle_between(normal, to_face).to_degrees();
            if angle > 90.0 {
                angle = 180.0 - angle;
            }
            quality += (angle / 15.0).exp() - 1.0;
        }

        // inner angles vs. 90 degrees
        for i in 0..4 {
            let prev = corners[(i + 3) % 4];
            let this = corners[i];
            let next = corners[(i + 1) % 4];
            let angle = angle_between(prev - this, next - this).to_degrees();
            let deviation = (angle - 90.0).abs();
            quality += (deviation / 22.5).exp() - 1.0;
        }
    }

    // edge aspect ratio over the twelve wires
    let mut min_edge = f64::INFINITY;
    let mut max_edge: f64 = 0.0;
    for pairs in AXIS_PAIRS {
        for (a, b) in pairs {
            let length = (points[b] - points[a]).norm();
            min_edge = min_edge.min(length);
            max_edge = max_edge.max(length);
        }
    }
    if min_edge > 0.0 {
        quality += (max_edge / min_edge / 3.0).exp() - 1.0;
    }

    quality
}

/// Worst face non-orthogonality of a block, in degrees.
pub(crate) fn block_max_nonortho(points: &[Vec3; 8]) -> f64 {
    let center: Vec3 = points.iter().sum::<Vec3>() / 8.0;
    let mut worst: f64 = 0.0;

    for orient in Orient::ALL {
        let corners = orient.corners().map(|c| points[c]);
        let face_center: Vec3 = corners.iter().sum::<Vec3>() / 4.0;
        let normal = face_normal(&corners);
        let to_face = face_center - center;
        if normal.norm() == 0.0 || to_face.norm() == 0.0 {
            continue;
        }
        let mut angle = angle_between(normal, to_face).to_degrees();
        if angle > 90.0 {
            angle = 180.0 - angle;
        }
        worst = worst.max(angle);
    }

    worst
}

fn face_normal(corners: &[Vec3; 4]) -> Vec3 {
    (corners[2] - corners[0]).cross(&(corners[3] - corners[1]))
}
