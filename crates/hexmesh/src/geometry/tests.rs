use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

fn assert_close(a: Vec3, b: Vec3) {
    assert!((a - b).norm() < 1e-9, "{a:?} != {b:?}");
}

#[test]
fn rotate_quarter_turn() {
    let p = Vec3::new(1.0, 0.0, 0.0);
    let rotated = rotate_around(p, FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0), Vec3::zeros());
    assert_close(rotated, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn rotate_around_offset_origin() {
    let p = Vec3::new(2.0, 0.0, 0.0);
    let rotated = rotate_around(p, PI, Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0));
    assert_close(rotated, Vec3::new(0.0, 0.0, 0.0));
}

#[test]
fn scale_doubles_distance_from_origin() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let scaled = scale_around(p, 2.0, Vec3::new(1.0, 0.0, 0.0));
    assert_close(scaled, Vec3::new(1.0, 4.0, 6.0));
}

#[test]
fn angle_between_orthogonal() {
    let a = Vec3::new(1.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 3.0, 0.0);
    assert!((angle_between(a, b) - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn point_transform_chain() {
    let p = Point::new(1.0, 0.0, 0.0)
        .translate(Vec3::new(0.0, 1.0, 0.0))
        .rotate(FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0), Vec3::zeros())
        .scale(2.0, Vec3::zeros());
    assert_close(p.position, Vec3::new(-2.0, 2.0, 0.0));
}

#[test]
fn point_projection_dedup() {
    let p = Point::new(0.0, 0.0, 0.0)
        .project(["terrain"])
        .project(["terrain", "wall"]);
    assert_eq!(p.projections, vec!["terrain".to_string(), "wall".to_string()]);
}

#[test]
fn curve_length_is_cumulative() {
    let curve = InterpolatedCurve::new(vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
    ]);
    assert!((curve.length() - 3.0).abs() < 1e-12);
}

#[test]
fn curve_midpoint_by_arc_length() {
    let curve = InterpolatedCurve::new(vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 3.0, 0.0),
    ]);
    // half of the total length 4 lies 1 unit up the second segment
    assert_close(curve.point_at(0.5), Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn curve_endpoints() {
    let curve = InterpolatedCurve::new(vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)]);
    assert_close(curve.point_at(0.0), Vec3::new(0.0, 0.0, 0.0));
    assert_close(curve.point_at(1.0), Vec3::new(1.0, 1.0, 1.0));
}
