use std::f64::consts::PI;

use crate::geometry::Vec3;
use crate::grading::{Grading, Segment};

use super::*;

fn wire(corners: (usize, usize), vertices: (usize, usize), axis: usize) -> Wire {
    Wire {
        corners,
        vertices: (VertexId(vertices.0), VertexId(vertices.1)),
        axis,
        edge: EdgeId(0),
        length: 1.0,
        grading: Grading::new(1.0),
        coincidents: Vec::new(),
    }
}

#[test]
fn canonical_pairs_cover_every_corner_three_times() {
    let mut incidence = [0usize; 8];
    for pairs in AXIS_PAIRS {
        for (a, b) in pairs {
            incidence[a] += 1;
            incidence[b] += 1;
        }
    }
    assert_eq!(incidence, [3; 8]);
}

#[test]
fn canonical_pairs_have_no_diagonals() {
    // every pair differs in exactly one bit of the (x, y, z) corner code
    let code = |c: usize| -> (usize, usize, usize) {
        let z = c / 4;
        let q = c % 4;
        let (x, y) = match q {
            0 => (0, 0),
            1 => (1, 0),
            2 => (1, 1),
            _ => (0, 1),
        };
        (x, y, z)
    };
    for (axis, pairs) in AXIS_PAIRS.iter().enumerate() {
        for &(a, b) in pairs {
            let (ax, ay, az) = code(a);
            let (bx, by, bz) = code(b);
            let diff = [(ax != bx), (ay != by), (az != bz)];
            assert_eq!(diff.iter().filter(|&&d| d).count(), 1, "pair ({a},{b})");
            assert!(diff[axis], "pair ({a},{b}) must run along axis {axis}");
        }
    }
}

#[test]
fn wire_coincidence_ignores_direction() {
    let a = wire((0, 1), (10, 11), 0);
    let b = wire((3, 2), (11, 10), 0);
    assert!(a.is_coincident(&b));
    assert!(!a.is_aligned(&b));

    let c = wire((4, 5), (10, 11), 0);
    assert!(a.is_coincident(&c));
    assert!(a.is_aligned(&c));

    let d = wire((0, 1), (10, 12), 0);
    assert!(!a.is_coincident(&d));
}

#[test]
fn add_coincident_is_idempotent() {
    let mut a = wire((0, 1), (10, 11), 0);
    let r = WireRef {
        block: BlockId(1),
        axis: 0,
        slot: 2,
    };
    a.add_coincident(r, true);
    a.add_coincident(r, true);
    assert_eq!(a.coincidents.len(), 1);
}

#[test]
fn line_length_is_euclidean() {
    let kind = EdgeKind::Line;
    let length = kind.length(Vec3::zeros(), Vec3::new(3.0, 4.0, 0.0));
    assert!((length - 5.0).abs() < 1e-12);
}

#[test]
fn arc_length_semicircle() {
    // unit semicircle in the x-y plane
    let kind = EdgeKind::Arc {
        through: Vec3::new(0.0, 1.0, 0.0),
    };
    let length = kind.length(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    assert!((length - PI).abs() < 1e-9, "{length}");
}

#[test]
fn arc_length_quarter_circle() {
    let kind = EdgeKind::Arc {
        through: Vec3::new(2.0_f64.sqrt() / 2.0, 2.0_f64.sqrt() / 2.0, 0.0),
    };
    let length = kind.length(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    assert!((length - PI / 2.0).abs() < 1e-9, "{length}");
}

#[test]
fn collinear_arc_falls_back_to_chord() {
    let kind = EdgeKind::Arc {
        through: Vec3::new(0.5, 0.0, 0.0),
    };
    let length = kind.length(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0));
    assert!((length - 1.0).abs() < 1e-12);
}

#[test]
fn origin_arc_length() {
    let kind = EdgeKind::Origin {
        origin: Vec3::zeros(),
        flatness: 1.0,
    };
    let length = kind.length(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    assert!((length - PI / 2.0).abs() < 1e-9);
}

#[test]
fn polyline_length_accumulates() {
    let kind = EdgeKind::PolyLine {
        points: vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0)],
    };
    let length = kind.length(Vec3::zeros(), Vec3::new(2.0, 1.0, 0.0));
    assert!((length - 3.0).abs() < 1e-12);
}

#[test]
fn spline_congruence_respects_reversal() {
    let a = EdgeKind::Spline {
        points: vec![Vec3::new(0.3, 0.1, 0.0), Vec3::new(0.7, 0.1, 0.0)],
    };
    let b = EdgeKind::Spline {
        points: vec![Vec3::new(0.7, 0.1, 0.0), Vec3::new(0.3, 0.1, 0.0)],
    };
    assert!(a.congruent(&b, 1e-7));
    assert!(a.congruent(&a.reversed().reversed(), 1e-7));
}

#[test]
fn project_congruence_is_order_insensitive() {
    let a = EdgeKind::Project {
        geometries: vec!["walls".into(), "terrain".into()],
    };
    let b = EdgeKind::Project {
        geometries: vec!["terrain".into(), "walls".into()],
    };
    assert!(a.congruent(&b, 1e-7));
    assert!(!a.congruent(&EdgeKind::Line, 1e-7));
}

#[test]
fn axis_start_and_end_vertex_sets() {
    let wires = [
        wire((0, 4), (0, 4), 2),
        wire((1, 5), (1, 5), 2),
        wire((2, 6), (2, 6), 2),
        wire((3, 7), (3, 7), 2),
    ];
    let axis = Axis::new(2, wires);
    assert_eq!(
        axis.start_vertices(),
        [VertexId(0), VertexId(1), VertexId(2), VertexId(3)]
    );
    assert_eq!(
        axis.end_vertices(),
        [VertexId(4), VertexId(5), VertexId(6), VertexId(7)]
    );
}

#[test]
fn axis_length_honors_take() {
    use crate::grading::{Chop, Take};

    let mut wires = [
        wire((0, 1), (0, 1), 0),
        wire((3, 2), (3, 2), 0),
        wire((4, 5), (4, 5), 0),
        wire((7, 6), (7, 6), 0),
    ];
    wires[0].length = 1.0;
    wires[1].length = 2.0;
    wires[2].length = 3.0;
    wires[3].length = 4.0;

    let mut axis = Axis::new(0, wires);
    assert!((axis.length() - 2.5).abs() < 1e-12);

    axis.chops.push(Chop::new().count(1).take(Take::Min));
    assert!((axis.length() - 1.0).abs() < 1e-12);

    axis.chops[0].take = Take::Max;
    assert!((axis.length() - 4.0).abs() < 1e-12);
}

#[test]
fn block_side_vertices_follow_face_map() {
    let vertices = std::array::from_fn(VertexId);
    let wires =
        std::array::from_fn(|axis| AXIS_PAIRS[axis].map(|(a, b)| wire((a, b), (a, b), axis)));
    let block = Block::new(BlockId(0), vertices, wires);

    assert_eq!(
        block.side_vertices(crate::construct::Orient::Right),
        [VertexId(5), VertexId(1), VertexId(2), VertexId(6)]
    );
}

#[test]
fn defined_wire_has_positive_counts() {
    let mut w = wire((0, 1), (0, 1), 0);
    assert!(!w.is_defined());
    w.grading = Grading {
        length: 1.0,
        segments: vec![Segment {
            fraction: 1.0,
            count: 10,
            expansion: 1.0,
        }],
    };
    assert!(w.is_defined());
}
