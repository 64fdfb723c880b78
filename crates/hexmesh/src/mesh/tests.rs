use proptest::prelude::*;

use crate::construct::{EdgeData, Face, Operation, Orient};
use crate::errors::MeshError;
use crate::geometry::Vec3;
use crate::grading::Chop;
use crate::items::{EdgeKind, AXIS_PAIRS};
use crate::lists::PatchKind;
use crate::write::dict::format_mesh;

use super::Mesh;

fn box_at(origin: Vec3) -> Operation {
    Operation::cuboid(origin, origin + Vec3::new(1.0, 1.0, 1.0))
}

fn chop_all(op: &mut Operation, count: usize) {
    for axis in 0..3 {
        op.chop(axis, Chop::new().count(count));
    }
}

#[test]
fn single_box_uniform_chop() {
    let mut mesh = Mesh::new();
    let mut op = box_at(Vec3::zeros());
    chop_all(&mut op, 10);
    mesh.add(&op).unwrap();
    mesh.ensure_graded().unwrap();

    assert_eq!(mesh.vertex_list.len(), 8);
    assert_eq!(mesh.block_list.len(), 1);
    assert_eq!(mesh.edge_list.len(), 12);
    assert!(mesh.edge_list.edges.iter().all(|e| e.is_line()));

    let block = &mesh.block_list.blocks[0];
    for axis in &block.axes {
        for wire in &axis.wires {
            assert_eq!(wire.grading.count(), 10);
            assert!((wire.grading.segments[0].expansion - 1.0).abs() < 1e-12);
        }
    }
}

#[test]
fn two_boxes_share_a_face() {
    let mut mesh = Mesh::new();
    let mut a = box_at(Vec3::zeros());
    chop_all(&mut a, 10);
    let b = box_at(Vec3::new(1.0, 0.0, 0.0));
    mesh.add(&a).unwrap();
    mesh.add(&b).unwrap();
    mesh.ensure_graded().unwrap();

    // 4 of 16 corners coincide; 4 of 24 wires coincide
    assert_eq!(mesh.vertex_list.len(), 12);
    assert_eq!(mesh.edge_list.len(), 20);

    // the shared face uses identical vertex ids and identical edge entries
    let block_a = &mesh.block_list.blocks[0];
    let block_b = &mesh.block_list.blocks[1];
    assert_eq!(
        block_a.side_vertices(Orient::Right).iter().collect::<std::collections::BTreeSet<_>>(),
        block_b.side_vertices(Orient::Left).iter().collect::<std::collections::BTreeSet<_>>(),
    );

    // every axis of the unchopped box inherits count 10
    for axis in &block_b.axes {
        for wire in &axis.wires {
            assert_eq!(wire.grading.count(), 10);
        }
    }

    // axis 0 of b continues axis 0 of a end-to-end
    assert!(block_b.axes[0]
        .sequential
        .contains(&(block_a.id, 0)));
    // axes 1 and 2 are wire-coincident neighbours
    assert!(block_b.axes[1].neighbours.contains(&(block_a.id, 1)));
    assert!(block_b.axes[2].neighbours.contains(&(block_a.id, 2)));
}

#[test]
fn shared_face_shares_edge_entries() {
    let mut mesh = Mesh::new();
    let mut a = box_at(Vec3::zeros());
    chop_all(&mut a, 4);
    let b = box_at(Vec3::new(1.0, 0.0, 0.0));
    mesh.add(&a).unwrap();
    mesh.add(&b).unwrap();
    mesh.assemble().unwrap();

    let block_a = &mesh.block_list.blocks[0];
    let block_b = &mesh.block_list.blocks[1];

    // collect edge ids per block, then check the shared face's four edges
    // resolve to the same entries
    let mut shared = 0;
    for wire_a in block_a.wires() {
        for wire_b in block_b.wires() {
            if wire_a.is_coincident(wire_b) {
                assert_eq!(wire_a.edge, wire_b.edge);
                shared += 1;
            }
        }
    }
    assert_eq!(shared, 4);
}

#[test]
fn upside_down_neighbour_inherits_inverted_grading() {
    // two boxes side by side; the second is built from its ceiling down
    let mut mesh = Mesh::new();

    let mut a = box_at(Vec3::zeros());
    a.chop(0, Chop::new().count(10));
    a.chop(1, Chop::new().count(10));
    a.chop(2, Chop::new().start_size(0.02).end_size(0.2));

    let ceiling = Face::new([
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(2.0, 1.0, 1.0),
        Vec3::new(2.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
    ]);
    let floor = Face::new([
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(2.0, 1.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
    ]);
    let mut b = Operation::new(ceiling, floor);
    b.chop(0, Chop::new().count(10));

    mesh.add(&a).unwrap();
    mesh.add(&b).unwrap();
    mesh.ensure_graded().unwrap();

    assert_eq!(mesh.vertex_list.len(), 12);

    let grading_a = &mesh.block_list.blocks[0].axes[2].wires[0].grading;
    let grading_b = &mesh.block_list.blocks[1].axes[2].wires[0].grading;

    assert_eq!(grading_a.count(), grading_b.count());
    let expansion_a = grading_a.segments[0].expansion;
    let expansion_b = grading_b.segments[0].expansion;
    assert!(expansion_a > 1.0, "a grows from 0.02 to 0.2");
    assert!(
        (expansion_a * expansion_b - 1.0).abs() < 1e-9,
        "b must carry the inverted expansion ({expansion_a} vs {expansion_b})"
    );
}

#[test]
fn stacked_reversed_box_inherits_inverted_grading() {
    // b sits on top of a, its bottom face being a's top with reversed
    // corner order
    let mut mesh = Mesh::new();

    let mut a = box_at(Vec3::zeros());
    a.chop(0, Chop::new().count(10));
    a.chop(1, Chop::new().count(10));
    a.chop(2, Chop::new().start_size(0.02).end_size(0.2));

    let bottom = Face::new([
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 1.0),
    ]);
    let top = bottom.clone().translate(Vec3::new(0.0, 0.0, 1.0));
    let b = Operation::new(bottom, top);

    mesh.add(&a).unwrap();
    mesh.add(&b).unwrap();
    mesh.ensure_graded().unwrap();

    assert_eq!(mesh.vertex_list.len(), 12);

    let grading_a = &mesh.block_list.blocks[0].axes[2].wires[0].grading;
    let grading_b = &mesh.block_list.blocks[1].axes[2].wires[0].grading;
    assert_eq!(grading_a.count(), grading_b.count());
    assert!(
        (grading_a.segments[0].expansion * grading_b.segments[0].expansion - 1.0).abs() < 1e-9
    );
}

#[test]
fn disconnected_box_stays_undefined() {
    let mut mesh = Mesh::new();
    let mut a = box_at(Vec3::zeros());
    chop_all(&mut a, 10);
    let b = box_at(Vec3::new(5.0, 0.0, 0.0));
    mesh.add(&a).unwrap();
    mesh.add(&b).unwrap();

    let result = mesh.ensure_graded();
    let Err(MeshError::UndefinedGradings { axes }) = result else {
        panic!("expected UndefinedGradings, got {result:?}");
    };
    assert_eq!(axes.len(), 3);
    assert!(axes.iter().all(|&(block, _)| block == 1));
}

#[test]
fn length_ratios_below_one_fail() {
    let mut mesh = Mesh::new();
    let mut a = box_at(Vec3::zeros());
    a.chop(0, Chop::new().count(5).length_ratio(0.5));
    a.chop(0, Chop::new().count(5).length_ratio(0.4));
    a.chop(1, Chop::new().count(5));
    a.chop(2, Chop::new().count(5));
    mesh.add(&a).unwrap();

    assert!(matches!(
        mesh.ensure_graded(),
        Err(MeshError::InvalidChop(_))
    ));
}

#[test]
fn competing_counts_are_inconsistent() {
    // a row of three boxes; the outer two carry different tangential
    // counts, the middle one hears both
    let mut mesh = Mesh::new();

    let mut a = box_at(Vec3::zeros());
    a.chop(0, Chop::new().count(4));
    a.chop(1, Chop::new().count(5));
    a.chop(2, Chop::new().count(4));
    let mut c = box_at(Vec3::new(2.0, 0.0, 0.0));
    c.chop(1, Chop::new().count(7));
    let b = box_at(Vec3::new(1.0, 0.0, 0.0));

    // the outer boxes first, so both counts reach the middle one before it
    // can spread either
    mesh.add(&a).unwrap();
    mesh.add(&c).unwrap();
    mesh.add(&b).unwrap();

    assert!(matches!(
        mesh.ensure_graded(),
        Err(MeshError::InconsistentGradings { .. })
    ));
}

#[test]
fn add_after_assemble_is_rejected() {
    let mut mesh = Mesh::new();
    let mut a = box_at(Vec3::zeros());
    chop_all(&mut a, 2);
    mesh.add(&a).unwrap();
    mesh.assemble().unwrap();
    // assembling again is a no-op
    mesh.assemble().unwrap();

    let b = box_at(Vec3::new(1.0, 0.0, 0.0));
    assert!(matches!(mesh.add(&b), Err(MeshError::AlreadyAssembled)));
}

#[test]
fn degenerate_block_is_rejected() {
    let mut mesh = Mesh::new();
    let bottom = Face::new([
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        // wedge: two coincident corners
        Vec3::new(0.5, 1.0, 0.0),
        Vec3::new(0.5, 1.0, 0.0),
    ]);
    let top = bottom.clone().translate(Vec3::new(0.0, 0.0, 1.0));
    mesh.add(&Operation::new(bottom, top)).unwrap();

    assert!(matches!(
        mesh.assemble(),
        Err(MeshError::DegenerateBlock { .. })
    ));
}

#[test]
fn curved_edge_reaches_the_registry() {
    let mut mesh = Mesh::new();
    let mut op = box_at(Vec3::zeros());
    chop_all(&mut op, 2);
    op.bottom.edges[0] = Some(EdgeData::arc(Vec3::new(0.5, -0.25, 0.0)));
    mesh.add(&op).unwrap();
    mesh.assemble().unwrap();

    let curved: Vec<_> = mesh
        .edge_list
        .edges
        .iter()
        .filter(|e| !e.is_line())
        .collect();
    assert_eq!(curved.len(), 1);
    assert!(matches!(curved[0].kind, EdgeKind::Arc { .. }));

    // the arc is longer than the unit chord
    let wire = &mesh.block_list.blocks[0].axes[0].wires[0];
    assert!(wire.length > 1.0);
}

#[test]
fn conflicting_descriptors_fail_assembly() {
    let mut mesh = Mesh::new();
    let mut a = box_at(Vec3::zeros());
    chop_all(&mut a, 2);
    a.bottom.edges[1] = Some(EdgeData::arc(Vec3::new(1.25, 0.5, 0.0)));

    // the neighbour declares a spline on the same (shared) edge
    let mut b = box_at(Vec3::new(1.0, 0.0, 0.0));
    b.bottom.edges[3] = Some(EdgeData::spline([Vec3::new(1.2, 0.5, 0.0)]));

    mesh.add(&a).unwrap();
    mesh.add(&b).unwrap();

    assert!(matches!(
        mesh.assemble(),
        Err(MeshError::ConflictingEdgeKinds { .. })
    ));
}

#[test]
fn merged_patches_duplicate_slave_vertices() {
    let mut mesh = Mesh::new();
    let mut a = box_at(Vec3::zeros());
    chop_all(&mut a, 4);
    a.set_patch([Orient::Right], "master_side");

    let mut b = box_at(Vec3::new(1.0, 0.0, 0.0));
    chop_all(&mut b, 4);
    b.set_patch([Orient::Left], "slave_side");

    mesh.merge_patches("master_side", "slave_side").unwrap();
    mesh.add(&a).unwrap();
    mesh.add(&b).unwrap();
    mesh.ensure_graded().unwrap();

    // no vertices are shared across the merge
    assert_eq!(mesh.vertex_list.len(), 16);

    let text = format_mesh(&mesh).unwrap();
    assert!(text.contains("mergePatchPairs"));
    assert!(text.contains("(master_side slave_side)"));
}

#[test]
fn patch_sides_and_default_patch_are_written() {
    let mut mesh = Mesh::new();
    let mut a = box_at(Vec3::zeros());
    chop_all(&mut a, 2);
    a.set_patch([Orient::Left], "inlet");
    a.set_patch([Orient::Right], "outlet");
    mesh.add(&a).unwrap();
    mesh.set_default_patch("walls", PatchKind::Wall);
    mesh.modify_patch("inlet", PatchKind::Patch, &["inGroups (inout)"]);
    mesh.ensure_graded().unwrap();

    let text = format_mesh(&mesh).unwrap();
    assert!(text.contains("inlet"));
    assert!(text.contains("inGroups (inout);"));
    assert!(text.contains("defaultPatch"));
    assert!(text.contains("\tname walls;"));
    assert!(text.contains("\ttype wall;"));
}

#[test]
fn writer_is_deterministic() {
    let build = || {
        let mut mesh = Mesh::new();
        let mut a = box_at(Vec3::zeros());
        a.chop(0, Chop::new().count(10));
        a.chop(1, Chop::new().count(5).total_expansion(3.0));
        a.chop(2, Chop::new().start_size(0.05));
        a.set_patch([Orient::Bottom], "floor");
        let b = box_at(Vec3::new(1.0, 0.0, 0.0));
        mesh.add(&a).unwrap();
        mesh.add(&b).unwrap();
        mesh.set_default_patch("walls", PatchKind::Wall);
        mesh.ensure_graded().unwrap();
        format_mesh(&mesh).unwrap()
    };

    let first = build();
    let second = build();
    assert_eq!(first, second);
    assert!(first.ends_with('\n'));
}

#[test]
fn write_creates_output_and_debug_files() {
    let dir = std::env::temp_dir();
    let dict_path = dir.join("hexmesh_test_blockMeshDict");
    let vtk_path = dir.join("hexmesh_test_debug.vtk");

    let mut mesh = Mesh::new();
    let mut a = box_at(Vec3::zeros());
    chop_all(&mut a, 3);
    mesh.add(&a).unwrap();
    mesh.write(&dict_path, Some(&vtk_path)).unwrap();

    let dict = std::fs::read_to_string(&dict_path).unwrap();
    assert!(dict.contains("hex (0 1 2 3 4 5 6 7)"));
    assert!(dict.ends_with('\n'));

    let vtk = std::fs::read_to_string(&vtk_path).unwrap();
    assert!(vtk.contains("DATASET UNSTRUCTURED_GRID"));

    let _ = std::fs::remove_file(dict_path);
    let _ = std::fs::remove_file(vtk_path);
}

#[test]
fn write_without_chops_fails_before_touching_any_file() {
    let dir = std::env::temp_dir();
    let dict_path = dir.join("hexmesh_test_should_not_exist");
    let vtk_path = dir.join("hexmesh_test_should_not_exist.vtk");
    let _ = std::fs::remove_file(&dict_path);
    let _ = std::fs::remove_file(&vtk_path);

    let mut mesh = Mesh::new();
    mesh.add(&box_at(Vec3::zeros())).unwrap();
    assert!(mesh.write(&dict_path, Some(&vtk_path)).is_err());
    assert!(!dict_path.exists());
    // the debug dump must not survive a failed write either
    assert!(!vtk_path.exists());
}

#[test]
fn merge_patches_after_assemble_is_rejected() {
    let mut mesh = Mesh::new();
    let mut a = box_at(Vec3::zeros());
    chop_all(&mut a, 2);
    mesh.add(&a).unwrap();
    mesh.assemble().unwrap();

    assert!(matches!(
        mesh.merge_patches("master_side", "slave_side"),
        Err(MeshError::AlreadyAssembled)
    ));
    assert!(mesh.patch_list.merged.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// No two distinct vertices ever end up within the merge tolerance,
    /// no matter how boxes coincide or nearly coincide.
    #[test]
    fn vertices_stay_separated(
        offsets in proptest::collection::vec((0u8..3, 0u8..3, 0u8..3), 1..6),
        jitter in proptest::collection::vec(0u8..2, 24),
    ) {
        let mut mesh = Mesh::new();
        for (i, (x, y, z)) in offsets.iter().enumerate() {
            let wiggle = jitter[i % jitter.len()] as f64 * 1e-8;
            let origin = Vec3::new(*x as f64 + wiggle, *y as f64, *z as f64);
            mesh.add(&box_at(origin)).unwrap();
        }
        mesh.assemble().unwrap();

        let vertices = &mesh.vertex_list.vertices;
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                let distance = (vertices[i].position - vertices[j].position).norm();
                prop_assert!(distance >= mesh.cfg.tol_point);
            }
        }
    }

    /// Every block's wires hit exactly the canonical corner-pair schema.
    #[test]
    fn wires_follow_canonical_schema(
        offsets in proptest::collection::vec((0u8..3, 0u8..3, 0u8..3), 1..5),
    ) {
        let mut mesh = Mesh::new();
        for (x, y, z) in &offsets {
            mesh.add(&box_at(Vec3::new(*x as f64, *y as f64, *z as f64))).unwrap();
        }
        mesh.assemble().unwrap();

        for block in &mesh.block_list.blocks {
            for (axis, pairs) in AXIS_PAIRS.iter().enumerate() {
                for (slot, &(c1, c2)) in pairs.iter().enumerate() {
                    let wire = &block.axes[axis].wires[slot];
                    prop_assert_eq!(wire.corners, (c1, c2));
                    prop_assert_eq!(wire.vertices.0, block.vertices[c1]);
                    prop_assert_eq!(wire.vertices.1, block.vertices[c2]);
                }
            }
        }
    }

    /// After propagation, the four wires of every axis and all coincident
    /// wires across blocks agree on count.
    #[test]
    fn counts_agree_after_propagation(
        count in 2usize..12,
        row in 2usize..5,
    ) {
        let mut mesh = Mesh::new();
        let mut first = box_at(Vec3::zeros());
        chop_all(&mut first, count);
        mesh.add(&first).unwrap();
        for i in 1..row {
            mesh.add(&box_at(Vec3::new(i as f64, 0.0, 0.0))).unwrap();
        }
        mesh.ensure_graded().unwrap();

        for block in &mesh.block_list.blocks {
            for axis in &block.axes {
                let counts = axis.counts();
                prop_assert!(counts.iter().all(|&c| c == counts[0]));
                prop_assert_eq!(counts[0], count);
            }
        }
    }
}
