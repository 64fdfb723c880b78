//! Build and optimize a rapidly expanding diffuser.
//!
//! A small pipe feeds a short frustum that opens into a wide pipe. The
//! abrupt expansion makes the blocks around the frustum strongly
//! non-orthogonal; releasing the inner ring of vertices lets the optimizer
//! pull them into better positions before the dictionary is written.

use hexmesh::prelude::*;

fn main() {
    let size = 0.1;
    let mut mesh = Mesh::new();

    let mut small_pipe = Cylinder::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    small_pipe.chop_axial(Chop::new().start_size(size));
    small_pipe.chop_radial(Chop::new().start_size(size));
    small_pipe.chop_tangential(Chop::new().start_size(size));
    mesh.add(&small_pipe).unwrap();

    let mut diffuser = Frustum::chain(&small_pipe, 0.5, 2.0);
    diffuser.chop_axial(Chop::new().start_size(size));
    mesh.add(&diffuser).unwrap();

    let mut big_pipe = Cylinder::chain(&diffuser, 5.0);
    big_pipe.chop_axial(Chop::new().start_size(size));
    mesh.add(&big_pipe).unwrap();

    mesh.set_default_patch("walls", PatchKind::Wall);
    mesh.assemble().unwrap();

    // the inner vertices around the expansion, found experimentally
    let inner = VertexFinder::new(&mesh).by_position(Vec3::new(3.5, 0.0, 0.0), 1.75);

    let mut optimizer = Optimizer::new(&mut mesh).max_iter(200);
    for vertex in inner {
        let position = optimizer.mesh().position(vertex);
        optimizer.release_vertex(Clamp::free(vertex, position));
    }

    let report = optimizer.optimize().unwrap();
    println!(
        "quality {:.3} -> {:.3} in {} evaluations (improved: {})",
        report.initial_quality, report.final_quality, report.evaluations, report.improved
    );

    mesh.write("blockMeshDict", Some(std::path::Path::new("debug.vtk")))
        .unwrap();
    println!("wrote blockMeshDict and debug.vtk");
}
