//! Debug VTK dump: one hexahedron cell per block.

use std::fmt::Write as _;

use crate::mesh::Mesh;

const VTK_HEXAHEDRON: u8 = 12;

/// Legacy-format VTK with block corners as points; useful to inspect the
/// blocking when the downstream mesher rejects the real dictionary.
pub fn format_vtk(mesh: &Mesh) -> String {
    let mut out = String::new();

    out.push_str("# vtk DataFile Version 3.0\n");
    out.push_str("block mesh debug\n");
    out.push_str("ASCII\n");
    out.push_str("DATASET UNSTRUCTURED_GRID\n");

    let vertices = &mesh.vertex_list.vertices;
    let _ = writeln!(out, "POINTS {} double", vertices.len());
    for vertex in vertices {
        let p = vertex.position;
        let _ = writeln!(out, "{} {} {}", p.x, p.y, p.z);
    }

    let blocks = &mesh.block_list.blocks;
    let _ = writeln!(out, "CELLS {} {}", blocks.len(), blocks.len() * 9);
    for block in blocks {
        let corners = block
            .vertices
            .iter()
            .map(|v| v.0.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "8 {corners}");
    }

    let _ = writeln!(out, "CELL_TYPES {}", blocks.len());
    for _ in blocks {
        let _ = writeln!(out, "{VTK_HEXAHEDRON}");
    }

    out
}
