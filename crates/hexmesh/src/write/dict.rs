//! Block-mesh dictionary serialization.

use std::fmt::Write as _;

use crate::errors::MeshError;
use crate::geometry::Vec3;
use crate::grading::Grading;
use crate::items::EdgeKind;
use crate::mesh::Mesh;

const HEADER: &str = "\
/*--------------------------------*- C++ -*----------------------------------*\\
| =========                 |                                                 |
| \\\\      /  F ield         | OpenFOAM: The Open Source CFD Toolbox           |
|  \\\\    /   O peration     | Version:  v2206                                 |
|   \\\\  /    A nd           | Website:  www.openfoam.com                      |
|    \\\\/     M anipulation  |                                                 |
\\*---------------------------------------------------------------------------*/
FoamFile
{
    version     2.0;
    format      ascii;
    class       dictionary;
    object      blockMeshDict;
}
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //

";

const FOOTER: &str =
    "// ************************************************************************* //\n";

/// Serialize the whole mesh. Validates first: every wire must carry a
/// defined grading before a single byte is produced.
pub fn format_mesh(mesh: &Mesh) -> Result<String, MeshError> {
    let mut undefined = Vec::new();
    for block in &mesh.block_list.blocks {
        for axis in &block.axes {
            if !axis.is_defined() {
                undefined.push((block.id.0, axis.index));
            }
        }
    }
    if !undefined.is_empty() {
        return Err(MeshError::UndefinedGradings { axes: undefined });
    }

    let precision = mesh.cfg.write_precision;
    let mut out = String::new();

    out.push_str(HEADER);
    let _ = writeln!(out, "scale {};", mesh.settings.scale);
    if let Some(merge_type) = &mesh.settings.merge_type {
        let _ = writeln!(out, "mergeType {merge_type};");
    }
    out.push('\n');

    write_geometry(&mut out, mesh);
    write_vertices(&mut out, mesh, precision);
    write_blocks(&mut out, mesh);
    write_edges(&mut out, mesh, precision);
    write_faces(&mut out, mesh);
    write_boundary(&mut out, mesh);
    write_merged(&mut out, mesh);
    write_default_patch(&mut out, mesh);

    out.push_str(FOOTER);
    Ok(out)
}

fn fmt_point(p: Vec3, precision: usize) -> String {
    format!(
        "({:.precision$} {:.precision$} {:.precision$})",
        p.x, p.y, p.z
    )
}

fn write_geometry(out: &mut String, mesh: &Mesh) {
    if mesh.geometry_list.is_empty() {
        return;
    }
    out.push_str("geometry\n{\n");
    for (name, properties) in &mesh.geometry_list.entries {
        let _ = writeln!(out, "\t{name}\n\t{{");
        for property in properties {
            let _ = writeln!(out, "\t\t{property};");
        }
        out.push_str("\t}\n");
    }
    out.push_str("};\n\n");
}

fn write_vertices(out: &mut String, mesh: &Mesh, precision: usize) {
    out.push_str("vertices\n(\n");
    for vertex in &mesh.vertex_list.vertices {
        let point = fmt_point(vertex.position, precision);
        if vertex.projections.is_empty() {
            let _ = writeln!(out, "\t{point} // {}", vertex.id.0);
        } else {
            let _ = writeln!(
                out,
                "\tproject {point} ({}) // {}",
                vertex.projections.join(" "),
                vertex.id.0
            );
        }
    }
    out.push_str(");\n\n");
}

fn write_blocks(out: &mut String, mesh: &Mesh) {
    out.push_str("blocks\n(\n");
    for block in &mesh.block_list.blocks {
        let corners = block
            .vertices
            .iter()
            .map(|v| v.0.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let counts = block
            .counts()
            .map(|c| c.to_string())
            .join(" ");
        let gradings = block
            .wires()
            .map(|wire| fmt_grading(&wire.grading))
            .collect::<Vec<_>>()
            .join(" ");

        let zone = if block.cell_zone.is_empty() {
            String::new()
        } else {
            format!("{} ", block.cell_zone)
        };
        let _ = writeln!(
            out,
            "\thex ({corners}) {zone}({counts}) edgeGrading ({gradings}) // {}",
            block.id.0
        );
    }
    out.push_str(");\n\n");
}

/// A single-segment grading prints as its expansion; a multi-segment one as
/// `(length_fraction count_fraction expansion)` triples.
fn fmt_grading(grading: &Grading) -> String {
    if grading.segments.len() == 1 {
        return format!("{}", grading.segments[0].expansion);
    }
    let total: usize = grading.count();
    let triples = grading
        .segments
        .iter()
        .map(|seg| {
            format!(
                "({} {} {})",
                seg.fraction,
                seg.count as f64 / total as f64,
                seg.expansion
            )
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("({triples})")
}

fn write_edges(out: &mut String, mesh: &Mesh, precision: usize) {
    out.push_str("edges\n(\n");
    for edge in &mesh.edge_list.edges {
        let (a, b) = (edge.vertices.0 .0, edge.vertices.1 .0);
        match &edge.kind {
            EdgeKind::Line => {}
            EdgeKind::Arc { through } => {
                let _ = writeln!(out, "\tarc {a} {b} {}", fmt_point(*through, precision));
            }
            EdgeKind::Origin { origin, flatness } => {
                let flatness = if (*flatness - 1.0).abs() > 1e-12 {
                    format!("{flatness} ")
                } else {
                    String::new()
                };
                let _ = writeln!(
                    out,
                    "\tarc {a} {b} origin {flatness}{}",
                    fmt_point(*origin, precision)
                );
            }
            EdgeKind::Spline { points } | EdgeKind::PolyLine { points } => {
                let keyword = if matches!(edge.kind, EdgeKind::Spline { .. }) {
                    "spline"
                } else {
                    "polyLine"
                };
                let interior = points
                    .iter()
                    .map(|p| fmt_point(*p, precision))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = writeln!(out, "\t{keyword} {a} {b} ({interior})");
            }
            EdgeKind::Project { geometries } => {
                let _ = writeln!(out, "\tproject {a} {b} ({})", geometries.join(" "));
            }
        }
    }
    out.push_str(");\n\n");
}

fn write_faces(out: &mut String, mesh: &Mesh) {
    if mesh.face_list.faces.is_empty() {
        return;
    }
    out.push_str("faces\n(\n");
    for face in &mesh.face_list.faces {
        let corners = face
            .vertices
            .iter()
            .map(|v| v.0.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "\tproject ({corners}) {}", face.geometry);
    }
    out.push_str(");\n\n");
}

fn write_boundary(out: &mut String, mesh: &Mesh) {
    out.push_str("boundary\n(\n");
    for patch in &mesh.patch_list.patches {
        let _ = writeln!(out, "\t{}\n\t{{", patch.name);
        let _ = writeln!(out, "\t\ttype {};", patch.kind.as_str());
        for setting in &patch.settings {
            let _ = writeln!(out, "\t\t{setting};");
        }
        out.push_str("\t\tfaces\n\t\t(\n");
        for side in &patch.sides {
            let corners = side
                .vertices
                .iter()
                .map(|v| v.0.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "\t\t\t({corners})");
        }
        out.push_str("\t\t);\n\t}\n");
    }
    out.push_str(");\n\n");
}

fn write_merged(out: &mut String, mesh: &Mesh) {
    if mesh.patch_list.merged.is_empty() {
        return;
    }
    out.push_str("mergePatchPairs\n(\n");
    for (master, slave) in &mesh.patch_list.merged {
        let _ = writeln!(out, "\t({master} {slave})");
    }
    out.push_str(");\n\n");
}

fn write_default_patch(out: &mut String, mesh: &Mesh) {
    if let Some((name, kind)) = &mesh.patch_list.default_patch {
        let _ = writeln!(
            out,
            "defaultPatch\n{{\n\tname {name};\n\ttype {};\n}}\n",
            kind.as_str()
        );
    }
}
