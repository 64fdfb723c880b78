//! Mesh vertices.

use crate::geometry::Vec3;

/// Stable index of a vertex in the mesh's vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// A materialized point with a process-unique index.
///
/// Created only through the vertex list, which guarantees that no two
/// vertices lie within the point-merge tolerance of each other (vertices
/// duplicated for merged slave patches excepted).
#[derive(Clone, Debug)]
pub struct Vertex {
    pub id: VertexId,
    pub position: Vec3,
    /// Named geometries this vertex is projected to.
    pub projections: Vec<String>,
    /// Set when the vertex was duplicated for the slave side of a merged
    /// patch pair; such vertices deduplicate only among themselves.
    pub slave_patch: Option<String>,
}
