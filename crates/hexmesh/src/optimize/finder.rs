//! Spatial vertex queries.

use crate::errors::MeshError;
use crate::geometry::Vec3;
use crate::items::VertexId;
use crate::mesh::Mesh;

/// Linear-scan queries over an assembled mesh's vertices. The vertex count
/// is the number of block corners, not cells, so a scan is plenty.
pub struct VertexFinder<'m> {
    mesh: &'m Mesh,
}

impl<'m> VertexFinder<'m> {
    pub fn new(mesh: &'m Mesh) -> Self {
        Self { mesh }
    }

    /// All vertices within `radius` of `position`, in index order.
    pub fn by_position(&self, position: Vec3, radius: f64) -> Vec<VertexId> {
        self.mesh.vertex_list.find(position, radius)
    }

    /// Vertices coincident with `position` (within the point tolerance).
    pub fn find_in_sphere(&self, position: Vec3) -> Vec<VertexId> {
        self.by_position(position, self.mesh.cfg.tol_point)
    }

    /// The vertex at `position`; fails when there is none.
    pub fn unique_at(&self, position: Vec3) -> Result<VertexId, MeshError> {
        self.find_in_sphere(position)
            .into_iter()
            .next()
            .ok_or(MeshError::VertexNotFound { position })
    }
}
