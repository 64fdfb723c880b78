//! Vertex registry.

use crate::cfg::MeshCfg;
use crate::geometry::{Point, Vec3};
use crate::items::{Vertex, VertexId};

/// Owns all vertices; guarantees no two live within the merge tolerance.
///
/// Vertices on the slave side of a merged patch pair are kept in their own
/// per-patch pool so the two sides of the merge stay topologically separate.
#[derive(Clone, Debug)]
pub struct VertexList {
    cfg: MeshCfg,
    pub vertices: Vec<Vertex>,
}

impl VertexList {
    pub fn new(cfg: MeshCfg) -> Self {
        Self {
            cfg,
            vertices: Vec::new(),
        }
    }

    /// Find-or-create a vertex at the point's position. Projection targets
    /// of the incoming point are merged into the existing vertex.
    pub fn add(&mut self, point: &Point, slave_patch: Option<&str>) -> VertexId {
        let existing = self.vertices.iter_mut().find(|v| {
            v.slave_patch.as_deref() == slave_patch
                && (v.position - point.position).norm() < self.cfg.tol_point
        });

        if let Some(vertex) = existing {
            for name in &point.projections {
                if !vertex.projections.contains(name) {
                    vertex.projections.push(name.clone());
                }
            }
            return vertex.id;
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            id,
            position: point.position,
            projections: point.projections.clone(),
            slave_patch: slave_patch.map(str::to_string),
        });
        id
    }

    #[inline]
    pub fn position(&self, id: VertexId) -> Vec3 {
        self.vertices[id.0].position
    }

    #[inline]
    pub fn set_position(&mut self, id: VertexId, position: Vec3) {
        self.vertices[id.0].position = position;
    }

    /// All vertices within `radius` of `position`, in index order.
    pub fn find(&self, position: Vec3, radius: f64) -> Vec<VertexId> {
        self.vertices
            .iter()
            .filter(|v| (v.position - position).norm() <= radius)
            .map(|v| v.id)
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
