//! Edge registry.

use std::collections::HashMap;

use crate::cfg::MeshCfg;
use crate::errors::MeshError;
use crate::items::{Edge, EdgeId, EdgeKind, VertexId};

/// Owns all edges, keyed by their unordered vertex pair.
///
/// A pair seen twice resolves as follows: two lines are the same edge; a
/// curved declaration upgrades an existing line; two curved declarations
/// must describe the same geometry or assembly fails.
#[derive(Clone, Debug, Default)]
pub struct EdgeList {
    pub edges: Vec<Edge>,
    index: HashMap<(usize, usize), EdgeId>,
}

impl EdgeList {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: VertexId, b: VertexId) -> (usize, usize) {
        (a.0.min(b.0), a.0.max(b.0))
    }

    /// Find-or-create the edge from `a` to `b` with the given kind.
    pub fn add(
        &mut self,
        a: VertexId,
        b: VertexId,
        kind: EdgeKind,
        cfg: &MeshCfg,
    ) -> Result<EdgeId, MeshError> {
        let key = Self::key(a, b);

        let Some(&id) = self.index.get(&key) else {
            let id = EdgeId(self.edges.len());
            self.edges.push(Edge {
                id,
                vertices: (a, b),
                kind,
            });
            self.index.insert(key, id);
            return Ok(id);
        };

        let existing = &mut self.edges[id.0];
        // orient the incoming kind the way the stored edge runs
        let kind = if existing.vertices == (a, b) {
            kind
        } else {
            kind.reversed()
        };

        match (&existing.kind, &kind) {
            (_, EdgeKind::Line) => {}
            (EdgeKind::Line, _) => existing.kind = kind,
            (have, want) => {
                if !have.congruent(want, cfg.tol_point) {
                    return Err(MeshError::ConflictingEdgeKinds {
                        vertices: (existing.vertices.0 .0, existing.vertices.1 .0),
                        existing: have.name(),
                        requested: want.name(),
                    });
                }
            }
        }

        Ok(id)
    }

    /// Edge between two vertices, if one exists.
    pub fn find(&self, a: VertexId, b: VertexId) -> Result<EdgeId, MeshError> {
        self.index
            .get(&Self::key(a, b))
            .copied()
            .ok_or(MeshError::EdgeNotFound {
                vertices: (a.0, b.0),
            })
    }

    #[inline]
    pub fn get(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
