//! Projected block sides (the `faces` section of the output).

use crate::items::VertexId;

/// A block side projected to named geometry.
#[derive(Clone, Debug)]
pub struct ProjectedFace {
    pub vertices: [VertexId; 4],
    pub geometry: String,
}

/// Projected faces in declaration order, deduplicated by vertex set.
#[derive(Clone, Debug, Default)]
pub struct FaceList {
    pub faces: Vec<ProjectedFace>,
}

impl FaceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, vertices: [VertexId; 4], geometry: &str) {
        let mut key = vertices;
        key.sort();
        let exists = self.faces.iter().any(|f| {
            let mut other = f.vertices;
            other.sort();
            other == key
        });
        if !exists {
            self.faces.push(ProjectedFace {
                vertices,
                geometry: geometry.to_string(),
            });
        }
    }
}
