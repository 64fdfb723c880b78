//! Blocks: eight vertices, twelve wires, three axes.

use crate::construct::Orient;

use super::axis::Axis;
use super::vertex::VertexId;
use super::wire::Wire;

/// Stable index of a block in the mesh's block list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub usize);

/// A hexahedral block: vertices in canonical corner order plus the wire
/// frame grouped by local axis.
#[derive(Clone, Debug)]
pub struct Block {
    pub id: BlockId,
    pub vertices: [VertexId; 8],
    pub axes: [Axis; 3],
    pub cell_zone: String,
    /// Sides projected to named geometry.
    pub projections: Vec<(Orient, String)>,
}

impl Block {
    pub fn new(id: BlockId, vertices: [VertexId; 8], wires: [[Wire; 4]; 3]) -> Self {
        let [w0, w1, w2] = wires;
        Self {
            id,
            vertices,
            axes: [Axis::new(0, w0), Axis::new(1, w1), Axis::new(2, w2)],
            cell_zone: String::new(),
            projections: Vec::new(),
        }
    }

    /// Mesh vertex ids of one side, in outward-facing order.
    pub fn side_vertices(&self, orient: Orient) -> [VertexId; 4] {
        orient.corners().map(|c| self.vertices[c])
    }

    /// Cell counts along the three axes; valid once gradings are defined.
    pub fn counts(&self) -> [usize; 3] {
        self.axes
            .each_ref()
            .map(|axis| axis.wires[0].grading.count())
    }

    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.axes.iter().flat_map(|axis| axis.wires.iter())
    }
}
