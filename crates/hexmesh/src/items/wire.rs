//! Wires: the twelve directed edges of a block.

use crate::grading::Grading;

use super::block::BlockId;
use super::edge::EdgeId;
use super::vertex::VertexId;

/// Address of a wire inside the block list: block, local axis, slot 0..3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WireRef {
    pub block: BlockId,
    pub axis: usize,
    pub slot: usize,
}

/// The association of one block edge with its vertices, shared edge entry
/// and grading.
///
/// Up to four wires of neighbouring blocks can occupy the same pair of
/// vertices; those are linked through `coincidents` together with whether
/// they run in the same direction.
#[derive(Clone, Debug)]
pub struct Wire {
    /// Block-local corner indices, in canonical (+axis) direction.
    pub corners: (usize, usize),
    pub vertices: (VertexId, VertexId),
    pub axis: usize,
    pub edge: EdgeId,
    /// Length of the underlying edge, cached for grading arithmetic.
    pub length: f64,
    pub grading: Grading,
    /// `(other wire, same direction)` for wires at the same spot.
    pub coincidents: Vec<(WireRef, bool)>,
}

impl Wire {
    /// True when both wires connect the same two vertices, in any direction.
    pub fn is_coincident(&self, other: &Wire) -> bool {
        self.vertices == other.vertices
            || self.vertices == (other.vertices.1, other.vertices.0)
    }

    /// True when a coincident wire runs in the same direction.
    pub fn is_aligned(&self, other: &Wire) -> bool {
        debug_assert!(self.is_coincident(other), "wires are not coincident");
        self.vertices == other.vertices
    }

    pub fn add_coincident(&mut self, wire: WireRef, aligned: bool) {
        if !self.coincidents.iter().any(|(w, _)| *w == wire) {
            self.coincidents.push((wire, aligned));
        }
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        self.grading.is_defined()
    }
}
