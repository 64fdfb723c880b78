//! Block axes: four wires along one local direction.

use crate::grading::{Chop, Take};

use super::block::BlockId;
use super::vertex::VertexId;
use super::wire::Wire;

/// Canonical corner pairs of the twelve block wires, grouped by local axis.
/// All four wires of an axis point in the +axis direction.
pub const AXIS_PAIRS: [[(usize, usize); 4]; 3] = [
    [(0, 1), (3, 2), (4, 5), (7, 6)],
    [(0, 3), (1, 2), (4, 7), (5, 6)],
    [(0, 4), (1, 5), (2, 6), (3, 7)],
];

/// One of the three local directions of a block.
#[derive(Clone, Debug)]
pub struct Axis {
    pub index: usize,
    pub wires: [Wire; 4],
    pub chops: Vec<Chop>,
    /// Axes of other blocks sharing at least one wire.
    pub neighbours: Vec<(BlockId, usize)>,
    /// Axes of blocks stacked end-to-end on this direction.
    pub sequential: Vec<(BlockId, usize)>,
}

impl Axis {
    pub fn new(index: usize, wires: [Wire; 4]) -> Self {
        Self {
            index,
            wires,
            chops: Vec::new(),
            neighbours: Vec::new(),
            sequential: Vec::new(),
        }
    }

    /// Idempotent; the neighbour set never holds duplicates.
    pub fn add_neighbour(&mut self, block: BlockId, axis: usize) {
        if !self.neighbours.contains(&(block, axis)) {
            self.neighbours.push((block, axis));
        }
    }

    pub fn add_sequential(&mut self, block: BlockId, axis: usize) {
        if !self.sequential.contains(&(block, axis)) {
            self.sequential.push((block, axis));
        }
    }

    pub fn lengths(&self) -> [f64; 4] {
        [
            self.wires[0].length,
            self.wires[1].length,
            self.wires[2].length,
            self.wires[3].length,
        ]
    }

    /// Axis length according to the `take` of the first chop (average when
    /// there are no chops yet).
    pub fn length(&self) -> f64 {
        let take = self.chops.first().map(|c| c.take).unwrap_or(Take::Avg);
        let lengths = self.lengths();
        match take {
            Take::Min => lengths.into_iter().fold(f64::INFINITY, f64::min),
            Take::Max => lengths.into_iter().fold(0.0, f64::max),
            Take::Avg => lengths.iter().sum::<f64>() / 4.0,
        }
    }

    /// All four wires carry a defined grading.
    pub fn is_defined(&self) -> bool {
        self.wires.iter().all(Wire::is_defined)
    }

    /// The four vertices the axis starts from.
    pub fn start_vertices(&self) -> [VertexId; 4] {
        let mut set = self.wires.each_ref().map(|w| w.vertices.0);
        set.sort();
        set
    }

    /// The four vertices the axis ends at.
    pub fn end_vertices(&self) -> [VertexId; 4] {
        let mut set = self.wires.each_ref().map(|w| w.vertices.1);
        set.sort();
        set
    }

    /// Cell counts of the four wires (0 for undefined gradings).
    pub fn counts(&self) -> [usize; 4] {
        self.wires.each_ref().map(|w| w.grading.count())
    }
}
