//! Error taxonomy.
//!
//! Domain failures are structured values surfaced to the caller; nothing is
//! recovered internally. Programming errors (bad corner indices and the like)
//! stay assertions.

use thiserror::Error;

use crate::geometry::Vec3;

/// Any failure surfaced by mesh assembly, grading or writing.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("no vertex found near ({:.6}, {:.6}, {:.6})", position.x, position.y, position.z)]
    VertexNotFound { position: Vec3 },

    #[error("no edge between vertices {0} and {1}", vertices.0, vertices.1)]
    EdgeNotFound { vertices: (usize, usize) },

    #[error(
        "conflicting edge kinds between vertices {} and {}: {existing} vs. {requested}",
        vertices.0, vertices.1
    )]
    ConflictingEdgeKinds {
        vertices: (usize, usize),
        existing: &'static str,
        requested: &'static str,
    },

    #[error("not enough chops to define all gradings; undefined (block, axis) pairs: {axes:?}")]
    UndefinedGradings { axes: Vec<(usize, usize)> },

    #[error("wires of block {block}, axis {axis} disagree on cell count: {counts:?}")]
    InconsistentGradings {
        block: usize,
        axis: usize,
        counts: Vec<usize>,
    },

    #[error("block {block} is degenerate: corners {} and {} coincide", corners.0, corners.1)]
    DegenerateBlock {
        block: usize,
        corners: (usize, usize),
    },

    #[error("invalid chop: {0}")]
    InvalidChop(String),

    #[error("side {orient} of block {block} is claimed by patches {existing:?} and {requested:?}")]
    PatchConflict {
        block: usize,
        orient: &'static str,
        existing: String,
        requested: String,
    },

    #[error("mesh is already assembled; create a new mesh to add more operations")]
    AlreadyAssembled,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
