//! Mesh-side entities: vertices, edges, wires, axes and blocks.
//!
//! Everything is arena-allocated and referenced by id; the registries in
//! [`crate::lists`] own the storage, items only hold plain data and ids.

pub mod axis;
pub mod block;
pub mod edge;
pub mod vertex;
pub mod wire;

pub use axis::{Axis, AXIS_PAIRS};
pub use block::{Block, BlockId};
pub use edge::{Edge, EdgeId, EdgeKind};
pub use vertex::{Vertex, VertexId};
pub use wire::{Wire, WireRef};

#[cfg(test)]
mod tests;
