//! User-facing construction layer: faces, edge descriptors, operations,
//! sketches and solid shapes.
//!
//! Nothing here touches the mesh registries; an [`Operation`] is pure data
//! that [`crate::mesh::Mesh::assemble`] later converts into blocks.

pub mod edges;
pub mod face;
pub mod operation;
pub mod shapes;
pub mod sketches;

pub use edges::EdgeData;
pub use face::Face;
pub use operation::{Operation, Orient};

/// Anything that can be added to a mesh: a single operation or a compound
/// shape that expands into several.
pub trait Additive {
    fn operations(&self) -> Vec<Operation>;
}

impl Additive for Operation {
    fn operations(&self) -> Vec<Operation> {
        vec![self.clone()]
    }
}

impl Additive for Vec<Operation> {
    fn operations(&self) -> Vec<Operation> {
        self.clone()
    }
}
