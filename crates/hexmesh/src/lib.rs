//! Structured-hexahedral block-mesh pre-processing.
//!
//! Users assemble 3D geometry from parameterized solids (boxes, cylinders,
//! frustums, elbows, rings, shells), declare cell counts and gradings along
//! each local axis, tag outer faces with named boundary patches, and emit a
//! block-mesh dictionary for an external finite-volume grid generator.
//!
//! The pipeline: shapes produce [`construct::Operation`]s, [`mesh::Mesh::add`]
//! collects them, [`mesh::Mesh::assemble`] deduplicates vertices and edges
//! into a block graph, grading propagation fills every block edge with a cell
//! count and expansion, an optional optimizer moves constrained vertices to
//! improve cell quality, and [`mesh::Mesh::write`] serializes the result.

pub mod cfg;
pub mod construct;
pub mod errors;
pub mod geometry;
pub mod grading;
pub mod items;
pub mod lists;
pub mod mesh;
pub mod optimize;
pub mod write;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::MeshCfg;
pub use errors::MeshError;
pub use mesh::Mesh;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::MeshCfg;
    pub use crate::construct::edges::EdgeData;
    pub use crate::construct::face::Face;
    pub use crate::construct::operation::Operation;
    pub use crate::construct::shapes::{
        Cylinder, Elbow, ExtrudedShape, Frustum, RevolvedRing, Round, Shell,
    };
    pub use crate::construct::sketches::{Disk, Grid};
    pub use crate::construct::Additive;
    pub use crate::errors::MeshError;
    pub use crate::geometry::{Point, Vec3};
    pub use crate::grading::chop::{Chop, Take};
    pub use crate::lists::patch_list::PatchKind;
    pub use crate::mesh::Mesh;
    pub use crate::optimize::clamps::Clamp;
    pub use crate::optimize::finder::VertexFinder;
    pub use crate::optimize::optimizer::Optimizer;
}
