//! The mesh: registries, lifecycle and output.

use std::path::Path;

use log::warn;

use crate::cfg::MeshCfg;
use crate::construct::edges::EdgeData;
use crate::construct::operation::{Operation, Orient};
use crate::construct::Additive;
use crate::errors::MeshError;
use crate::geometry::Vec3;
use crate::grading::Grading;
use crate::items::{Block, BlockId, EdgeKind, VertexId, Wire, AXIS_PAIRS};
use crate::lists::{
    BlockList, EdgeList, FaceList, GeometryList, PatchKind, PatchList, VertexList,
};
use crate::write;

/// Global output settings.
#[derive(Clone, Debug)]
pub struct MeshSettings {
    pub scale: f64,
    /// `points` falls back to the older point-based block merging.
    pub merge_type: Option<String>,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            merge_type: None,
        }
    }
}

/// Owns everything: vertex/edge/block registries, patches, settings.
///
/// Lifecycle: operations are collected by [`Mesh::add`], converted into the
/// deduplicated block graph by [`Mesh::assemble`], graded and serialized by
/// [`Mesh::write`]. Adding after assembly is an error; assembling or writing
/// twice is not.
#[derive(Debug)]
pub struct Mesh {
    pub cfg: MeshCfg,
    operations: Vec<Operation>,
    pub vertex_list: VertexList,
    pub edge_list: EdgeList,
    pub block_list: BlockList,
    pub patch_list: PatchList,
    pub face_list: FaceList,
    pub geometry_list: GeometryList,
    pub settings: MeshSettings,
    assembled: bool,
    graded: bool,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    pub fn new() -> Self {
        Self::with_cfg(MeshCfg::default())
    }

    pub fn with_cfg(cfg: MeshCfg) -> Self {
        Self {
            cfg,
            operations: Vec::new(),
            vertex_list: VertexList::new(cfg),
            edge_list: EdgeList::new(),
            block_list: BlockList::new(),
            patch_list: PatchList::new(),
            face_list: FaceList::new(),
            geometry_list: GeometryList::new(),
            settings: MeshSettings::default(),
            assembled: false,
            graded: false,
        }
    }

    /// Queue the operations of a shape (or a single operation) for assembly.
    pub fn add<A: Additive + ?Sized>(&mut self, additive: &A) -> Result<(), MeshError> {
        if self.assembled {
            return Err(MeshError::AlreadyAssembled);
        }
        self.operations.extend(additive.operations());
        Ok(())
    }

    /// Any non-specified block boundary will be assigned this patch.
    pub fn set_default_patch(&mut self, name: &str, kind: PatchKind) {
        self.patch_list.set_default(name, kind);
    }

    /// Change a patch's type and extra settings.
    pub fn modify_patch(&mut self, name: &str, kind: PatchKind, settings: &[&str]) {
        self.patch_list.modify(name, kind, settings);
    }

    /// Merge two non-conforming patches using face merging. Slave-side
    /// vertices are kept separate during assembly, so the pair must be
    /// declared before it; afterwards the declaration could no longer
    /// affect the topology and is rejected.
    pub fn merge_patches(&mut self, master: &str, slave: &str) -> Result<(), MeshError> {
        if self.assembled {
            return Err(MeshError::AlreadyAssembled);
        }
        self.patch_list.merge(master, slave);
        Ok(())
    }

    /// Register a named geometry entry for projections.
    pub fn add_geometry<S: Into<String>>(
        &mut self,
        name: &str,
        properties: impl IntoIterator<Item = S>,
    ) {
        self.geometry_list.add(name, properties);
    }

    /// Convert the collected operations into the deduplicated block graph.
    /// Idempotent; a no-op once assembled.
    pub fn assemble(&mut self) -> Result<(), MeshError> {
        if self.assembled {
            return Ok(());
        }
        let operations = std::mem::take(&mut self.operations);
        for operation in &operations {
            self.add_operation(operation)?;
        }
        self.assembled = true;
        Ok(())
    }

    #[inline]
    pub fn is_assembled(&self) -> bool {
        self.assembled
    }

    #[inline]
    pub fn position(&self, vertex: VertexId) -> Vec3 {
        self.vertex_list.position(vertex)
    }

    /// Resolve all wire gradings; implicit in `write`.
    pub fn ensure_graded(&mut self) -> Result<(), MeshError> {
        self.assemble()?;
        if !self.graded {
            self.block_list.propagate_gradings(&self.cfg)?;
            self.graded = true;
        }
        Ok(())
    }

    /// Write the block-mesh dictionary; optionally a debug VTK file with one
    /// hexahedron per block. Assembly, grading and formatting all happen
    /// before either file is touched, so a failed call leaves no output
    /// behind.
    pub fn write(
        &mut self,
        path: impl AsRef<Path>,
        debug_path: Option<&Path>,
    ) -> Result<(), MeshError> {
        self.ensure_graded()?;
        let text = write::dict::format_mesh(self)?;
        if let Some(debug_path) = debug_path {
            std::fs::write(debug_path, write::vtk::format_vtk(self))?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    /// One operation → one block, with everything deduplicated on the way.
    fn add_operation(&mut self, operation: &Operation) -> Result<(), MeshError> {
        let block_id = BlockId(self.block_list.len());

        // points on the slave side of a merged patch pair deduplicate only
        // among themselves
        let slave_names: Vec<String> = self
            .patch_list
            .slave_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut corner_slave: [Option<&str>; 8] = [None; 8];
        for (orient, name) in &operation.patch_names {
            if slave_names.iter().any(|s| s == name) {
                for corner in orient.corners() {
                    corner_slave[corner] = Some(name.as_str());
                }
            }
        }

        let mut ids = [VertexId(0); 8];
        for corner in 0..8 {
            let point = if corner < 4 {
                &operation.bottom.points[corner]
            } else {
                &operation.top.points[corner - 4]
            };
            ids[corner] = self.vertex_list.add(point, corner_slave[corner]);
        }

        for i in 0..8 {
            for j in (i + 1)..8 {
                if ids[i] == ids[j] {
                    return Err(MeshError::DegenerateBlock {
                        block: block_id.0,
                        corners: (i, j),
                    });
                }
            }
        }

        self.warn_nonplanar(block_id, &ids);

        // user-declared curved edges, keyed by their oriented corner pair
        let mut descriptors: Vec<((usize, usize), EdgeKind)> = Vec::new();
        for (slot, data) in operation.bottom.edges.iter().enumerate() {
            if let Some(data) = data {
                descriptors.push(((slot, (slot + 1) % 4), to_edge_kind(data)));
            }
        }
        for (slot, data) in operation.top.edges.iter().enumerate() {
            if let Some(data) = data {
                descriptors.push(((4 + slot, 4 + (slot + 1) % 4), to_edge_kind(data)));
            }
        }
        for (corner, data) in operation.side_edges.iter().enumerate() {
            if let Some(data) = data {
                descriptors.push(((corner, corner + 4), to_edge_kind(data)));
            }
        }

        let mut wires: Vec<[Option<Wire>; 4]> = vec![[None, None, None, None]; 3];
        for (axis, pairs) in AXIS_PAIRS.iter().enumerate() {
            for (slot, &(c1, c2)) in pairs.iter().enumerate() {
                let declared = descriptors
                    .iter()
                    .find(|((a, b), _)| (*a, *b) == (c1, c2) || (*a, *b) == (c2, c1));

                let edge_id = if let Some(((a, b), kind)) = declared {
                    self.edge_list
                        .add(ids[*a], ids[*b], kind.clone(), &self.cfg)?
                } else {
                    self.edge_list
                        .add(ids[c1], ids[c2], EdgeKind::Line, &self.cfg)?
                };

                let edge = self.edge_list.get(edge_id);
                let length = edge.kind.length(
                    self.vertex_list.position(edge.vertices.0),
                    self.vertex_list.position(edge.vertices.1),
                );

                wires[axis][slot] = Some(Wire {
                    corners: (c1, c2),
                    vertices: (ids[c1], ids[c2]),
                    axis,
                    edge: edge_id,
                    length,
                    grading: Grading::new(length),
                    coincidents: Vec::new(),
                });
            }
        }
        let wires: [[Wire; 4]; 3] =
            std::array::from_fn(|axis| std::array::from_fn(|slot| wires[axis][slot].take().unwrap()));

        let mut block = Block::new(block_id, ids, wires);
        block.cell_zone = operation.cell_zone.clone();
        block.projections = operation.side_projections.clone();
        for axis in 0..3 {
            block.axes[axis].chops = operation.chops[axis].clone();
        }

        for (orient, name) in &operation.patch_names {
            self.patch_list
                .add_side(name, block_id, *orient, block.side_vertices(*orient))?;
        }
        for (orient, geometry) in &operation.side_projections {
            self.face_list.add(block.side_vertices(*orient), geometry);
        }

        self.block_list.add(block);
        Ok(())
    }

    fn warn_nonplanar(&self, block_id: BlockId, ids: &[VertexId; 8]) {
        for orient in Orient::ALL {
            let [a, b, c, d] = orient
                .corners()
                .map(|corner| self.vertex_list.position(ids[corner]));
            let normal = (c - a).cross(&(d - b));
            let diag = (c - a).norm().max((d - b).norm());
            if normal.norm() < 1e-30 || diag == 0.0 {
                continue;
            }
            let deviation = (b - a).dot(&normal.normalize()).abs() / diag;
            if deviation > self.cfg.warn_planarity {
                warn!(
                    "side {} of block {} is strongly non-planar (relative deviation {:.3})",
                    orient.name(),
                    block_id.0,
                    deviation
                );
            }
        }
    }
}

/// Materialize a user edge descriptor into a registry edge kind.
fn to_edge_kind(data: &EdgeData) -> EdgeKind {
    match data {
        EdgeData::Arc { through } => EdgeKind::Arc {
            through: through.position,
        },
        EdgeData::Origin { origin, flatness } => EdgeKind::Origin {
            origin: origin.position,
            flatness: *flatness,
        },
        EdgeData::Spline { points } => EdgeKind::Spline {
            points: points.iter().map(|p| p.position).collect(),
        },
        EdgeData::PolyLine { points } => EdgeKind::PolyLine {
            points: points.iter().map(|p| p.position).collect(),
        },
        EdgeData::Project { geometries } => EdgeKind::Project {
            geometries: geometries.clone(),
        },
    }
}

#[cfg(test)]
mod tests;
