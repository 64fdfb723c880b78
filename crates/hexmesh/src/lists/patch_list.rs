//! Boundary patches.

use std::collections::HashMap;

use crate::construct::Orient;
use crate::errors::MeshError;
use crate::items::{BlockId, VertexId};

/// Boundary condition category of a patch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatchKind {
    #[default]
    Patch,
    Wall,
    Empty,
    Wedge,
    SymmetryPlane,
    Symmetry,
    Cyclic,
}

impl PatchKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            PatchKind::Patch => "patch",
            PatchKind::Wall => "wall",
            PatchKind::Empty => "empty",
            PatchKind::Wedge => "wedge",
            PatchKind::SymmetryPlane => "symmetryPlane",
            PatchKind::Symmetry => "symmetry",
            PatchKind::Cyclic => "cyclic",
        }
    }
}

/// One block side belonging to a patch.
#[derive(Clone, Debug)]
pub struct PatchSide {
    pub block: BlockId,
    pub orient: Orient,
    pub vertices: [VertexId; 4],
}

/// A named boundary group of block sides.
#[derive(Clone, Debug)]
pub struct Patch {
    pub name: String,
    pub kind: PatchKind,
    /// Extra dictionary entries emitted verbatim into the patch body.
    pub settings: Vec<String>,
    pub sides: Vec<PatchSide>,
}

/// All patches in declaration order, plus the default patch and merged
/// pairs.
#[derive(Clone, Debug, Default)]
pub struct PatchList {
    pub patches: Vec<Patch>,
    pub default_patch: Option<(String, PatchKind)>,
    /// `(master, slave)` pairs for face merging.
    pub merged: Vec<(String, String)>,
    /// Side ownership for conflict detection; not iterated, so the map does
    /// not affect output ordering.
    claimed: HashMap<(usize, Orient), String>,
}

impl PatchList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one block side under a patch name.
    pub fn add_side(
        &mut self,
        name: &str,
        block: BlockId,
        orient: Orient,
        vertices: [VertexId; 4],
    ) -> Result<(), MeshError> {
        if let Some(existing) = self.claimed.get(&(block.0, orient)) {
            if existing != name {
                return Err(MeshError::PatchConflict {
                    block: block.0,
                    orient: orient.name(),
                    existing: existing.clone(),
                    requested: name.to_string(),
                });
            }
            return Ok(());
        }
        self.claimed.insert((block.0, orient), name.to_string());

        let patch = self.get_or_create(name);
        patch.sides.push(PatchSide {
            block,
            orient,
            vertices,
        });
        Ok(())
    }

    /// Change a patch's kind and settings, creating it if needed.
    pub fn modify(&mut self, name: &str, kind: PatchKind, settings: &[&str]) {
        let patch = self.get_or_create(name);
        patch.kind = kind;
        patch.settings = settings.iter().map(|s| s.to_string()).collect();
    }

    pub fn set_default(&mut self, name: &str, kind: PatchKind) {
        self.default_patch = Some((name.to_string(), kind));
    }

    /// Record a merge pair. The mesh gates this behind its lifecycle: pairs
    /// declared after assembly can no longer separate slave-side vertices
    /// and are rejected there.
    pub fn merge(&mut self, master: &str, slave: &str) {
        self.merged.push((master.to_string(), slave.to_string()));
    }

    /// Names acting as the slave side of a merge pair.
    pub fn slave_names(&self) -> Vec<&str> {
        self.merged.iter().map(|(_, slave)| slave.as_str()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Patch> {
        self.patches.iter().find(|p| p.name == name)
    }

    fn get_or_create(&mut self, name: &str) -> &mut Patch {
        if let Some(i) = self.patches.iter().position(|p| p.name == name) {
            return &mut self.patches[i];
        }
        self.patches.push(Patch {
            name: name.to_string(),
            kind: PatchKind::default(),
            settings: Vec::new(),
            sides: Vec::new(),
        });
        self.patches.last_mut().unwrap()
    }
}
