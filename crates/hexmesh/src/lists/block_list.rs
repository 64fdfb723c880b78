//! Block list, wire coincidence graph and grading propagation.

use log::debug;

use crate::cfg::MeshCfg;
use crate::errors::MeshError;
use crate::grading::Grading;
use crate::items::{Block, BlockId, WireRef};

/// Owns all blocks and maintains the cross-block wire links.
///
/// After every `add`, coincident wires (same vertex pair) of the new and all
/// existing blocks are linked, axes sharing a wire become neighbours, and
/// axes stacked end-to-end become sequential.
#[derive(Clone, Debug, Default)]
pub struct BlockList {
    pub blocks: Vec<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mut block: Block) {
        let new_id = block.id;

        // wire coincidences against all existing blocks
        let mut hits: Vec<(WireRef, WireRef, bool)> = Vec::new();
        for (axis, slot, wire) in iter_wires(&block) {
            for old in &self.blocks {
                for (old_axis, old_slot, old_wire) in iter_wires(old) {
                    if wire.is_coincident(old_wire) {
                        hits.push((
                            WireRef {
                                block: new_id,
                                axis,
                                slot,
                            },
                            WireRef {
                                block: old.id,
                                axis: old_axis,
                                slot: old_slot,
                            },
                            wire.is_aligned(old_wire),
                        ));
                    }
                }
            }
        }

        // axes stacked end-to-end on the same direction
        let mut stacked: Vec<(usize, BlockId, usize)> = Vec::new();
        for axis in 0..3 {
            let start = block.axes[axis].start_vertices();
            let end = block.axes[axis].end_vertices();
            for old in &self.blocks {
                for old_axis in 0..3 {
                    if start == old.axes[old_axis].end_vertices()
                        || end == old.axes[old_axis].start_vertices()
                    {
                        stacked.push((axis, old.id, old_axis));
                    }
                }
            }
        }

        for &(new_ref, old_ref, aligned) in &hits {
            block.axes[new_ref.axis].wires[new_ref.slot].add_coincident(old_ref, aligned);
            block.axes[new_ref.axis].add_neighbour(old_ref.block, old_ref.axis);
        }
        for &(axis, old_block, old_axis) in &stacked {
            block.axes[axis].add_sequential(old_block, old_axis);
        }

        self.blocks.push(block);

        for (new_ref, old_ref, aligned) in hits {
            let old_axis = &mut self.blocks[old_ref.block.0].axes[old_ref.axis];
            old_axis.wires[old_ref.slot].add_coincident(new_ref, aligned);
            old_axis.add_neighbour(new_id, new_ref.axis);
        }
        for (axis, old_block, old_axis) in stacked {
            self.blocks[old_block.0].axes[old_axis].add_sequential(new_id, axis);
        }
    }

    /// Resolve every wire's grading from chops and the axis graph, iterating
    /// to a fixed point.
    pub fn propagate_gradings(&mut self, cfg: &MeshCfg) -> Result<(), MeshError> {
        loop {
            let mut progress = false;

            for b in 0..self.blocks.len() {
                for a in 0..3 {
                    if self.blocks[b].axes[a].is_defined() {
                        continue;
                    }
                    if let Some(updates) = self.plan_axis(b, a, cfg)? {
                        for (slot, grading) in updates {
                            self.set_wire_grading(
                                WireRef {
                                    block: BlockId(b),
                                    axis: a,
                                    slot,
                                },
                                grading,
                            );
                        }
                        progress = true;
                    }
                }
            }

            if self.all_defined() {
                break;
            }
            if !progress {
                return Err(MeshError::UndefinedGradings {
                    axes: self.undefined_axes(),
                });
            }
        }

        self.check_consistency()
    }

    /// Decide how to grade one axis; `None` means no information yet.
    fn plan_axis(
        &self,
        b: usize,
        a: usize,
        cfg: &MeshCfg,
    ) -> Result<Option<Vec<(usize, Grading)>>, MeshError> {
        let axis = &self.blocks[b].axes[a];

        let spread = |template: Grading| -> Vec<(usize, Grading)> {
            axis.wires
                .iter()
                .enumerate()
                .filter(|(_, w)| !w.is_defined())
                .map(|(slot, w)| (slot, template.with_length(w.length)))
                .collect()
        };

        // a wire already graded (user assignment or a coincident push):
        // spread it over the axis
        if let Some(wire) = axis.wires.iter().find(|w| w.is_defined()) {
            debug!("block {b} axis {a}: spreading wire grading over the axis");
            return Ok(Some(spread(wire.grading.clone())));
        }

        if !axis.chops.is_empty() {
            debug!("block {b} axis {a}: grading from {} chops", axis.chops.len());
            let grading = Grading::from_chops(axis.length(), &axis.chops, cfg)?;
            return Ok(Some(spread(grading)));
        }

        // neighbours around this axis, linked through a shared wire
        for &(nb, na) in &axis.neighbours {
            let other = &self.blocks[nb.0].axes[na];
            if !other.is_defined() {
                continue;
            }
            let Some(aligned) = self.axes_aligned(axis, nb, na) else {
                continue;
            };
            debug!("block {b} axis {a}: copying from neighbour block {} axis {na}", nb.0);
            let template = other.wires[0].grading.clone();
            let template = if aligned { template } else { template.inverted() };
            return Ok(Some(spread(template)));
        }

        // blocks stacked end-to-end: continue with the inverted grading so
        // the cell size at the shared face carries over
        for &(nb, na) in &axis.sequential {
            let other = &self.blocks[nb.0].axes[na];
            if !other.is_defined() {
                continue;
            }
            debug!("block {b} axis {a}: continuing sequential block {} axis {na}", nb.0);
            return Ok(Some(spread(other.wires[0].grading.inverted())));
        }

        Ok(None)
    }

    /// Direction relation between an axis and one of its wire-coincident
    /// neighbours.
    fn axes_aligned(
        &self,
        axis: &crate::items::Axis,
        nb: BlockId,
        na: usize,
    ) -> Option<bool> {
        for wire in &axis.wires {
            for &(r, aligned) in &wire.coincidents {
                if r.block == nb && r.axis == na {
                    return Some(aligned);
                }
            }
        }
        None
    }

    /// Assign a grading and copy it onto undefined coincident wires.
    fn set_wire_grading(&mut self, at: WireRef, grading: Grading) {
        let coincidents = {
            let wire = &mut self.blocks[at.block.0].axes[at.axis].wires[at.slot];
            wire.grading = grading.clone();
            wire.coincidents.clone()
        };

        for (other, aligned) in coincidents {
            let wire = &mut self.blocks[other.block.0].axes[other.axis].wires[other.slot];
            if !wire.is_defined() {
                let copy = if aligned {
                    grading.clone()
                } else {
                    grading.inverted()
                };
                wire.grading = copy.with_length(wire.length);
            }
        }
    }

    fn all_defined(&self) -> bool {
        self.blocks
            .iter()
            .all(|block| block.axes.iter().all(|axis| axis.is_defined()))
    }

    fn undefined_axes(&self) -> Vec<(usize, usize)> {
        let mut axes = Vec::new();
        for block in &self.blocks {
            for axis in &block.axes {
                if !axis.is_defined() {
                    axes.push((block.id.0, axis.index));
                }
            }
        }
        axes
    }

    /// Every axis's four wires, and every pair of coincident wires, must
    /// agree on cell count.
    pub fn check_consistency(&self) -> Result<(), MeshError> {
        for block in &self.blocks {
            for axis in &block.axes {
                let counts = axis.counts();
                if counts.iter().any(|&c| c != counts[0]) {
                    return Err(MeshError::InconsistentGradings {
                        block: block.id.0,
                        axis: axis.index,
                        counts: counts.to_vec(),
                    });
                }
                for wire in &axis.wires {
                    for &(r, _) in &wire.coincidents {
                        let other = &self.blocks[r.block.0].axes[r.axis].wires[r.slot];
                        if other.grading.count() != wire.grading.count() {
                            return Err(MeshError::InconsistentGradings {
                                block: block.id.0,
                                axis: axis.index,
                                counts: vec![wire.grading.count(), other.grading.count()],
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn iter_wires(block: &Block) -> impl Iterator<Item = (usize, usize, &crate::items::Wire)> {
    block.axes.iter().enumerate().flat_map(|(axis, ax)| {
        ax.wires
            .iter()
            .enumerate()
            .map(move |(slot, wire)| (axis, slot, wire))
    })
}
