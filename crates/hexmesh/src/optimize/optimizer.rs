//! The vertex optimizer.

use log::debug;

use crate::errors::MeshError;
use crate::geometry::Vec3;
use crate::items::BlockId;
use crate::mesh::Mesh;

use super::clamps::Clamp;
use super::minimize::{nelder_mead, NmOptions};
use super::quality;

/// Outcome of an optimization run.
#[derive(Clone, Debug)]
pub struct OptimizationReport {
    pub initial_quality: f64,
    pub final_quality: f64,
    pub evaluations: usize,
    /// False when no improvement was found; the mesh is then unchanged.
    pub improved: bool,
}

/// Moves released vertices, constrained by their clamps, to minimize the
/// quality cost of the blocks they touch.
pub struct Optimizer<'m> {
    mesh: &'m mut Mesh,
    clamps: Vec<Clamp>,
    max_iter: usize,
}

impl<'m> Optimizer<'m> {
    pub fn new(mesh: &'m mut Mesh) -> Self {
        Self {
            mesh,
            clamps: Vec::new(),
            max_iter: 500,
        }
    }

    /// Cap on minimizer iterations (the only cancellation bound).
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        self.mesh
    }

    /// Release one vertex for optimization under the given clamp.
    pub fn release_vertex(&mut self, clamp: Clamp) {
        self.clamps.push(clamp);
    }

    /// Run the minimization. Failing to improve is not an error; the mesh is
    /// left untouched in that case.
    pub fn optimize(&mut self) -> Result<OptimizationReport, MeshError> {
        // grading first: this validates that chops define every axis, and
        // optimization is specified to run on a graded mesh
        self.mesh.ensure_graded()?;

        if self.clamps.is_empty() {
            return Ok(OptimizationReport {
                initial_quality: 0.0,
                final_quality: 0.0,
                evaluations: 0,
                improved: false,
            });
        }

        // only blocks touching a released vertex are re-evaluated
        let affected: Vec<BlockId> = self
            .mesh
            .block_list
            .blocks
            .iter()
            .filter(|block| {
                block
                    .vertices
                    .iter()
                    .any(|v| self.clamps.iter().any(|c| c.vertex() == *v))
            })
            .map(|block| block.id)
            .collect();

        let offsets: Vec<usize> = self
            .clamps
            .iter()
            .scan(0, |acc, clamp| {
                let start = *acc;
                *acc += clamp.params().len();
                Some(start)
            })
            .collect();
        let x0: Vec<f64> = self
            .clamps
            .iter()
            .flat_map(|c| c.params().iter().copied())
            .collect();
        let initial_positions: Vec<Vec3> = self
            .clamps
            .iter()
            .map(|c| self.mesh.position(c.vertex()))
            .collect();

        let step = characteristic_step(self.mesh, &affected);

        let mesh = &mut *self.mesh;
        let clamps = &self.clamps;
        let mut objective = |x: &[f64]| -> f64 {
            let mut penalty = 0.0;
            for (clamp, &offset) in clamps.iter().zip(&offsets) {
                let params = &x[offset..offset + clamp.params().len()];
                let mut clipped = params.to_vec();
                for (p, bound) in clipped.iter_mut().zip(clamp.bounds()) {
                    if let Some((lo, hi)) = bound {
                        if *p < *lo {
                            penalty += 1e6 * (*lo - *p).powi(2);
                            *p = *lo;
                        } else if *p > *hi {
                            penalty += 1e6 * (*p - *hi).powi(2);
                            *p = *hi;
                        }
                    }
                }
                mesh.vertex_list
                    .set_position(clamp.vertex(), clamp.point_of(&clipped));
            }
            penalty
                + affected
                    .iter()
                    .map(|&id| {
                        let block = &mesh.block_list.blocks[id.0];
                        let points = block.vertices.map(|v| mesh.vertex_list.position(v));
                        quality::block_quality(&points)
                    })
                    .sum::<f64>()
        };

        let initial_quality = objective(&x0);
        let result = nelder_mead(
            &mut objective,
            &x0,
            &NmOptions {
                max_iter: self.max_iter,
                ftol_rel: 1e-4,
                window: 10,
                initial_step: step,
            },
        );

        if result.fx < initial_quality {
            // leave the mesh at the best parameters found
            let final_quality = objective(&result.x);
            for (clamp, &offset) in self.clamps.iter_mut().zip(&offsets) {
                let len = clamp.params().len();
                clamp.set_params(&result.x[offset..offset + len]);
            }
            debug!(
                "optimization improved quality {initial_quality:.6} -> {final_quality:.6} in {} evaluations",
                result.evaluations
            );
            Ok(OptimizationReport {
                initial_quality,
                final_quality,
                evaluations: result.evaluations,
                improved: true,
            })
        } else {
            // restore the untouched mesh
            for (clamp, position) in self.clamps.iter().zip(initial_positions) {
                self.mesh.vertex_list.set_position(clamp.vertex(), position);
            }
            Ok(OptimizationReport {
                initial_quality,
                final_quality: initial_quality,
                evaluations: result.evaluations,
                improved: false,
            })
        }
    }

    /// Worst face non-orthogonality over the blocks touching released
    /// vertices, in degrees.
    pub fn max_nonortho(&self) -> f64 {
        self.mesh
            .block_list
            .blocks
            .iter()
            .filter(|block| {
                block
                    .vertices
                    .iter()
                    .any(|v| self.clamps.iter().any(|c| c.vertex() == *v))
            })
            .map(|block| {
                let points = block.vertices.map(|v| self.mesh.vertex_list.position(v));
                quality::block_max_nonortho(&points)
            })
            .fold(0.0, f64::max)
    }
}

/// A tenth of the mean wire length of the affected blocks; a sane simplex
/// spread for coordinates measured in mesh units.
fn characteristic_step(mesh: &Mesh, affected: &[BlockId]) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for &id in affected {
        for wire in mesh.block_list.blocks[id.0].wires() {
            total += wire.length;
            count += 1;
        }
    }
    if count == 0 {
        0.1
    } else {
        (total / count as f64) * 0.1
    }
}
