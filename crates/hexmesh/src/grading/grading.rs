//! Resolved gradings.

use crate::cfg::MeshCfg;
use crate::errors::MeshError;

use super::chop::Chop;
use super::resolve;

/// One resolved stretch of an axis: a fraction of the length, a cell count
/// and the last/first cell-size ratio over that stretch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub fraction: f64,
    pub count: usize,
    pub expansion: f64,
}

/// The fully resolved subdivision of a single wire (or axis): a concrete
/// length plus ordered segments.
///
/// A grading with no segments is *undefined*; propagation fills those in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grading {
    pub length: f64,
    pub segments: Vec<Segment>,
}

impl Grading {
    /// An undefined grading for a wire of known length.
    pub fn new(length: f64) -> Self {
        Self {
            length,
            segments: Vec::new(),
        }
    }

    /// Resolve a list of chops against a length. The chops' length ratios
    /// must sum to 1; anything else is a declaration error.
    pub fn from_chops(length: f64, chops: &[Chop], cfg: &MeshCfg) -> Result<Self, MeshError> {
        let ratio_sum: f64 = chops.iter().map(|c| c.length_ratio).sum();
        if (ratio_sum - 1.0).abs() > cfg.tol_length_ratio {
            return Err(MeshError::InvalidChop(format!(
                "length ratios sum to {ratio_sum}, expected 1"
            )));
        }

        let mut segments = Vec::with_capacity(chops.len());
        for chop in chops {
            segments.push(resolve::resolve(length * chop.length_ratio, chop)?);
        }

        Ok(Self { length, segments })
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        self.length > 0.0
            && !self.segments.is_empty()
            && self.segments.iter().all(|s| s.count > 0)
    }

    /// Total cell count over all segments.
    #[inline]
    pub fn count(&self) -> usize {
        self.segments.iter().map(|s| s.count).sum()
    }

    /// The same subdivision traversed from the other end.
    pub fn inverted(&self) -> Self {
        Self {
            length: self.length,
            segments: self
                .segments
                .iter()
                .rev()
                .map(|s| Segment {
                    fraction: s.fraction,
                    count: s.count,
                    expansion: 1.0 / s.expansion,
                })
                .collect(),
        }
    }

    /// Copy to another wire's length, preserving counts, fractions and
    /// expansions.
    pub fn with_length(&self, length: f64) -> Self {
        Self {
            length,
            segments: self.segments.clone(),
        }
    }
}
