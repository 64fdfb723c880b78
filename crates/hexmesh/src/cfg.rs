//! Tolerance and formatting defaults.
//!
//! Policy
//! - One configuration record is built once and handed to the registries at
//!   construction; call sites never juggle ad-hoc epsilons.
//! - Defaults match the downstream mesher's expectations; adjusting them is
//!   rare and deliberate.

/// Mesh-wide configuration (tolerances, writer formatting).
#[derive(Clone, Copy, Debug)]
pub struct MeshCfg {
    /// Two vertices closer than this are the same vertex.
    pub tol_point: f64,
    /// Relative out-of-plane distance above which a quad face draws a warning.
    pub warn_planarity: f64,
    /// Chop length ratios must sum to 1 within this tolerance.
    pub tol_length_ratio: f64,
    /// Decimal places for coordinates in the written dictionary.
    pub write_precision: usize,
}

impl Default for MeshCfg {
    fn default() -> Self {
        Self {
            tol_point: 1e-7,
            warn_planarity: 0.05,
            tol_length_ratio: 1e-3,
            write_precision: 8,
        }
    }
}
