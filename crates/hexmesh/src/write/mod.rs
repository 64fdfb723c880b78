//! Output: the block-mesh dictionary and the debug VTK dump.
//!
//! Both writers are pure functions of the frozen mesh; `format_mesh`
//! validates before it produces a single byte, so a failed write never
//! leaves a partial file.

pub mod dict;
pub mod vtk;
