//! Geometric primitives: points with projection targets, rigid transforms,
//! interpolated curves.
//!
//! Purpose
//! - Keep all vector arithmetic on `nalgebra` types behind a thin, explicit
//!   surface; everything downstream works with `Vec3` and `Point`.

mod curves;
mod transforms;
mod types;

pub use curves::InterpolatedCurve;
pub use transforms::{angle_between, rotate_around, scale_around};
pub use types::{Point, Vec3};

#[cfg(test)]
mod tests;
