//! Cell-count and expansion handling.
//!
//! A [`chop::Chop`] is the user's partial declaration of how an axis is
//! subdivided; [`Grading`] is the fully resolved answer, a list of
//! geometric-progression segments attached to a concrete length. The
//! resolver recovers the missing progression parameters from whichever pair
//! the user supplied.

pub mod chop;
pub mod grading;
mod resolve;

pub use chop::{Chop, Take};
pub use grading::{Grading, Segment};
