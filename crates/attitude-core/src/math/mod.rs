//! Mathematical utilities for the conversions
//!
//! Boundary shape checks that turn loose slices into fixed nalgebra types,
//! and validity checks for quaternions and rotation matrices.

pub mod shape;
pub mod validation;

pub use shape::*;
pub use validation::*;
