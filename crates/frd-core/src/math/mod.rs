//! Mathematical support module
//!
//! Splines for response interpolation and linear algebra helpers for the
//! per-sample matrix computations.

pub mod linalg;
pub mod spline;

pub use spline::{CubicSpline, ParametricSpline};
