//! Numerical constants for frequency response calculations
//!
//! Provides standardized tolerance values used throughout the library.

/// Tolerance for comparing angular frequencies between two grids.
/// Two grid points closer than this are treated as the same frequency.
pub const EPSW: f64 = 1e-8;

/// Offset added to the response magnitude when computing spline weights,
/// so near-zero samples do not produce unbounded weights.
pub const WEIGHT_EPS: f64 = 1e-3;
