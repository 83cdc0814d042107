//! Operand coercion and grid reconciliation
//!
//! Every binary operator funnels its right-hand side through `to_frd`,
//! which turns scalars, constant matrices, and other models into a model
//! on a compatible frequency grid.

use log::warn;
use ndarray::{Array2, Array3};
use num_complex::Complex64;

use super::core::Frd;
use crate::constants::EPSW;
use crate::error::FrdError;
use crate::frequency::FrequencyAxis;

/// An operand accepted by the algebraic operators.
///
/// Scalars and matrices describe frequency-independent gains; a model
/// carries its own grid and is resampled when the grids differ.
#[derive(Debug, Clone)]
pub enum Operand {
    Scalar(Complex64),
    Matrix(Array2<Complex64>),
    Model(Frd),
}

impl Operand {
    /// Negate the operand, mirroring tensor negation on models.
    pub(crate) fn neg(self) -> Result<Operand, FrdError> {
        Ok(match self {
            Operand::Scalar(c) => Operand::Scalar(-c),
            Operand::Matrix(m) => Operand::Matrix(m.mapv(|v| -v)),
            Operand::Model(m) => Operand::Model(m.neg()?),
        })
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Scalar(Complex64::new(v, 0.0))
    }
}

impl From<Complex64> for Operand {
    fn from(v: Complex64) -> Self {
        Operand::Scalar(v)
    }
}

impl From<Array2<Complex64>> for Operand {
    fn from(m: Array2<Complex64>) -> Self {
        Operand::Matrix(m)
    }
}

impl From<Array2<f64>> for Operand {
    fn from(m: Array2<f64>) -> Self {
        Operand::Matrix(m.mapv(|v| Complex64::new(v, 0.0)))
    }
}

impl From<Frd> for Operand {
    fn from(m: Frd) -> Self {
        Operand::Model(m)
    }
}

impl From<&Frd> for Operand {
    fn from(m: &Frd) -> Self {
        Operand::Model(m.clone())
    }
}

/// Coerce an operand to a model on (or reconciled with) `target`.
///
/// Models already on the target grid are returned unchanged. Models on a
/// different grid are clipped to the overlapping frequency range, padded
/// with their own extreme samples where the target reaches further, and
/// resampled through their interpolation curves; disjoint ranges fail
/// with `NoOverlap`. Scalars and matrices become constant responses
/// replicated across the whole target grid; `outputs`/`inputs` size the
/// scalar case only.
pub fn to_frd(
    operand: Operand,
    target: &FrequencyAxis,
    outputs: usize,
    inputs: usize,
) -> Result<Frd, FrdError> {
    match operand {
        Operand::Model(model) => {
            if model.omega().approx_eq(target, EPSW) {
                return Ok(model);
            }

            // Clip the target to the candidate's sampled range.
            let (lo, hi) = (model.omega().first(), model.omega().last());
            let mut grid: Vec<f64> = target
                .as_slice()
                .iter()
                .copied()
                .filter(|w| *w >= lo && *w <= hi)
                .collect();
            if grid.is_empty() {
                return Err(FrdError::NoOverlap);
            }

            // Keep the candidate's endpoints when the clipped grid stops
            // short of its sampled range.
            if grid[0] - lo > EPSW {
                grid.insert(0, lo);
            }
            if hi - grid[grid.len() - 1] > EPSW {
                grid.push(hi);
            }
            warn!(
                "adjusting frequency range: resampling {} points onto a {}-point grid",
                model.nfreq(),
                grid.len()
            );

            model.resampled_onto(FrequencyAxis::new(grid)?)
        }
        Operand::Scalar(c) => {
            let fresp = Array3::from_elem((outputs, inputs, target.len()), c);
            Frd::new(fresp, target.clone())
        }
        Operand::Matrix(m) => {
            let (rows, cols) = m.dim();
            if rows == 0 || cols == 0 {
                return Err(FrdError::UnsupportedConversion(format!(
                    "empty {rows}x{cols} matrix"
                )));
            }
            let fresp = Array3::from_shape_fn((rows, cols, target.len()), |(i, j, _)| m[[i, j]]);
            Frd::new(fresp, target.clone())
        }
    }
}

/// Identity matrix scaled by `c`, replicated across `target`.
///
/// Used to broadcast a scalar factor into the shared dimension of a
/// matrix product.
pub(crate) fn scalar_identity(
    c: Complex64,
    n: usize,
    target: &FrequencyAxis,
) -> Result<Frd, FrdError> {
    let fresp = Array3::from_shape_fn((n, n, target.len()), |(i, j, _)| {
        if i == j {
            c
        } else {
            Complex64::new(0.0, 0.0)
        }
    });
    Frd::new(fresp, target.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn axis(ws: &[f64]) -> FrequencyAxis {
        FrequencyAxis::new(ws.to_vec()).unwrap()
    }

    #[test]
    fn test_scalar_to_model() {
        let m = to_frd(3.0.into(), &axis(&[1.0, 2.0, 3.0]), 2, 2).unwrap();
        assert_eq!(m.outputs(), 2);
        assert_eq!(m.inputs(), 2);
        assert_relative_eq!(m.response()[[1, 0, 2]].re, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_to_model() {
        let gains =
            Array2::from_shape_vec((2, 1), vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 2.0)])
                .unwrap();
        let m = to_frd(gains.into(), &axis(&[1.0, 5.0]), 1, 1).unwrap();
        assert_eq!(m.outputs(), 2);
        assert_eq!(m.inputs(), 1);
        assert_relative_eq!(m.response()[[1, 0, 1]].im, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let gains = Array2::<Complex64>::zeros((0, 2));
        assert!(matches!(
            to_frd(gains.into(), &axis(&[1.0, 2.0]), 1, 1),
            Err(FrdError::UnsupportedConversion(_))
        ));
    }

    #[test]
    fn test_matching_grid_passthrough() {
        let m = to_frd(2.0.into(), &axis(&[1.0, 2.0]), 1, 1).unwrap();
        let out = to_frd(m.clone().into(), &axis(&[1.0, 2.0]), 1, 1).unwrap();
        assert!(out.omega().approx_eq(m.omega(), EPSW));
    }

    #[test]
    fn test_disjoint_grids_fail() {
        let m = to_frd(2.0.into(), &axis(&[1.0, 2.0]), 1, 1).unwrap();
        assert!(matches!(
            to_frd(m.into(), &axis(&[10.0, 20.0]), 1, 1),
            Err(FrdError::NoOverlap)
        ));
    }

    #[test]
    fn test_overlapping_grids_clip_and_pad() {
        // Candidate sampled on [1, 5], target on [2, 8]: the clipped grid
        // keeps 2 and 3 and regains both candidate endpoints.
        let m = to_frd(2.0.into(), &axis(&[1.0, 2.0, 3.0, 4.0, 5.0]), 1, 1).unwrap();
        let out = to_frd(m.into(), &axis(&[2.0, 3.0, 6.0, 8.0]), 1, 1).unwrap();
        assert_eq!(out.omega().as_slice(), &[1.0, 2.0, 3.0, 5.0]);
        assert_relative_eq!(out.response()[[0, 0, 0]].re, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_scalar_identity_shape() {
        let m = scalar_identity(Complex64::new(4.0, 0.0), 3, &axis(&[1.0, 2.0])).unwrap();
        assert_relative_eq!(m.response()[[2, 2, 1]].re, 4.0, epsilon = 1e-12);
        assert_relative_eq!(m.response()[[0, 1, 0]].re, 0.0, epsilon = 1e-12);
    }
}
