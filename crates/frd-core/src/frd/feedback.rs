//! Feedback interconnection
//!
//! Closes a loop around two response models by solving the closed-loop
//! equation at every frequency sample.

use ndarray::{s, Array2, Array3};
use num_complex::Complex64;

use super::convert::{to_frd, Operand};
use super::core::Frd;
use crate::error::FrdError;
use crate::math::linalg::solve_complex;

impl Frd {
    /// Close a feedback loop: `(I + self * other)^-1 * self` per sample.
    ///
    /// `other` is first normalized onto this model's grid. Requires
    /// `self.outputs == other.inputs` and `self.inputs == other.outputs`.
    /// Each sample is computed by an LU solve of the closed-loop matrix,
    /// never by forming its inverse.
    ///
    /// The `sign` argument is accepted for parity with other system
    /// representations but is not applied: the loop is always closed with
    /// negative feedback. This is a known gap.
    pub fn feedback(&self, other: impl Into<Operand>, _sign: f64) -> Result<Frd, FrdError> {
        let other = to_frd(other.into(), self.omega(), 1, 1)?;

        if self.outputs() != other.inputs() || self.inputs() != other.outputs() {
            return Err(FrdError::DimensionMismatch(format!(
                "feedback of a {}x{} model around a {}x{} model",
                self.outputs(),
                self.inputs(),
                other.outputs(),
                other.inputs()
            )));
        }

        // Conversion may have clipped the grid; bring self along.
        let plant = if self.omega().approx_eq(other.omega(), crate::constants::EPSW) {
            self.clone()
        } else {
            self.resampled_onto(other.omega().clone())?
        };

        let p = plant.outputs();
        let n = other.nfreq();
        let eye = Array2::from_shape_fn((p, p), |(i, j)| {
            Complex64::new(if i == j { 1.0 } else { 0.0 }, 0.0)
        });

        let mut fresp = Array3::<Complex64>::zeros((p, plant.inputs(), n));
        for k in 0..n {
            let g = plant.matrix_at(k);
            let h = other.matrix_at(k);
            let closed = &eye + &g.dot(&h);
            let x = solve_complex(&closed, &g).ok_or(FrdError::SingularMatrix {
                omega: other.omega()[k],
            })?;
            fresp.slice_mut(s![.., .., k]).assign(&x);
        }

        Frd::new(fresp, other.omega().clone())
    }
}
