//! Algebraic composition of response models
//!
//! Parallel (add), series (mul), division, and exponentiation. Named
//! methods carry the contract; `std::ops` impls on `&Frd` are sugar over
//! them and share the fallible output type.

use log::warn;
use ndarray::{s, Array3};
use num_complex::Complex64;

use super::convert::{scalar_identity, to_frd, Operand};
use super::core::Frd;
use crate::constants::EPSW;
use crate::error::FrdError;

impl Frd {
    /// Element-wise negation; the frequency grid is unchanged.
    pub fn neg(&self) -> Result<Frd, FrdError> {
        Frd::new(self.response().mapv(|v| -v), self.omega().clone())
    }

    /// Parallel connection: element-wise sum of the two responses.
    ///
    /// A model operand on a different grid is reconciled first (clip,
    /// pad, resample); both summands end up on the reconciled grid.
    pub fn add(&self, other: impl Into<Operand>) -> Result<Frd, FrdError> {
        let other = other.into();
        warn_on_grid_mismatch(self, &other);
        let other = to_frd(other, self.omega(), 1, 1)?;
        let (a, b) = reconciled(self, other)?;

        if a.inputs() != b.inputs() {
            return Err(FrdError::DimensionMismatch(format!(
                "first summand has {} input(s), second has {}",
                a.inputs(),
                b.inputs()
            )));
        }
        if a.outputs() != b.outputs() {
            return Err(FrdError::DimensionMismatch(format!(
                "first summand has {} output(s), second has {}",
                a.outputs(),
                b.outputs()
            )));
        }

        Frd::new(a.response() + b.response(), b.omega().clone())
    }

    /// Right addition; addition commutes.
    pub fn radd(&self, other: impl Into<Operand>) -> Result<Frd, FrdError> {
        self.add(other)
    }

    /// `self - other`, defined as `self + (-other)`.
    pub fn sub(&self, other: impl Into<Operand>) -> Result<Frd, FrdError> {
        self.add(other.into().neg()?)
    }

    /// `other - self`, defined as `(-self) + other`.
    pub fn rsub(&self, other: impl Into<Operand>) -> Result<Frd, FrdError> {
        self.neg()?.add(other)
    }

    /// Series connection: complex matrix product at every sample.
    ///
    /// A scalar operand broadcasts to an identity-scaled matrix sized to
    /// the shared dimension. Requires `self.inputs == other.outputs`.
    pub fn mul(&self, other: impl Into<Operand>) -> Result<Frd, FrdError> {
        let other = match other.into() {
            Operand::Scalar(c) => scalar_identity(c, self.inputs(), self.omega())?,
            op => {
                warn_on_grid_mismatch(self, &op);
                to_frd(op, self.omega(), 1, 1)?
            }
        };
        let (a, b) = reconciled(self, other)?;

        if a.inputs() != b.outputs() {
            return Err(FrdError::DimensionMismatch(format!(
                "product A * B: A has {} column(s), B has {} row(s)",
                a.inputs(),
                b.outputs()
            )));
        }

        let n = b.nfreq();
        let mut fresp = Array3::<Complex64>::zeros((a.outputs(), b.inputs(), n));
        for k in 0..n {
            let prod = a.matrix_at(k).dot(&b.matrix_at(k));
            fresp.slice_mut(s![.., .., k]).assign(&prod);
        }
        Frd::new(fresp, b.omega().clone())
    }

    /// `other * self`, the series connection with the factors swapped.
    pub fn rmul(&self, other: impl Into<Operand>) -> Result<Frd, FrdError> {
        let other = match other.into() {
            Operand::Scalar(c) => scalar_identity(c, self.outputs(), self.omega())?,
            op => {
                warn_on_grid_mismatch(self, &op);
                to_frd(op, self.omega(), 1, 1)?
            }
        };
        other.mul(self)
    }

    /// Per-sample division, defined for SISO operands only.
    pub fn div(&self, other: impl Into<Operand>) -> Result<Frd, FrdError> {
        let other = match other.into() {
            Operand::Scalar(c) => scalar_identity(c, self.inputs(), self.omega())?,
            op => to_frd(op, self.omega(), 1, 1)?,
        };
        if !is_siso(self) || !is_siso(&other) {
            return Err(FrdError::NotImplemented("division"));
        }
        let (a, b) = reconciled(self, other)?;

        let n = b.nfreq();
        let fresp = Array3::from_shape_fn((1, 1, n), |(_, _, k)| {
            a.response()[[0, 0, k]] / b.response()[[0, 0, k]]
        });
        Frd::new(fresp, b.omega().clone())
    }

    /// `other / self`, SISO only.
    pub fn rdiv(&self, other: impl Into<Operand>) -> Result<Frd, FrdError> {
        let other = match other.into() {
            Operand::Scalar(c) => scalar_identity(c, self.inputs(), self.omega())?,
            op => to_frd(op, self.omega(), 1, 1)?,
        };
        if !is_siso(self) || !is_siso(&other) {
            return Err(FrdError::NotImplemented("division"));
        }
        other.div(self)
    }

    /// Integer power by repeated multiplication.
    ///
    /// Zero yields the SISO unity response (1 + 0j at every sample of
    /// this model's grid); negative exponents recurse on the reciprocal.
    pub fn pow(&self, n: i32) -> Result<Frd, FrdError> {
        if n == 0 {
            to_frd(Operand::Scalar(Complex64::new(1.0, 0.0)), self.omega(), 1, 1)
        } else if n > 0 {
            self.mul(self.pow(n - 1)?)
        } else {
            let unity = self.pow(0)?;
            unity.div(self)?.mul(self.pow(n + 1)?)
        }
    }

    /// Power with a dynamically typed exponent.
    ///
    /// Fails with `InvalidExponent` unless `x` is an exact integer.
    pub fn powf(&self, x: f64) -> Result<Frd, FrdError> {
        if !x.is_finite() || x.fract() != 0.0 || x.abs() > i32::MAX as f64 {
            return Err(FrdError::InvalidExponent(x));
        }
        self.pow(x as i32)
    }
}

#[inline]
fn is_siso(m: &Frd) -> bool {
    m.outputs() == 1 && m.inputs() == 1
}

/// Resample `a` when conversion moved `b` off `a`'s grid, so both sides
/// share one axis.
fn reconciled(a: &Frd, b: Frd) -> Result<(Frd, Frd), FrdError> {
    if a.omega().approx_eq(b.omega(), EPSW) {
        Ok((a.clone(), b))
    } else {
        Ok((a.resampled_onto(b.omega().clone())?, b))
    }
}

fn warn_on_grid_mismatch(a: &Frd, op: &Operand) {
    if let Operand::Model(b) = op {
        if !a.omega().approx_eq(b.omega(), EPSW) {
            warn!("frequency grids do not match; expect truncation and interpolation");
        }
    }
}

// Operator sugar over the named methods. The fallible output mirrors the
// named contract; use the methods directly to chain with `?`.
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Neg for &Frd {
    type Output = Result<Frd, FrdError>;

    fn neg(self) -> Result<Frd, FrdError> {
        Frd::neg(self)
    }
}

impl Add<&Frd> for &Frd {
    type Output = Result<Frd, FrdError>;

    fn add(self, other: &Frd) -> Result<Frd, FrdError> {
        Frd::add(self, other)
    }
}

impl Sub<&Frd> for &Frd {
    type Output = Result<Frd, FrdError>;

    fn sub(self, other: &Frd) -> Result<Frd, FrdError> {
        Frd::sub(self, other)
    }
}

impl Mul<&Frd> for &Frd {
    type Output = Result<Frd, FrdError>;

    fn mul(self, other: &Frd) -> Result<Frd, FrdError> {
        Frd::mul(self, other)
    }
}

impl Mul<f64> for &Frd {
    type Output = Result<Frd, FrdError>;

    fn mul(self, scalar: f64) -> Result<Frd, FrdError> {
        Frd::mul(self, scalar)
    }
}

impl Mul<Complex64> for &Frd {
    type Output = Result<Frd, FrdError>;

    fn mul(self, scalar: Complex64) -> Result<Frd, FrdError> {
        Frd::mul(self, scalar)
    }
}

impl Div<&Frd> for &Frd {
    type Output = Result<Frd, FrdError>;

    fn div(self, other: &Frd) -> Result<Frd, FrdError> {
        Frd::div(self, other)
    }
}

impl Div<f64> for &Frd {
    type Output = Result<Frd, FrdError>;

    fn div(self, scalar: f64) -> Result<Frd, FrdError> {
        Frd::div(self, scalar)
    }
}
