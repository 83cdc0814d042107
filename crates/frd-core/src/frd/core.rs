//! Core Frd struct and constructors
//!
//! Contains the fundamental frequency response data structure and factory
//! methods. A model owns its frequency grid, its response tensor, and the
//! per-channel interpolation curves derived from them.

use ndarray::{s, Array2, Array3};
use num_complex::Complex64;

use crate::constants::WEIGHT_EPS;
use crate::error::FrdError;
use crate::frequency::FrequencyAxis;
use crate::lti::Lti;
use crate::math::spline::ParametricSpline;

/// A linear system represented by sampled frequency response data.
///
/// The response tensor is indexed `[output, input, frequency]` and its last
/// dimension matches the frequency grid exactly. Models are immutable after
/// construction: every operator returns a new instance, and cloning deep
/// copies the grid and tensor, so shared models can never alias mutable
/// state.
#[derive(Debug, Clone)]
pub struct Frd {
    omega: FrequencyAxis,
    fresp: Array3<Complex64>,
    /// One parametric curve per (output, input) pair, row-major.
    curves: Vec<ParametricSpline>,
}

impl Frd {
    /// Create a model from a response tensor and a matching grid.
    ///
    /// Fails with `ShapeMismatch` when the tensor's frequency dimension
    /// disagrees with the grid length. The interpolation curves are built
    /// eagerly from the final tensor.
    pub fn new(fresp: Array3<Complex64>, omega: FrequencyAxis) -> Result<Self, FrdError> {
        let (outputs, inputs, nfreq) = fresp.dim();
        if nfreq != omega.len() {
            return Err(FrdError::ShapeMismatch {
                expected: omega.len(),
                found: nfreq,
            });
        }
        if outputs == 0 || inputs == 0 {
            return Err(FrdError::InvalidArguments(
                "response tensor needs at least one output and one input".into(),
            ));
        }
        if fresp.iter().any(|v| !v.re.is_finite() || !v.im.is_finite()) {
            return Err(FrdError::InvalidArguments(
                "response samples must be finite".into(),
            ));
        }

        let curves = build_curves(&fresp, &omega)?;
        Ok(Self {
            omega,
            fresp,
            curves,
        })
    }

    /// Create a SISO model from a 1-D slice of response samples.
    ///
    /// The data is laid out as a 1x1xN tensor.
    pub fn from_siso(data: &[Complex64], omega: FrequencyAxis) -> Result<Self, FrdError> {
        let n = data.len();
        let fresp = Array3::from_shape_fn((1, 1, n), |(_, _, k)| data[k]);
        Self::new(fresp, omega)
    }

    /// Sample another system's response on the given grid.
    ///
    /// The grid is sorted ascending before sampling; `sys.evalfr` is
    /// called once per grid point.
    pub fn from_lti(sys: &dyn Lti, omega: Vec<f64>) -> Result<Self, FrdError> {
        let omega = FrequencyAxis::from_unsorted(omega)?;
        let (p, m) = (sys.outputs(), sys.inputs());

        let mut fresp = Array3::<Complex64>::zeros((p, m, omega.len()));
        for (k, &w) in omega.as_slice().iter().enumerate() {
            fresp.slice_mut(s![.., .., k]).assign(&sys.evalfr(w));
        }
        Self::new(fresp, omega)
    }

    /// Number of system outputs.
    #[inline]
    pub fn outputs(&self) -> usize {
        self.fresp.dim().0
    }

    /// Number of system inputs.
    #[inline]
    pub fn inputs(&self) -> usize {
        self.fresp.dim().1
    }

    /// Number of frequency samples.
    #[inline]
    pub fn nfreq(&self) -> usize {
        self.omega.len()
    }

    /// The sampled frequency grid.
    #[inline]
    pub fn omega(&self) -> &FrequencyAxis {
        &self.omega
    }

    /// The sampled response tensor, indexed `[output, input, frequency]`.
    #[inline]
    pub fn response(&self) -> &Array3<Complex64> {
        &self.fresp
    }

    /// Response matrix stored at sample index `k`.
    pub(crate) fn matrix_at(&self, k: usize) -> Array2<Complex64> {
        self.fresp.slice(s![.., .., k]).to_owned()
    }

    /// Interpolation curve for the `(i, j)` channel.
    pub(crate) fn curve(&self, i: usize, j: usize) -> &ParametricSpline {
        &self.curves[i * self.inputs() + j]
    }
}

/// Fit one parametric curve per channel, weighting each sample inversely
/// by its magnitude (plus an offset) so near-zero points stay stable.
fn build_curves(
    fresp: &Array3<Complex64>,
    omega: &FrequencyAxis,
) -> Result<Vec<ParametricSpline>, FrdError> {
    let (p, m, n) = fresp.dim();
    let mut curves = Vec::with_capacity(p * m);

    for i in 0..p {
        for j in 0..m {
            let mut re = Vec::with_capacity(n);
            let mut im = Vec::with_capacity(n);
            let mut w = Vec::with_capacity(n);
            for k in 0..n {
                let g = fresp[[i, j, k]];
                re.push(g.re);
                im.push(g.im);
                w.push(1.0 / (g.norm() + WEIGHT_EPS));
            }
            curves.push(ParametricSpline::fit(omega.as_slice(), &re, &im, &w)?);
        }
    }
    Ok(curves)
}

impl Lti for Frd {
    fn outputs(&self) -> usize {
        Frd::outputs(self)
    }

    fn inputs(&self) -> usize {
        Frd::inputs(self)
    }

    fn evalfr(&self, omega: f64) -> Array2<Complex64> {
        Frd::evalfr(self, omega)
    }
}
