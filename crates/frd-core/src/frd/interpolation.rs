//! Response evaluation and resampling
//!
//! Evaluates the model at arbitrary frequencies through the per-channel
//! interpolation curves and provides whole-grid magnitude/phase sweeps.

use ndarray::{s, Array2, Array3};
use num_complex::Complex64;

use super::core::Frd;
use crate::error::FrdError;
use crate::frequency::FrequencyAxis;

impl Frd {
    /// Evaluate the response matrix at a single angular frequency.
    ///
    /// Returns the `outputs x inputs` complex gain matrix at `s = jw`.
    /// Frequencies between samples are interpolated by the per-channel
    /// splines; queries outside the sampled range extrapolate the end
    /// segments and lose accuracy with distance.
    pub fn evalfr(&self, omega: f64) -> Array2<Complex64> {
        Array2::from_shape_fn((self.outputs(), self.inputs()), |(i, j)| {
            let (re, im) = self.curve(i, j).eval(omega);
            Complex64::new(re, im)
        })
    }

    /// Evaluate magnitude and phase over a list of angular frequencies.
    ///
    /// The caller's slice is sorted ascending in place before evaluation;
    /// this mutation is part of the contract. Returns magnitude and
    /// principal-value phase (radians) tensors shaped
    /// `[outputs, inputs, len]`, plus the sorted grid that was used.
    pub fn freqresp(&self, omega: &mut [f64]) -> (Array3<f64>, Array3<f64>, Vec<f64>) {
        omega.sort_by(|a, b| a.total_cmp(b));

        let (p, m) = (self.outputs(), self.inputs());
        let mut mag = Array3::<f64>::zeros((p, m, omega.len()));
        let mut phase = Array3::<f64>::zeros((p, m, omega.len()));

        for (k, &w) in omega.iter().enumerate() {
            let g = self.evalfr(w);
            for i in 0..p {
                for j in 0..m {
                    mag[[i, j, k]] = g[[i, j]].norm();
                    phase[[i, j, k]] = g[[i, j]].arg();
                }
            }
        }

        (mag, phase, omega.to_vec())
    }

    /// Rebuild the model on a different grid by evaluating the curves at
    /// every point of `omega`.
    pub(crate) fn resampled_onto(&self, omega: FrequencyAxis) -> Result<Frd, FrdError> {
        let (p, m) = (self.outputs(), self.inputs());
        let mut fresp = Array3::<Complex64>::zeros((p, m, omega.len()));
        for (k, &w) in omega.as_slice().iter().enumerate() {
            fresp.slice_mut(s![.., .., k]).assign(&self.evalfr(w));
        }
        Frd::new(fresp, omega)
    }
}
