//! Generic linear-system evaluation contract
//!
//! Any system representation that can report its input/output counts and
//! evaluate its response matrix at `s = jw` can be converted into a
//! frequency response model by sampling.

use ndarray::Array2;
use num_complex::Complex64;

/// A linear time-invariant system viewed through its frequency response.
pub trait Lti {
    /// Number of system outputs (rows of the response matrix).
    fn outputs(&self) -> usize;

    /// Number of system inputs (columns of the response matrix).
    fn inputs(&self) -> usize;

    /// Evaluate the response matrix at `s = j * omega`.
    ///
    /// The returned matrix is `outputs() x inputs()`.
    fn evalfr(&self, omega: f64) -> Array2<Complex64>;
}
