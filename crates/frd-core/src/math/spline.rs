//! Cubic spline interpolation
//!
//! Provides a natural cubic spline through irregularly spaced nodes and a
//! parametric curve built from two coordinate splines sharing one
//! parameter. Used to evaluate sampled complex responses at frequencies
//! between (and mildly beyond) the sampled grid.

use crate::error::FrdError;

/// Natural cubic spline through all nodes.
///
/// The curve passes through every `(x, y)` pair exactly. Queries outside
/// the node range evaluate the polynomial of the nearest end segment;
/// accuracy degrades with distance from the sampled range.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Second derivatives at the nodes, zero at both ends.
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit a spline through the nodes.
    ///
    /// `x` must be strictly increasing and of the same length as `y`.
    /// A single node yields a constant, two nodes a straight line.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, FrdError> {
        if x.is_empty() || x.len() != y.len() {
            return Err(FrdError::InvalidArguments(
                "spline needs matching, non-empty node vectors".into(),
            ));
        }
        if x.windows(2).any(|p| p[1] <= p[0]) {
            return Err(FrdError::InvalidArguments(
                "spline abscissas must be strictly increasing".into(),
            ));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(FrdError::InvalidArguments(
                "spline nodes must be finite".into(),
            ));
        }

        let n = x.len();
        let mut m = vec![0.0; n];

        if n >= 3 {
            // Tridiagonal system for interior second derivatives,
            // natural boundary (m[0] = m[n-1] = 0), Thomas algorithm.
            let h: Vec<f64> = x.windows(2).map(|p| p[1] - p[0]).collect();
            let mut diag = vec![0.0; n - 2];
            let mut rhs = vec![0.0; n - 2];
            for i in 1..n - 1 {
                diag[i - 1] = 2.0 * (h[i - 1] + h[i]);
                rhs[i - 1] =
                    6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
            }
            // Forward sweep: sub/super diagonals are h[1..n-2].
            for i in 1..n - 2 {
                let factor = h[i] / diag[i - 1];
                diag[i] -= factor * h[i];
                rhs[i] -= factor * rhs[i - 1];
            }
            // Back substitution.
            m[n - 2] = rhs[n - 3] / diag[n - 3];
            for i in (1..n - 2).rev() {
                m[i] = (rhs[i - 1] - h[i] * m[i + 1]) / diag[i - 1];
            }
        }

        Ok(Self { x, y, m })
    }

    /// Evaluate the spline at `xq`.
    pub fn eval(&self, xq: f64) -> f64 {
        let n = self.x.len();
        if n == 1 {
            return self.y[0];
        }

        let i = self.segment(xq);
        let h = self.x[i + 1] - self.x[i];
        let t = xq - self.x[i];

        let b = (self.y[i + 1] - self.y[i]) / h - h * (2.0 * self.m[i] + self.m[i + 1]) / 6.0;
        let c = self.m[i] / 2.0;
        let d = (self.m[i + 1] - self.m[i]) / (6.0 * h);

        self.y[i] + t * (b + t * (c + t * d))
    }

    /// Index of the segment containing `xq`, clamped to the end segments
    /// for out-of-range queries.
    fn segment(&self, xq: f64) -> usize {
        let n = self.x.len();
        match self.x.partition_point(|v| *v <= xq) {
            0 => 0,
            i if i >= n => n - 2,
            i => i - 1,
        }
    }
}

/// Parametric curve `(x(u), y(u))` through weighted 2-D points.
///
/// Each coordinate is a natural cubic spline over the shared parameter.
/// The fit uses a zero smoothing tolerance, so the curve reproduces every
/// sample exactly; the per-point weights are validated and reserved for a
/// positive-tolerance smoothing fit, where they would down-weight noisy
/// samples.
#[derive(Debug, Clone)]
pub struct ParametricSpline {
    sx: CubicSpline,
    sy: CubicSpline,
}

impl ParametricSpline {
    /// Fit a parametric curve through `(x[k], y[k])` at parameter `u[k]`.
    pub fn fit(u: &[f64], x: &[f64], y: &[f64], w: &[f64]) -> Result<Self, FrdError> {
        if u.len() != x.len() || u.len() != y.len() || u.len() != w.len() {
            return Err(FrdError::InvalidArguments(
                "parametric fit needs equally long parameter, coordinate and weight vectors"
                    .into(),
            ));
        }
        if w.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(FrdError::InvalidArguments(
                "spline weights must be positive and finite".into(),
            ));
        }

        Ok(Self {
            sx: CubicSpline::new(u.to_vec(), x.to_vec())?,
            sy: CubicSpline::new(u.to_vec(), y.to_vec())?,
        })
    }

    /// Evaluate both coordinates at parameter `uq`.
    pub fn eval(&self, uq: f64) -> (f64, f64) {
        (self.sx.eval(uq), self.sy.eval(uq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_passes_through_nodes() {
        let x: Vec<f64> = vec![0.0, 1.0, 2.5, 4.0, 7.0];
        let y: Vec<f64> = x.iter().map(|v| (v * 0.7).sin()).collect();
        let s = CubicSpline::new(x.clone(), y.clone()).unwrap();

        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_relative_eq!(s.eval(*xi), *yi, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_nodes_is_linear() {
        let s = CubicSpline::new(vec![1.0, 3.0], vec![2.0, 6.0]).unwrap();
        assert_relative_eq!(s.eval(2.0), 4.0, epsilon = 1e-12);
        // End segments extend linearly.
        assert_relative_eq!(s.eval(4.0), 8.0, epsilon = 1e-12);
        assert_relative_eq!(s.eval(0.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_node_constant() {
        let s = CubicSpline::new(vec![2.0], vec![5.0]).unwrap();
        assert_relative_eq!(s.eval(0.5), 5.0, epsilon = 1e-12);
        assert_relative_eq!(s.eval(9.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolates_smooth_function_closely() {
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.5).collect();
        let y: Vec<f64> = x.iter().map(|v| v.cos()).collect();
        let s = CubicSpline::new(x, y).unwrap();

        for i in 0..38 {
            let xq = 0.25 + i as f64 * 0.25;
            assert_relative_eq!(s.eval(xq), xq.cos(), epsilon = 1e-2);
        }
    }

    #[test]
    fn test_rejects_bad_nodes() {
        assert!(CubicSpline::new(vec![], vec![]).is_err());
        assert!(CubicSpline::new(vec![1.0, 1.0], vec![0.0, 0.0]).is_err());
        assert!(CubicSpline::new(vec![1.0, 2.0], vec![0.0]).is_err());
    }

    #[test]
    fn test_parametric_roundtrip() {
        let u = vec![1.0, 2.0, 3.0, 4.0];
        let x = vec![1.0, 0.5, 0.25, 0.125];
        let y = vec![0.0, -0.5, -0.25, -0.125];
        let w = vec![1.0; 4];
        let c = ParametricSpline::fit(&u, &x, &y, &w).unwrap();

        for k in 0..4 {
            let (xv, yv) = c.eval(u[k]);
            assert_relative_eq!(xv, x[k], epsilon = 1e-12);
            assert_relative_eq!(yv, y[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_parametric_rejects_bad_weights() {
        let u = vec![1.0, 2.0];
        let v = vec![0.0, 1.0];
        assert!(ParametricSpline::fit(&u, &v, &v, &[1.0, 0.0]).is_err());
        assert!(ParametricSpline::fit(&u, &v, &v, &[1.0]).is_err());
    }
}
