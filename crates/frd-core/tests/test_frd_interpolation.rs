//! Interpolated evaluation tests
//!
//! The interpolation curves must reproduce the stored samples exactly and
//! track a smooth response between them; `freqresp` must sort the query
//! grid and reorder its output tensors to match.

use approx::assert_relative_eq;
use frd_core::{Frd, FrequencyAxis};
use num_complex::Complex64;

/// Second-order resonance 1 / (1 - w^2 + 0.2 jw) sampled on `ws`.
fn resonant_model(ws: &[f64]) -> Frd {
    let data: Vec<Complex64> = ws
        .iter()
        .map(|&w| Complex64::new(1.0, 0.0) / Complex64::new(1.0 - w * w, 0.2 * w))
        .collect();
    Frd::from_siso(&data, FrequencyAxis::new(ws.to_vec()).unwrap()).unwrap()
}

#[test]
fn test_evaluation_passes_through_samples() {
    let ws = [0.2, 0.5, 0.9, 1.1, 1.5, 2.0, 4.0];
    let m = resonant_model(&ws);

    for (k, &w) in ws.iter().enumerate() {
        let g = m.evalfr(w);
        assert_relative_eq!(g[[0, 0]].re, m.response()[[0, 0, k]].re, epsilon = 1e-9);
        assert_relative_eq!(g[[0, 0]].im, m.response()[[0, 0, k]].im, epsilon = 1e-9);
    }
}

#[test]
fn test_evaluation_tracks_smooth_response() {
    let ws: Vec<f64> = (0..160).map(|i| 0.1 + i as f64 * 0.025).collect();
    let m = resonant_model(&ws);

    for &w in &[0.3375, 0.7875, 1.5125, 3.0125] {
        let expected = Complex64::new(1.0, 0.0) / Complex64::new(1.0 - w * w, 0.2 * w);
        let g = m.evalfr(w);
        assert_relative_eq!(g[[0, 0]].re, expected.re, epsilon = 1e-3);
        assert_relative_eq!(g[[0, 0]].im, expected.im, epsilon = 1e-3);
    }
}

#[test]
fn test_freqresp_sorts_query_grid() {
    // Response magnitude grows with frequency so ordering is observable.
    let data = [
        Complex64::new(1.0, 0.0),
        Complex64::new(2.0, 0.0),
        Complex64::new(3.0, 0.0),
    ];
    let m = Frd::from_siso(&data, FrequencyAxis::new(vec![1.0, 2.0, 3.0]).unwrap()).unwrap();

    let mut query = [3.0, 1.0, 2.0];
    let (mag, phase, sorted) = m.freqresp(&mut query);

    // The caller's slice is sorted in place.
    assert_eq!(query, [1.0, 2.0, 3.0]);
    assert_eq!(sorted, vec![1.0, 2.0, 3.0]);

    assert_eq!(mag.dim(), (1, 1, 3));
    assert_eq!(phase.dim(), (1, 1, 3));
    for k in 0..3 {
        assert_relative_eq!(mag[[0, 0, k]], (k + 1) as f64, epsilon = 1e-9);
        assert_relative_eq!(phase[[0, 0, k]], 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_freqresp_magnitude_and_phase() {
    // Constant purely imaginary response: magnitude 2, phase -pi/2.
    let data = [Complex64::new(0.0, -2.0); 3];
    let m = Frd::from_siso(&data, FrequencyAxis::new(vec![1.0, 2.0, 3.0]).unwrap()).unwrap();

    let mut query = [1.0, 2.0, 3.0];
    let (mag, phase, _) = m.freqresp(&mut query);
    for k in 0..3 {
        assert_relative_eq!(mag[[0, 0, k]], 2.0, epsilon = 1e-9);
        assert_relative_eq!(phase[[0, 0, k]], -std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
    }
}

#[test]
fn test_mimo_evaluation_packs_all_channels() {
    let axis = FrequencyAxis::new(vec![1.0, 2.0]).unwrap();
    let fresp = ndarray::Array3::from_shape_fn((2, 3, 2), |(i, j, k)| {
        Complex64::new((i * 10 + j) as f64, k as f64)
    });
    let m = Frd::new(fresp, axis).unwrap();

    let g = m.evalfr(1.0);
    assert_eq!(g.dim(), (2, 3));
    assert_relative_eq!(g[[1, 2]].re, 12.0, epsilon = 1e-9);
    assert_relative_eq!(g[[0, 1]].re, 1.0, epsilon = 1e-9);
}
