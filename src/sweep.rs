//! Frequency-grid builders and sweep post-processing helpers.

use crate::constants::smooth_surface_impedance;
use crate::math::{CScalar, Scalar};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start_hz` and
/// `stop_hz`, the natural grid for conductor-loss curves.
/// Requires start > 0 and stop > 0.
#[must_use]
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start_hz > 0.0 && stop_hz > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let log_start = start_hz.log10();
            let log_stop = stop_hz.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// Magnitude of complex sequence.
#[must_use]
pub fn mag(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.norm()).collect()
}

/// Phase in radians of complex sequence.
#[must_use]
pub fn phase_rad(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.arg()).collect()
}

/// Ratio of rough to smooth surface resistance per frequency sample,
/// the usual way roughness loss is reported.
///
/// `rough` and `fs_hz` must have matching lengths; `sigma` is the bulk
/// conductivity of the smooth reference.
#[must_use]
pub fn resistance_ratio(rough: &[CScalar], fs_hz: &[Scalar], sigma: Scalar) -> Vec<Scalar> {
    rough
        .iter()
        .zip(fs_hz)
        .map(|(z, &f_hz)| z.re / smooth_surface_impedance(f_hz, sigma).re)
        .collect()
}
