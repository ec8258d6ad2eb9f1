//! Baseline physical constants and smooth-conductor reference quantities.
//!
//! ## References
//!
//! Physical constants are based on CODATA recommended values:
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019 (following 2019 SI redefinition)

use std::f64::consts::PI;

use crate::math::{CScalar, Scalar};

/// Vacuum permeability μ₀ in henries per meter (H/m).
/// Approximate value: 1.25663706212 × 10⁻⁶ H/m (12 significant figures).
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_12e-6;
/// DC conductivity of annealed copper σ in siemens per meter (S/m), the
/// default bulk conductivity of the roughness model.
pub const COPPER_CONDUCTIVITY: f64 = 5.8e7;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Classical skin depth δ = √(2 / (μ₀ωσ)) of a smooth conductor, in meters.
#[inline]
#[must_use]
pub fn skin_depth(f_hz: Scalar, sigma: Scalar) -> Scalar {
    (2.0 / (VACUUM_PERMEABILITY * angular_frequency(f_hz) * sigma)).sqrt()
}

/// Surface impedance (1 + j)·√(μ₀ω / 2σ) of a smooth conductor, in ohms.
///
/// The rough-surface closed form collapses to this value as the rms
/// roughness goes to zero.
#[must_use]
pub fn smooth_surface_impedance(f_hz: Scalar, sigma: Scalar) -> CScalar {
    let rs = (VACUUM_PERMEABILITY * angular_frequency(f_hz) / (2.0 * sigma)).sqrt();
    CScalar::new(rs, rs)
}
