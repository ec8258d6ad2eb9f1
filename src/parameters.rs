//! Derivation of the closed-form model parameters.
//!
//! The roughness parameter `alpha` and exponent parameter `beta` depend
//! only on frequency, roughness, and conductivity; the normalized depth
//! coordinate `zeta` depends only on position and roughness. The two
//! groups never mix, so either side can be swept independently.

use std::f64::consts::SQRT_2;

use crate::constants::{angular_frequency, VACUUM_PERMEABILITY};
use crate::errors::GradientModelError;
use crate::math::{CScalar, Scalar};

/// Thickness scale χ = √2·rq of the conductivity transition layer, in
/// meters.
#[inline]
#[must_use]
pub const fn transition_scale(rq: Scalar) -> Scalar {
    SQRT_2 * rq
}

/// Logistic map ζ(x) = 1 / (1 + exp(2·(x/χ + 1/2))) of depth into (0, 1).
///
/// Deep inside the metal (x → -∞) the map saturates at 1; far above the
/// nominal surface (x → +∞) it decays to 0.
#[must_use]
pub fn zeta(x: Scalar, rq: Scalar) -> Scalar {
    let chi = transition_scale(rq);
    1.0 / (1.0 + (2.0 * (x / chi + 0.5)).exp())
}

/// Frequency-dependent complex parameters of the closed form.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    /// Roughness parameter α = (1+j)/2 · rq · √(μ₀ωσ₀).
    pub alpha: CScalar,
    /// Exponent parameter β = (√(1 + 4α²) - 1) / 2.
    pub beta: CScalar,
}

impl ModelParameters {
    /// Derives α and β at frequency `f_hz` for rms roughness `rq` and
    /// bulk conductivity `sigma0`.
    ///
    /// Inputs must be positive; the public entry points validate this
    /// before calling in.
    #[must_use]
    pub fn derive(f_hz: Scalar, rq: Scalar, sigma0: Scalar) -> Self {
        let w = angular_frequency(f_hz);
        let scale = 0.5 * rq * (VACUUM_PERMEABILITY * w * sigma0).sqrt();
        let alpha = CScalar::new(scale, scale);
        // 1 + 4α² stays in the right half-plane for physical inputs, so
        // the principal square root is continuous across any sweep.
        let beta = ((1.0 + 4.0 * alpha * alpha).sqrt() - 1.0) * 0.5;
        Self { alpha, beta }
    }
}

/// Validates the shared positivity preconditions of the public API.
pub fn validate_inputs(f_hz: Scalar, rq: Scalar, sigma0: Scalar) -> Result<(), GradientModelError> {
    require_positive("frequency", f_hz)?;
    require_positive("roughness", rq)?;
    require_positive("conductivity", sigma0)
}

pub(crate) fn require_positive(
    name: &'static str,
    value: Scalar,
) -> Result<(), GradientModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GradientModelError::NonPositiveInput { name, value })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn zeta_saturates_deep_in_the_metal() {
        let rq = 1.0e-7;
        assert_relative_eq!(zeta(-1.0e3 * rq, rq), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(zeta(1.0e3 * rq, rq), 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn zeta_at_default_reference_depth() {
        // x₀ = -5·rq, the integration start used by the impedance
        // evaluator; independent of rq since x scales with χ.
        let value = zeta(-5.0e-7, 1.0e-7);
        assert_relative_eq!(value, 0.997_696, max_relative = 1.0e-5);
        assert_relative_eq!(value, zeta(-5.0e-9, 1.0e-9), epsilon = 1.0e-12);
    }

    #[test]
    fn alpha_matches_hand_computation() {
        // f = 1 GHz, rq = 100 nm, copper: |α| = rq·√(μ₀ωσ₀)/√2.
        let p = ModelParameters::derive(1.0e9, 1.0e-7, 5.8e7);
        assert_relative_eq!(p.alpha.re, 3.383_6e-2, max_relative = 1.0e-4);
        assert_relative_eq!(p.alpha.im, p.alpha.re, epsilon = 0.0);
    }

    #[test]
    fn beta_approaches_alpha_squared_for_small_roughness() {
        let p = ModelParameters::derive(1.0e9, 1.0e-10, 5.8e7);
        let alpha_sq = p.alpha * p.alpha;
        assert!((p.beta - alpha_sq).norm() < 1.0e-6 * alpha_sq.norm());
    }

    #[test]
    fn beta_is_continuous_across_a_frequency_sweep() {
        // The principal branch must not jump as α sweeps with frequency.
        let mut prev: Option<CScalar> = None;
        for k in 0..60 {
            let f = 1.0e8 * 10.0_f64.powf(k as Scalar / 20.0);
            let p = ModelParameters::derive(f, 5.0e-7, 5.8e7);
            if let Some(last) = prev {
                assert!((p.beta - last).norm() < 0.5, "branch jump near {f} Hz");
            }
            prev = Some(p.beta);
        }
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(matches!(
            validate_inputs(0.0, 1.0e-7, 5.8e7),
            Err(GradientModelError::NonPositiveInput { name: "frequency", .. })
        ));
        assert!(matches!(
            validate_inputs(1.0e9, -1.0e-7, 5.8e7),
            Err(GradientModelError::NonPositiveInput { name: "roughness", .. })
        ));
        assert!(matches!(
            validate_inputs(1.0e9, 1.0e-7, Scalar::NAN),
            Err(GradientModelError::NonPositiveInput { name: "conductivity", .. })
        ));
    }
}
