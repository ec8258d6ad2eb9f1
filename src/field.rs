//! Tangential magnetic field inside the roughness transition layer.
//!
//! The closed form gives the field as ζ^α · ₂F₁(α+β, α-β-1; 1+2α; ζ).
//! One axis is swept at a time: a depth profile at a single frequency,
//! or a frequency response at a single depth. The explicit entry points
//! make that choice at the call site; [`field`] is a batch façade that
//! rejects ambiguous shapes up front.

use crate::errors::GradientModelError;
use crate::math::{complex_pow, CScalar, Scalar};
use crate::parameters::{require_positive, validate_inputs, zeta, ModelParameters};
use crate::special::hyp2f1;

/// Single-point field kernel shared by every entry point, including the
/// impedance evaluator.
pub(crate) fn field_kernel(
    params: ModelParameters,
    zeta: Scalar,
) -> Result<CScalar, GradientModelError> {
    // Above the transition layer the logistic map underflows to zero and
    // the field vanishes with it (ζ^α → 0 for Re α > 0).
    if zeta == 0.0 {
        return Ok(CScalar::new(0.0, 0.0));
    }
    let ModelParameters { alpha, beta } = params;
    let envelope = complex_pow(zeta, alpha);
    let profile = hyp2f1(
        alpha + beta,
        alpha - beta - 1.0,
        1.0 + 2.0 * alpha,
        CScalar::new(zeta, 0.0),
    )?;
    Ok(envelope * profile)
}

/// Tangential magnetic field at depth `x` (m) and frequency `f_hz` (Hz)
/// for rms roughness `rq` (m) and bulk conductivity `sigma0` (S/m).
pub fn field_at(
    x: Scalar,
    f_hz: Scalar,
    rq: Scalar,
    sigma0: Scalar,
) -> Result<CScalar, GradientModelError> {
    validate_inputs(f_hz, rq, sigma0)?;
    let params = ModelParameters::derive(f_hz, rq, sigma0);
    field_kernel(params, zeta(x, rq))
}

/// Field profile across the depths `xs` at a single frequency.
///
/// α and β are derived once and shared; ζ varies per element. Results
/// follow the order of `xs`.
pub fn field_over_positions(
    xs: &[Scalar],
    f_hz: Scalar,
    rq: Scalar,
    sigma0: Scalar,
) -> Result<Vec<CScalar>, GradientModelError> {
    validate_inputs(f_hz, rq, sigma0)?;
    let params = ModelParameters::derive(f_hz, rq, sigma0);
    xs.iter()
        .map(|&x| field_kernel(params, zeta(x, rq)))
        .collect()
}

/// Frequency response of the field at a single depth.
///
/// ζ is derived once and shared; α and β vary per element. Results
/// follow the order of `fs`.
pub fn field_over_frequencies(
    x: Scalar,
    fs: &[Scalar],
    rq: Scalar,
    sigma0: Scalar,
) -> Result<Vec<CScalar>, GradientModelError> {
    require_positive("roughness", rq)?;
    require_positive("conductivity", sigma0)?;
    let zeta0 = zeta(x, rq);
    fs.iter()
        .map(|&f_hz| {
            require_positive("frequency", f_hz)?;
            field_kernel(ModelParameters::derive(f_hz, rq, sigma0), zeta0)
        })
        .collect()
}

/// Batch façade over the explicit entry points.
///
/// Both slices must be non-empty and at most one of them may hold more
/// than one sample; anything else is rejected with
/// [`GradientModelError::InvalidInputShape`] before any numeric work.
/// The output length follows the swept axis.
pub fn field(
    xs: &[Scalar],
    fs: &[Scalar],
    rq: Scalar,
    sigma0: Scalar,
) -> Result<Vec<CScalar>, GradientModelError> {
    let (positions, frequencies) = (xs.len(), fs.len());
    if positions == 0 || frequencies == 0 || (positions > 1 && frequencies > 1) {
        return Err(GradientModelError::InvalidInputShape {
            positions,
            frequencies,
        });
    }
    if frequencies > 1 {
        field_over_frequencies(xs[0], fs, rq, sigma0)
    } else {
        field_over_positions(xs, fs[0], rq, sigma0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const RQ: Scalar = 1.0e-7;
    const SIGMA: Scalar = 5.8e7;

    #[test]
    fn batch_over_positions_matches_scalar_calls() {
        let xs = [-5.0 * RQ, -2.0 * RQ, 0.0, 2.0 * RQ];
        let batch = field_over_positions(&xs, 1.0e10, RQ, SIGMA).unwrap();
        assert_eq!(batch.len(), xs.len());
        for (&x, &value) in xs.iter().zip(&batch) {
            assert_eq!(value, field_at(x, 1.0e10, RQ, SIGMA).unwrap());
        }
    }

    #[test]
    fn batch_over_frequencies_matches_scalar_calls() {
        let fs = [1.0e9, 5.0e9, 2.5e10];
        let x0 = -5.0 * RQ;
        let batch = field_over_frequencies(x0, &fs, RQ, SIGMA).unwrap();
        for (&f, &value) in fs.iter().zip(&batch) {
            assert_eq!(value, field_at(x0, f, RQ, SIGMA).unwrap());
        }
    }

    #[test]
    fn facade_dispatches_on_the_multi_element_axis() {
        let xs = [-5.0 * RQ, 0.0];
        let over_x = field(&xs, &[1.0e10], RQ, SIGMA).unwrap();
        assert_eq!(over_x, field_over_positions(&xs, 1.0e10, RQ, SIGMA).unwrap());

        let fs = [1.0e9, 1.0e10];
        let over_f = field(&[-5.0 * RQ], &fs, RQ, SIGMA).unwrap();
        assert_eq!(
            over_f,
            field_over_frequencies(-5.0 * RQ, &fs, RQ, SIGMA).unwrap()
        );
    }

    #[test]
    fn facade_rejects_two_swept_axes() {
        let xs = [-5.0 * RQ, -1.0 * RQ, 0.0];
        let fs = [1.0e9, 1.0e10];
        let err = field(&xs, &fs, RQ, SIGMA).unwrap_err();
        assert!(matches!(
            err,
            GradientModelError::InvalidInputShape {
                positions: 3,
                frequencies: 2,
            }
        ));

        assert!(matches!(
            field(&[], &fs, RQ, SIGMA),
            Err(GradientModelError::InvalidInputShape { positions: 0, .. })
        ));
    }

    #[test]
    fn field_decays_above_the_surface() {
        // Deep inside the metal the normalized field is near unity;
        // above the transition layer it dies off.
        let deep = field_at(-20.0 * RQ, 1.0e10, RQ, SIGMA).unwrap();
        let high = field_at(100.0 * RQ, 1.0e10, RQ, SIGMA).unwrap();
        assert!(deep.norm() > 0.5);
        assert!(high.norm() < 1.0e-3);
    }

    #[test]
    fn rejects_non_positive_physical_inputs() {
        assert!(matches!(
            field_at(0.0, -1.0, RQ, SIGMA),
            Err(GradientModelError::NonPositiveInput { name: "frequency", .. })
        ));
        assert!(matches!(
            field_over_frequencies(0.0, &[1.0e9, 0.0], RQ, SIGMA),
            Err(GradientModelError::NonPositiveInput { name: "frequency", .. })
        ));
        assert!(matches!(
            field(&[0.0], &[1.0e9], 0.0, SIGMA),
            Err(GradientModelError::NonPositiveInput { name: "roughness", .. })
        ));
    }

    #[test]
    fn normalized_field_is_unity_deep_inside_for_small_roughness() {
        // As rq → 0 the profile approaches the smooth exponential; at the
        // reference depth ζ ≈ 1 and the hypergeometric factor → 1.
        let value = field_at(-5.0e-10, 1.0e9, 1.0e-10, SIGMA).unwrap();
        assert_relative_eq!(value.norm(), 1.0, max_relative = 1.0e-2);
    }
}
