//! Rough-conductor surface impedance via the closed-form antiderivative.
//!
//! The impedance is the quotient of the integrated (antiderivative)
//! field term and the field itself at a reference depth `x0` below the
//! nominal surface, scaled by jωμ₀. The antiderivative combines two
//! ₃F₂ evaluations whose third upper and second lower parameters are
//! the α-family parameters shifted by one.

use crate::constants::{angular_frequency, VACUUM_PERMEABILITY};
use crate::errors::GradientModelError;
use crate::field::field_kernel;
use crate::math::{complex_pow, CScalar, Scalar};
use crate::parameters::{
    require_positive, transition_scale, validate_inputs, zeta, ModelParameters,
};
use crate::special::hyp3f2;

/// Default reference depth -5·rq, "far below the nominal surface".
#[inline]
#[must_use]
pub const fn default_reference_depth(rq: Scalar) -> Scalar {
    -5.0 * rq
}

/// Per-frequency evaluation with the position-dependent quantities
/// (`chi`, `zeta0`) already derived.
fn impedance_kernel(
    f_hz: Scalar,
    rq: Scalar,
    sigma0: Scalar,
    chi: Scalar,
    zeta0: Scalar,
) -> Result<CScalar, GradientModelError> {
    let params = ModelParameters::derive(f_hz, rq, sigma0);
    let ModelParameters { alpha, beta } = params;
    if alpha.norm() == 0.0 {
        return Err(GradientModelError::DomainDegeneracy {
            quantity: "roughness parameter alpha",
            frequency: f_hz,
        });
    }

    let mag = field_kernel(params, zeta0)?;
    if mag.norm() == 0.0 {
        return Err(GradientModelError::DomainDegeneracy {
            quantity: "field magnitude",
            frequency: f_hz,
        });
    }

    let z = CScalar::new(zeta0, 0.0);
    let f1 = hyp3f2(
        1.0 + alpha - beta,
        2.0 + alpha + beta,
        alpha + 1.0,
        1.0 + 2.0 * alpha,
        alpha + 2.0,
        z,
    )?;
    let f0 = hyp3f2(
        1.0 + alpha - beta,
        2.0 + alpha + beta,
        alpha,
        1.0 + 2.0 * alpha,
        alpha + 1.0,
        z,
    )?;
    let bb = 0.5 * chi * complex_pow(zeta0, alpha) * (z / (alpha + 1.0) * f1 - f0 / alpha);

    let j = CScalar::new(0.0, 1.0);
    Ok(-j * VACUUM_PERMEABILITY * angular_frequency(f_hz) * bb / mag)
}

/// Complex surface impedance (Ω) at frequency `f_hz` (Hz) for rms
/// roughness `rq` (m) and bulk conductivity `sigma0` (S/m).
///
/// `x0` is the reference depth for the field quotient; `None` selects
/// -5·rq exactly.
pub fn surface_impedance(
    f_hz: Scalar,
    rq: Scalar,
    x0: Option<Scalar>,
    sigma0: Scalar,
) -> Result<CScalar, GradientModelError> {
    validate_inputs(f_hz, rq, sigma0)?;
    let x0 = x0.unwrap_or(default_reference_depth(rq));
    impedance_kernel(f_hz, rq, sigma0, transition_scale(rq), zeta(x0, rq))
}

/// Surface impedance across the frequencies `fs`, sharing the
/// position-dependent quantities.
///
/// Element `k` equals `surface_impedance(fs[k], ..)` (same code path);
/// results follow the order of `fs`.
pub fn surface_impedance_over_frequencies(
    fs: &[Scalar],
    rq: Scalar,
    x0: Option<Scalar>,
    sigma0: Scalar,
) -> Result<Vec<CScalar>, GradientModelError> {
    require_positive("roughness", rq)?;
    require_positive("conductivity", sigma0)?;
    let x0 = x0.unwrap_or(default_reference_depth(rq));
    let chi = transition_scale(rq);
    let zeta0 = zeta(x0, rq);
    fs.iter()
        .map(|&f_hz| {
            require_positive("frequency", f_hz)?;
            impedance_kernel(f_hz, rq, sigma0, chi, zeta0)
        })
        .collect()
}
