//! Power-series evaluation of ₂F₁ and ₃F₂ with complex parameters.
//!
//! ```text
//! ₂F₁(a, b; c; z)           = Σ_{n=0}^∞ (a)_n (b)_n / ((c)_n n!) zⁿ
//! ₃F₂(a₁, a₂, a₃; b₁, b₂; z) = Σ_{n=0}^∞ (a₁)_n (a₂)_n (a₃)_n / ((b₁)_n (b₂)_n n!) zⁿ
//! ```
//!
//! where (x)_n = x(x+1)...(x+n-1) is the Pochhammer symbol. Terms are
//! built by recurrence, so terminating (polynomial) cases fall out of
//! the summation without special handling.
//!
//! # References
//! - DLMF 15: Hypergeometric Function
//! - DLMF 16: Generalized Hypergeometric Functions

use super::SpecialFunctionError;
use crate::math::{CScalar, Scalar};

/// Maximum terms in series expansion.
///
/// The roughness model evaluates at arguments near 1 (the series tail
/// decays like zⁿ, so z ≈ 0.998 needs on the order of 10⁴ terms); the
/// budget leaves an order of magnitude of headroom beyond that.
const MAX_SERIES_TERMS: usize = 200_000;

/// Convergence threshold.
const EPSILON: Scalar = 1e-15;

/// Consecutive below-threshold terms required before the sum is
/// accepted, so a single term passing near zero cannot end the
/// summation early.
const QUIET_TERMS: usize = 2;

/// Gauss hypergeometric function ₂F₁(a, b; c; z) for complex parameters
/// and complex argument inside the unit disk.
///
/// `c` must not be a non-positive integer (poles of the series).
pub fn hyp2f1(
    a: CScalar,
    b: CScalar,
    c: CScalar,
    z: CScalar,
) -> Result<CScalar, SpecialFunctionError> {
    check_unit_disk("2F1", z)?;
    sum_series("2F1", z, |term, n| {
        term * (a + n) * (b + n) / ((c + n) * (n + 1.0)) * z
    })
}

/// Generalized hypergeometric function ₃F₂(a₁, a₂, a₃; b₁, b₂; z) for
/// complex parameters and complex argument inside the unit disk.
///
/// `b₁` and `b₂` must not be non-positive integers (poles of the series).
pub fn hyp3f2(
    a1: CScalar,
    a2: CScalar,
    a3: CScalar,
    b1: CScalar,
    b2: CScalar,
    z: CScalar,
) -> Result<CScalar, SpecialFunctionError> {
    check_unit_disk("3F2", z)?;
    sum_series("3F2", z, |term, n| {
        term * (a1 + n) * (a2 + n) * (a3 + n) / ((b1 + n) * (b2 + n) * (n + 1.0)) * z
    })
}

fn check_unit_disk(function: &'static str, z: CScalar) -> Result<(), SpecialFunctionError> {
    let z_norm = z.norm();
    if z_norm >= 1.0 {
        return Err(SpecialFunctionError::OutsideUnitDisk { function, z_norm });
    }
    Ok(())
}

/// Sums `1 + Σ termⁿ` where `next` maps the n-th term to the (n+1)-th.
fn sum_series<F>(
    function: &'static str,
    z: CScalar,
    mut next: F,
) -> Result<CScalar, SpecialFunctionError>
where
    F: FnMut(CScalar, Scalar) -> CScalar,
{
    let mut sum = CScalar::new(1.0, 0.0);
    if z.norm() == 0.0 {
        return Ok(sum);
    }

    let mut term = CScalar::new(1.0, 0.0);
    let mut quiet = 0;
    for n in 0..MAX_SERIES_TERMS {
        term = next(term, n as Scalar);
        sum += term;

        if term.norm() <= EPSILON * sum.norm() {
            quiet += 1;
            if quiet == QUIET_TERMS {
                return Ok(sum);
            }
        } else {
            quiet = 0;
        }
    }

    Err(SpecialFunctionError::Nonconvergence {
        function,
        terms: MAX_SERIES_TERMS,
        z,
    })
}
