//! Shared numerical primitives for complex phasor arithmetic.

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors and impedances.
pub type CScalar = num_complex::Complex<Scalar>;

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    num_complex::Complex::from_polar(1.0, theta)
}

/// Principal value of `base^exponent` for strictly positive real `base`.
///
/// Evaluates `exp(exponent * ln(base))`, which is single-valued on the
/// positive real axis.
#[must_use]
pub fn complex_pow(base: Scalar, exponent: CScalar) -> CScalar {
    (exponent * base.ln()).exp()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::{E, PI};

    use super::*;

    #[test]
    fn phasor_quarter_turn() {
        let p = phasor(PI / 2.0);
        assert_relative_eq!(p.re, 0.0, epsilon = 1.0e-15);
        assert_relative_eq!(p.im, 1.0, epsilon = 1.0e-15);
    }

    #[test]
    fn complex_pow_reduces_to_real_power() {
        let p = complex_pow(2.0, CScalar::new(3.0, 0.0));
        assert_relative_eq!(p.re, 8.0, epsilon = 1.0e-12);
        assert_relative_eq!(p.im, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn complex_pow_euler_identity() {
        let p = complex_pow(E, CScalar::new(0.0, PI));
        assert_relative_eq!(p.re, -1.0, epsilon = 1.0e-12);
        assert_relative_eq!(p.im, 0.0, epsilon = 1.0e-12);
    }
}
