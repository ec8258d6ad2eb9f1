//! Hypergeometric special functions used by the closed-form solution.
//!
//! Only the two evaluators the model needs are provided, on the domain
//! the model uses (`|z| < 1`). Parameters and argument are complex.

mod hypergeometric;

pub use hypergeometric::{hyp2f1, hyp3f2};

use thiserror::Error;

use crate::math::CScalar;

/// Failures of the series evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecialFunctionError {
    /// The power series diverges outside the unit disk.
    #[error("{function} series diverges for |z| >= 1 (got |z| = {z_norm})")]
    OutsideUnitDisk {
        /// Which function was requested.
        function: &'static str,
        /// Modulus of the offending argument.
        z_norm: f64,
    },
    /// The term budget was exhausted before the series settled.
    #[error("{function} series did not converge within {terms} terms at z = {z}")]
    Nonconvergence {
        /// Which function was requested.
        function: &'static str,
        /// Number of terms summed before giving up.
        terms: usize,
        /// Argument at which convergence failed.
        z: CScalar,
    },
}
