//! Shared error types for the evaluation pipeline.

use thiserror::Error;

use crate::math::Scalar;
use crate::special::SpecialFunctionError;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientModelError {
    /// Raised when positions and frequencies are both multi-element
    /// sweeps. The closed form evaluates a depth profile at one
    /// frequency or a frequency response at one depth, never a grid.
    #[error(
        "cannot sweep positions and frequencies together \
         (got {positions} positions and {frequencies} frequencies)"
    )]
    InvalidInputShape {
        /// Number of position samples supplied.
        positions: usize,
        /// Number of frequency samples supplied.
        frequencies: usize,
    },
    /// Raised when a physical input is zero, negative, or non-finite.
    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveInput {
        /// Which input violated the precondition.
        name: &'static str,
        /// The offending value.
        value: Scalar,
    },
    /// Raised when a quantity in the impedance quotient vanishes and the
    /// division is undefined.
    #[error("degenerate {quantity} at {frequency} Hz leaves the impedance undefined")]
    DomainDegeneracy {
        /// Which derived quantity vanished.
        quantity: &'static str,
        /// Frequency at which the degeneracy occurred.
        frequency: Scalar,
    },
    /// Wraps failures of the hypergeometric series evaluation.
    #[error(transparent)]
    SpecialFunction(#[from] SpecialFunctionError),
}
