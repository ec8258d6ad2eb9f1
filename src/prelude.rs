//! Convenience re-exports for evaluating rough-conductor losses.

pub use crate::constants::{
    angular_frequency, skin_depth, smooth_surface_impedance, COPPER_CONDUCTIVITY,
    VACUUM_PERMEABILITY,
};
pub use crate::errors::GradientModelError;
pub use crate::field::{field, field_at, field_over_frequencies, field_over_positions};
pub use crate::impedance::{
    default_reference_depth, surface_impedance, surface_impedance_over_frequencies,
};
pub use crate::materials::{
    effective_properties, rough_surface_properties, EffectiveProperties, GradientModel,
};
pub use crate::math::{complex_pow, phasor, CScalar, Scalar};
pub use crate::parameters::{transition_scale, validate_inputs, zeta, ModelParameters};
pub use crate::special::{hyp2f1, hyp3f2, SpecialFunctionError};
pub use crate::sweep::{linspace, logspace_hz, mag, phase_rad, resistance_ratio};
