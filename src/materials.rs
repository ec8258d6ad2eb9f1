//! Rough-conductor material model and derived effective properties.

use crate::constants::{angular_frequency, COPPER_CONDUCTIVITY, VACUUM_PERMEABILITY};
use crate::errors::GradientModelError;
use crate::field::field_over_positions;
use crate::impedance::{surface_impedance, surface_impedance_over_frequencies};
use crate::math::{CScalar, Scalar};

/// Equivalent smooth-conductor parameters reproducing a rough surface's
/// complex impedance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveProperties {
    /// Complex surface impedance (Ω).
    pub impedance: CScalar,
    /// Effective conductivity σ_eff = μ₀ω / (2·Re(Z)²), in S/m.
    pub conductivity: Scalar,
    /// Effective relative permeability μ_eff = 2σ₀·Im(Z)² / (ωμ₀).
    pub relative_permeability: Scalar,
}

/// Derives the effective smooth-conductor properties from a surface
/// impedance `z` at frequency `f_hz`, referenced to the bulk
/// conductivity `sigma0`.
#[must_use]
pub fn effective_properties(z: CScalar, f_hz: Scalar, sigma0: Scalar) -> EffectiveProperties {
    let w = angular_frequency(f_hz);
    let conductivity = VACUUM_PERMEABILITY * w / (2.0 * z.re * z.re);
    let relative_permeability = 2.0 * sigma0 * z.im * z.im / w / VACUUM_PERMEABILITY;
    EffectiveProperties {
        impedance: z,
        conductivity,
        relative_permeability,
    }
}

/// Rough-conductor descriptor evaluating the gradient model.
///
/// Bundles the surface parameters so frequency sweeps and effective
/// properties read naturally at the call site.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientModel {
    /// Rms surface roughness rq in meters.
    pub roughness: Scalar,
    /// Bulk (DC) conductivity σ₀ in S/m.
    pub conductivity: Scalar,
    /// Reference depth x₀ for the impedance quotient, in meters;
    /// `None` selects -5·rq.
    pub reference_depth: Option<Scalar>,
}

impl GradientModel {
    /// Copper surface with the given rms roughness (m).
    #[must_use]
    pub const fn new(roughness: Scalar) -> Self {
        Self::with_conductivity(roughness, COPPER_CONDUCTIVITY)
    }

    /// Surface with the given rms roughness (m) and bulk conductivity
    /// (S/m).
    #[must_use]
    pub const fn with_conductivity(roughness: Scalar, conductivity: Scalar) -> Self {
        Self {
            roughness,
            conductivity,
            reference_depth: None,
        }
    }

    /// Overrides the reference depth x₀ (m) used by the impedance
    /// quotient.
    #[must_use]
    pub const fn reference_depth(mut self, x0: Scalar) -> Self {
        self.reference_depth = Some(x0);
        self
    }

    /// Complex surface impedance (Ω) at `f_hz`.
    pub fn surface_impedance(&self, f_hz: Scalar) -> Result<CScalar, GradientModelError> {
        surface_impedance(f_hz, self.roughness, self.reference_depth, self.conductivity)
    }

    /// Complex surface impedance across the frequencies `fs`.
    pub fn frequency_response(&self, fs: &[Scalar]) -> Result<Vec<CScalar>, GradientModelError> {
        surface_impedance_over_frequencies(
            fs,
            self.roughness,
            self.reference_depth,
            self.conductivity,
        )
    }

    /// Tangential magnetic field profile across the depths `xs` at
    /// frequency `f_hz`.
    pub fn field_profile(
        &self,
        xs: &[Scalar],
        f_hz: Scalar,
    ) -> Result<Vec<CScalar>, GradientModelError> {
        field_over_positions(xs, f_hz, self.roughness, self.conductivity)
    }

    /// Surface impedance and derived effective properties at `f_hz`.
    pub fn properties(&self, f_hz: Scalar) -> Result<EffectiveProperties, GradientModelError> {
        let z = self.surface_impedance(f_hz)?;
        Ok(effective_properties(z, f_hz, self.conductivity))
    }

    /// Effective properties across the frequencies `fs`, one entry per
    /// frequency in input order.
    pub fn properties_over_frequencies(
        &self,
        fs: &[Scalar],
    ) -> Result<Vec<EffectiveProperties>, GradientModelError> {
        let zs = self.frequency_response(fs)?;
        Ok(zs
            .into_iter()
            .zip(fs)
            .map(|(z, &f_hz)| effective_properties(z, f_hz, self.conductivity))
            .collect())
    }
}

/// Surface impedance and effective properties in one call, the
/// top-level result of the evaluation pipeline.
pub fn rough_surface_properties(
    f_hz: Scalar,
    rq: Scalar,
    x0: Option<Scalar>,
    sigma0: Scalar,
) -> Result<EffectiveProperties, GradientModelError> {
    let z = surface_impedance(f_hz, rq, x0, sigma0)?;
    Ok(effective_properties(z, f_hz, sigma0))
}
