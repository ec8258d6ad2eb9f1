#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants and smooth-conductor references.
pub mod constants;
/// Shared complex scalar aliases and helpers.
pub mod math;
/// Complex-parameter hypergeometric function evaluators.
pub mod special;
/// Derivation of the closed-form model parameters.
pub mod parameters;
/// Tangential magnetic field inside the roughness transition layer.
pub mod field;
/// Rough-conductor surface impedance evaluation.
pub mod impedance;
/// Material descriptor and effective-property derivation.
pub mod materials;
/// Frequency-grid builders and sweep post-processing helpers.
pub mod sweep;
/// Error types shared between modules.
pub mod errors;
/// Common exports for downstream crates.
pub mod prelude;
