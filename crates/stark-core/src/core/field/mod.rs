//! Solvent charge models and the cutoff-truncated Coulomb field evaluator.
//!
//! The charge model is a data-driven descriptor (site roles, charges, and a
//! cutoff reference role) rather than code branches, so three-site,
//! four-site, and single-site solvent representations share one assembler
//! and one evaluator.

pub mod assembler;
pub mod evaluator;
pub mod model;
pub mod potentials;
