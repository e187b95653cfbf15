//! Data structures shared across the field pipeline.
//!
//! This module defines the immutable per-snapshot records parsed from the
//! coordinate table, the indexed [`frame::Frame`] view built from them, the
//! derived solvent charge-site representation, and the per-probe output row.

pub mod atom;
pub mod frame;
pub mod ids;
pub mod molecule;
pub mod result;
