//! # Core Module
//!
//! Stateless building blocks of the field pipeline: the data model for
//! trajectory snapshots, the solvent charge models and the Coulomb field
//! evaluator, bisector geometry, and table I/O.
//!
//! Nothing in this layer holds state across frames; every function computes
//! from the records of a single timestep.

pub mod field;
pub mod io;
pub mod models;
pub mod utils;
