//! # Starkfield Core Library
//!
//! A library for post-processing molecular-dynamics trajectory snapshots:
//! it estimates the electrostatic field that surrounding solvent molecules
//! produce at a small set of solute probe atoms and projects that field
//! onto the bisector of two bonds at the probe, one value per timestep.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict three-layer architecture so each concern
//! stays independently testable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomRecord`,
//!   `Frame`, `SolventMolecule`), the data-driven charge models, the pure
//!   field and bisector math, and table I/O.
//!
//! - **[`engine`]: The Logic Core.** Run configuration, the per-frame
//!   evaluation task, progress reporting, and error types. Frames never
//!   share mutable state, which is what makes the frame loop trivially
//!   parallelizable.
//!
//! - **[`workflows`]: The Public API.** The pipeline driver that walks the
//!   table's timesteps in first-appearance order and produces the result
//!   rows. This is the entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
