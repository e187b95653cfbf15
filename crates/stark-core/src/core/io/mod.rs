//! Reading the upstream coordinate table and writing the result table.
//!
//! The reader is the only place unit conversion happens; the writers are the
//! only place floats are formatted. Both sides are deliberately strict about
//! schema and deliberately deterministic, so identical inputs produce
//! byte-identical outputs.

pub mod report;
pub mod table;
