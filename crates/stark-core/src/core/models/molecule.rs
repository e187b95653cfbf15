use nalgebra::Point3;

/// A point charge derived by pairing an atom record with a model charge.
///
/// Charge sites are never stored in the coordinate table; they exist only
/// for the lifetime of one frame's field evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeSite {
    /// Site coordinates, in the table's length unit.
    pub position: Point3<f64>,
    /// Partial charge in elementary-charge units.
    pub charge: f64,
}

/// One complete solvent molecule of a frame, with its charge topology
/// attached.
///
/// The arity and labeling of `sites` comes from the active charge model.
/// `reference` is the position used for cutoff inclusion only; for four-site
/// models it is the (charge-free) oxygen, so it need not appear in `sites`.
/// All sites are drawn from the same `(resid, timestep)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolventMolecule {
    pub resid: i64,
    pub reference: Point3<f64>,
    pub sites: Vec<ChargeSite>,
}
