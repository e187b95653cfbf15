use nalgebra::Point3;

/// A single row of the coordinate table: one atom in one trajectory snapshot.
///
/// Records are immutable once parsed. Within a timestep a solvent atom is
/// identified by `(resid, atomname)`; solute probe and neighbor atoms are
/// assumed to carry frame-unique names and are identified by `atomname`
/// alone.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Residue sequence number the atom belongs to.
    pub resid: i64,
    /// Residue name (e.g. "SOL", "ARG").
    pub resname: String,
    /// Atom name within the residue (e.g. "OH2", "NE").
    pub atomname: String,
    /// Atom serial number assigned by the upstream trajectory converter.
    pub serial: i64,
    /// Snapshot index this record belongs to.
    pub timestep: i64,
    /// Coordinates in the table's length unit (Bohr once ingested).
    pub position: Point3<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_record_equality_and_clone_work() {
        let record = AtomRecord {
            resid: 42,
            resname: "SOL".to_string(),
            atomname: "OH2".to_string(),
            serial: 7,
            timestep: 0,
            position: Point3::new(1.0, 2.0, 3.0),
        };
        let copy = record.clone();
        assert_eq!(record, copy);
    }
}
