use super::atom::AtomRecord;
use super::ids::AtomKey;
use nalgebra::Point3;
use slotmap::SlotMap;
use std::collections::HashMap;

/// All atom records sharing one timestep, indexed for O(1) role lookups.
///
/// A frame is the unit of independent computation: every distance and charge
/// evaluation draws only on records stored here, never on other frames. Two
/// lookup maps are built once at construction so that molecule assembly and
/// probe resolution never rescan the record list: a per-residue site index
/// for solvent residues and a by-name index over all atoms for the solute.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    timestep: i64,
    atoms: SlotMap<AtomKey, AtomRecord>,
    /// Distinct solvent resids in first-appearance order.
    solvent_order: Vec<i64>,
    /// Solvent site lookup: resid -> atom name -> key. First occurrence wins.
    solvent_sites: HashMap<i64, HashMap<String, AtomKey>>,
    /// By-name lookup over the whole frame. First occurrence wins.
    by_name: HashMap<String, AtomKey>,
}

impl Frame {
    /// Builds a frame from the records of one timestep.
    ///
    /// `solvent_resnames` selects which residues are candidates for molecule
    /// assembly; an empty slice treats every residue as a candidate. Records
    /// whose timestep disagrees with `timestep` are ignored.
    pub fn build<I>(timestep: i64, records: I, solvent_resnames: &[String]) -> Self
    where
        I: IntoIterator<Item = AtomRecord>,
    {
        let mut frame = Frame {
            timestep,
            ..Default::default()
        };

        for record in records {
            if record.timestep != timestep {
                continue;
            }
            let resid = record.resid;
            let is_solvent = solvent_resnames.is_empty()
                || solvent_resnames.iter().any(|name| *name == record.resname);
            let atomname = record.atomname.clone();
            let key = frame.atoms.insert(record);

            if is_solvent {
                let sites = frame.solvent_sites.entry(resid).or_insert_with(|| {
                    frame.solvent_order.push(resid);
                    HashMap::new()
                });
                sites.entry(atomname.clone()).or_insert(key);
            }
            frame.by_name.entry(atomname).or_insert(key);
        }

        frame
    }

    pub fn timestep(&self) -> i64 {
        self.timestep
    }

    pub fn atom(&self, key: AtomKey) -> Option<&AtomRecord> {
        self.atoms.get(key)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Distinct solvent resids in the order they first appear in the table.
    pub fn solvent_residues(&self) -> &[i64] {
        &self.solvent_order
    }

    /// Looks up one named site of a solvent residue.
    pub fn solvent_site(&self, resid: i64, atomname: &str) -> Option<&AtomRecord> {
        self.solvent_sites
            .get(&resid)
            .and_then(|sites| sites.get(atomname))
            .and_then(|&key| self.atoms.get(key))
    }

    /// Position of the first atom carrying `atomname` anywhere in the frame.
    pub fn position_of(&self, atomname: &str) -> Option<Point3<f64>> {
        self.by_name
            .get(atomname)
            .and_then(|&key| self.atoms.get(key))
            .map(|record| record.position)
    }
}
