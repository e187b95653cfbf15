use super::model::ChargeModel;
use crate::core::models::frame::Frame;
use crate::core::models::molecule::{ChargeSite, SolventMolecule};
use tracing::trace;

/// Groups a frame's solvent residues into complete molecules under the
/// active charge model.
///
/// A residue yields a molecule only when every role the model names is
/// present in the frame; residues missing any role are skipped silently.
/// Trajectory data legitimately loses atoms to upstream filtering, so an
/// incomplete residue is a data gap, not an error. Molecules are emitted in
/// the residues' first-appearance order.
pub fn assemble_molecules(frame: &Frame, model: &ChargeModel) -> Vec<SolventMolecule> {
    let mut molecules = Vec::new();

    'residues: for &resid in frame.solvent_residues() {
        let Some(reference) = frame.solvent_site(resid, &model.reference_role) else {
            trace!(
                resid,
                timestep = frame.timestep(),
                "Skipping residue without reference site"
            );
            continue;
        };

        let mut sites = Vec::with_capacity(model.sites.len());
        for spec in &model.sites {
            match frame.solvent_site(resid, &spec.role) {
                Some(record) => sites.push(ChargeSite {
                    position: record.position,
                    charge: spec.charge,
                }),
                None => {
                    trace!(
                        resid,
                        role = %spec.role,
                        timestep = frame.timestep(),
                        "Skipping incomplete solvent residue"
                    );
                    continue 'residues;
                }
            }
        }

        molecules.push(SolventMolecule {
            resid,
            reference: reference.position,
            sites,
        });
    }

    molecules
}
