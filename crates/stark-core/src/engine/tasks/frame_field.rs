use crate::core::field::assembler::assemble_molecules;
use crate::core::field::evaluator::field_at;
use crate::core::models::frame::Frame;
use crate::core::models::result::FieldResult;
use crate::core::utils::geometry::{bond_bisector, project_onto};
use crate::engine::config::TraceConfig;
use tracing::debug;

/// Evaluates the solvent field at every configured probe of one frame.
///
/// Probes absent from the frame produce no row; a probe whose neighbor pair
/// is unconfigured or incomplete gets a `NaN` projection. Neither case stops
/// the run: missing atoms in a frame are data gaps, and the time series
/// stays as complete as the data allows.
pub fn run(frame: &Frame, config: &TraceConfig) -> Vec<FieldResult> {
    let molecules = assemble_molecules(frame, &config.charge_model);
    debug!(
        timestep = frame.timestep(),
        molecules = molecules.len(),
        "Assembled solvent molecules"
    );

    let mut results = Vec::with_capacity(config.probes.len());
    for probe in &config.probes {
        let Some(position) = frame.position_of(&probe.name) else {
            debug!(
                timestep = frame.timestep(),
                probe = %probe.name,
                "Probe atom missing from frame"
            );
            continue;
        };

        let field = field_at(&position, &molecules, config.cutoff, config.cutoff_policy);

        let projection = probe
            .neighbors
            .as_ref()
            .and_then(|(n1, n2)| {
                let p1 = frame.position_of(n1)?;
                let p2 = frame.position_of(n2)?;
                Some(project_onto(&field, &bond_bisector(&position, &p1, &p2)))
            })
            .unwrap_or(f64::NAN);

        results.push(FieldResult {
            timestep: frame.timestep(),
            atom: probe.name.clone(),
            field,
            projection,
        });
    }

    results
}
