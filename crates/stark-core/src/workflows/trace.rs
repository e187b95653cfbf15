use crate::core::io::table::CoordinateTable;
use crate::core::models::result::FieldResult;
use crate::engine::config::TraceConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use std::path::Path;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs the field pipeline over a loaded coordinate table.
///
/// Frames are evaluated in the order their timesteps first appear in the
/// table. With the `parallel` feature the frame loop fans out over a rayon
/// pool; frames share no mutable state, and results are collected by frame
/// index, so the output is identical to the sequential run.
#[instrument(skip_all, name = "field_trace_workflow")]
pub fn run(
    table: CoordinateTable,
    config: &TraceConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<FieldResult>, EngineError> {
    config.charge_model.validate()?;

    reporter.report(Progress::PhaseStart {
        name: "Building frames",
    });
    let frames = table.into_frames(&config.solvent_resnames);
    reporter.report(Progress::PhaseFinish);

    info!(
        frames = frames.len(),
        probes = config.probes.len(),
        model = %config.charge_model.name,
        cutoff = config.cutoff,
        "Evaluating solvent fields"
    );
    reporter.report(Progress::TaskStart {
        total_steps: frames.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let per_frame: Vec<Vec<FieldResult>> = frames
        .iter()
        .map(|frame| {
            let rows = tasks::frame_field::run(frame, config);
            reporter.report(Progress::TaskIncrement);
            rows
        })
        .collect();

    #[cfg(feature = "parallel")]
    let per_frame: Vec<Vec<FieldResult>> = frames
        .par_iter()
        .map(|frame| {
            let rows = tasks::frame_field::run(frame, config);
            reporter.report(Progress::TaskIncrement);
            rows
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let results: Vec<FieldResult> = per_frame.into_iter().flatten().collect();
    info!(rows = results.len(), "Field trace complete");
    Ok(results)
}

/// Reads the coordinate table at `path` (converting units at ingestion)
/// and runs the pipeline on it.
pub fn run_from_path<P: AsRef<Path>>(
    path: P,
    config: &TraceConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<FieldResult>, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Reading coordinate table",
    });
    let table = CoordinateTable::read_from_path(path, config.input_unit)?;
    reporter.report(Progress::PhaseFinish);
    run(table, config, reporter)
}
