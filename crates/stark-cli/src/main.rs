mod cli;
mod config;
mod error;
mod logging;
mod progress;

use crate::cli::Cli;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use clap::Parser;
use starkfield::core::io::report;
use starkfield::engine::progress::ProgressReporter;
use starkfield::workflows;
use tracing::{debug, info, warn};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("🚀 Starkfield CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!("Setting Rayon global thread pool to {} threads.", num_threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| anyhow::anyhow!("Failed to build global thread pool: {}", e))?;
    }

    let file_config = match &cli.config {
        Some(path) => {
            info!("Loading run configuration from {:?}", path);
            config::RunFileConfig::from_file(path)?
        }
        None => config::RunFileConfig::default(),
    };
    let trace_config = config::resolve(file_config, &cli)?;
    debug!("Resolved trace configuration: {:?}", &trace_config);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Computing solvent field trace...");
    let results = workflows::trace::run_from_path(&cli.input, &trace_config, &reporter)?;

    if results.is_empty() {
        warn!("Run completed but produced no result rows.");
        println!("Warning: no probe atoms were found in any frame.");
    }

    report::write_to_path(
        &results,
        &trace_config.probe_names(),
        trace_config.report_form,
        &cli.output,
    )
    .map_err(starkfield::engine::error::EngineError::from)?;

    info!("Result table written to {:?}", &cli.output);
    println!(
        "✓ Result table ({} rows) written to: {}",
        results.len(),
        cli.output.display()
    );

    Ok(())
}
