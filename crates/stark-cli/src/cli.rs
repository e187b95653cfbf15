use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Starkfield CLI - Estimates the solvent electrostatic field at solute probe atoms from a trajectory coordinate table and projects it onto local bond bisectors.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the coordinate table emitted by the trajectory converter.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output result table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to the run configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Configuration Overrides ---
    /// Override the distance cutoff (in the input table's length unit).
    #[arg(long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Override the charge model by preset name
    /// (e.g. 'tip3p', 'tip4p', 'tip4p-3site', 'oxygen-only').
    #[arg(short, long, value_name = "NAME")]
    pub model: Option<String>,

    /// Override the cutoff policy ('by-molecule' or 'by-site').
    #[arg(long, value_name = "POLICY")]
    pub cutoff_policy: Option<String>,

    /// Override the output form ('long' or 'wide').
    #[arg(short, long, value_name = "FORM")]
    pub format: Option<String>,

    /// Override the input length unit ('bohr' or 'angstrom').
    #[arg(long, value_name = "UNIT")]
    pub unit: Option<String>,

    /// Set the number of threads for parallel frame evaluation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
