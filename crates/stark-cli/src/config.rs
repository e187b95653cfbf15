use crate::cli::Cli;
use crate::error::{CliError, Result};
use serde::Deserialize;
use starkfield::core::field::evaluator::CutoffPolicy;
use starkfield::core::field::model::ChargeModel;
use starkfield::core::io::report::ReportForm;
use starkfield::core::io::table::LengthUnit;
use starkfield::engine::config::{ProbeSpec, TraceConfig};
use starkfield::engine::error::EngineError;
use std::path::Path;
use std::str::FromStr;

/// Compiled-in defaults reproducing the original arginine solvation
/// analysis: all three guanidinium nitrogens probed, each using the other
/// two as bisector neighbors.
pub mod defaults {
    pub const CUTOFF_BOHR: f64 = 100.0;
    pub const MODEL: &str = "tip3p";
    pub const SOLVENT_RESNAMES: [&str; 4] = ["SOL", "WAT", "HOH", "TIP3"];
    pub const PROBES: [(&str, &str, &str); 3] = [
        ("NE", "NH1", "NH2"),
        ("NH1", "NE", "NH2"),
        ("NH2", "NE", "NH1"),
    ];
}

/// The run configuration file: every field optional, every omission filled
/// from `defaults` or overridden by a CLI flag.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunFileConfig {
    pub cutoff: Option<f64>,
    pub model: Option<ModelSelection>,
    pub cutoff_policy: Option<CutoffPolicy>,
    pub solvent_resnames: Option<Vec<String>>,
    pub probes: Option<Vec<ProbeFileSpec>>,
    pub format: Option<ReportForm>,
    pub unit: Option<LengthUnit>,
}

/// Either the name of a built-in preset or a full inline descriptor.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ModelSelection {
    Preset(String),
    Inline(ChargeModel),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeFileSpec {
    pub name: String,
    #[serde(default)]
    pub neighbors: Option<(String, String)>,
}

impl RunFileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

/// Merges the configuration file with CLI overrides (CLI wins) and fills
/// the remaining gaps from `defaults`.
pub fn resolve(file: RunFileConfig, cli: &Cli) -> Result<TraceConfig> {
    let cutoff = cli
        .cutoff
        .or(file.cutoff)
        .unwrap_or(defaults::CUTOFF_BOHR);

    let charge_model = match (&cli.model, file.model) {
        (Some(name), _) => ChargeModel::preset(name).map_err(EngineError::from)?,
        (None, Some(ModelSelection::Preset(name))) => {
            ChargeModel::preset(&name).map_err(EngineError::from)?
        }
        (None, Some(ModelSelection::Inline(model))) => {
            model.validate().map_err(EngineError::from)?;
            model
        }
        (None, None) => ChargeModel::preset(defaults::MODEL).map_err(EngineError::from)?,
    };

    let cutoff_policy = match &cli.cutoff_policy {
        Some(s) => CutoffPolicy::from_str(s)
            .map_err(|_| CliError::Argument(format!("unknown cutoff policy '{s}'")))?,
        None => file.cutoff_policy.unwrap_or_default(),
    };

    let report_form = match &cli.format {
        Some(s) => ReportForm::from_str(s)
            .map_err(|_| CliError::Argument(format!("unknown output form '{s}'")))?,
        None => file.format.unwrap_or_default(),
    };

    let input_unit = match &cli.unit {
        Some(s) => LengthUnit::from_str(s)
            .map_err(|_| CliError::Argument(format!("unknown length unit '{s}'")))?,
        None => file.unit.unwrap_or_default(),
    };

    let solvent_resnames = file.solvent_resnames.unwrap_or_else(|| {
        defaults::SOLVENT_RESNAMES
            .iter()
            .map(|s| s.to_string())
            .collect()
    });

    let probes = match file.probes {
        Some(specs) => specs
            .into_iter()
            .map(|spec| ProbeSpec {
                name: spec.name,
                neighbors: spec.neighbors,
            })
            .collect(),
        None => defaults::PROBES
            .iter()
            .map(|&(name, n1, n2)| ProbeSpec::with_neighbors(name, n1, n2))
            .collect(),
    };

    TraceConfig::builder()
        .cutoff(cutoff)
        .charge_model(charge_model)
        .cutoff_policy(cutoff_policy)
        .solvent_resnames(solvent_resnames)
        .probes(probes)
        .report_form(report_form)
        .input_unit(input_unit)
        .build()
        .map_err(EngineError::from)
        .map_err(CliError::from)
}
